//! Error types for secret reading.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur while constructing a reader or reading a secret.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("location to read secrets from is required")]
    MissingLocation,

    #[error("secret name is required")]
    MissingSecretName,

    #[error("unable to read secret file {name}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("secret {name} appears to be empty")]
    EmptyValue { name: String },

    #[error("invalid content in secret file {name}")]
    MalformedContent { name: String },
}

impl SecretError {
    /// Whether this error stems from the secret file not existing, as
    /// opposed to some other I/O fault. Lets callers treat an absent
    /// optional secret differently from a permission problem.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SecretError::Io { source, .. } if source.kind() == ErrorKind::NotFound
        )
    }
}
