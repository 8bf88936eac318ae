//! Reader for secrets mounted as individual files.
//!
//! # Supported Formats
//!
//! - Raw: the whole file is one opaque value
//! - Map: one `key=value` pair per line, `=` as the sole separator

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::SecretError;

/// Directory where container runtimes mount secrets by default.
pub const DEFAULT_SECRETS_LOCATION: &str = "/run/secrets/";

/// Reads secrets from files under a base directory.
///
/// The reader holds only the base directory. No filesystem access happens
/// at construction time and nothing is cached: every read opens, consumes
/// and closes its own file handle, so a shared reader is safe to use from
/// multiple threads.
///
/// # Example
///
/// ```no_run
/// use secret_mount::SecretReader;
///
/// # fn main() -> Result<(), secret_mount::SecretError> {
/// let reader = SecretReader::default();
/// let db_password = reader.read("db-password")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SecretReader {
    location: PathBuf,
}

impl SecretReader {
    /// Create a reader over a custom secrets directory.
    ///
    /// The directory is not required to exist yet; it is only checked when
    /// a secret is actually read.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::MissingLocation`] if `location` is empty.
    pub fn new(location: impl AsRef<Path>) -> Result<Self, SecretError> {
        let location = location.as_ref();
        if location.as_os_str().is_empty() {
            return Err(SecretError::MissingLocation);
        }

        Ok(Self {
            location: location.to_path_buf(),
        })
    }

    /// The base directory this reader looks up secrets under.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Read a secret as a raw string.
    ///
    /// Returns the file contents untrimmed, exactly as stored.
    ///
    /// # Errors
    ///
    /// - [`SecretError::MissingSecretName`] if `name` is empty
    /// - [`SecretError::Io`] if the file cannot be opened or read, with the
    ///   underlying cause attached
    /// - [`SecretError::EmptyValue`] if the file is zero bytes (container
    ///   runtimes allow creating empty secrets; the raw read rejects them)
    pub fn read(&self, name: &str) -> Result<String, SecretError> {
        if name.is_empty() {
            return Err(SecretError::MissingSecretName);
        }

        let content =
            fs::read_to_string(self.location.join(name)).map_err(|source| SecretError::Io {
                name: name.to_string(),
                source,
            })?;

        if content.is_empty() {
            return Err(SecretError::EmptyValue {
                name: name.to_string(),
            });
        }

        Ok(content)
    }

    /// Read a secret formatted as newline-separated `key=value` pairs.
    ///
    /// Blank lines are skipped. Every other line must contain exactly one
    /// `=`; no quoting, no comments, no whitespace trimming. When the same
    /// key appears on several lines the last one wins. An empty file is a
    /// valid empty map, unlike [`SecretReader::read`] which rejects empty
    /// files.
    ///
    /// # Errors
    ///
    /// - [`SecretError::MissingSecretName`] if `name` is empty
    /// - [`SecretError::Io`] if the file cannot be opened or a line cannot
    ///   be read
    /// - [`SecretError::MalformedContent`] if any line has zero or more
    ///   than one `=`; the whole parse is aborted and no partial map is
    ///   returned
    pub fn read_as_map(&self, name: &str) -> Result<HashMap<String, String>, SecretError> {
        if name.is_empty() {
            return Err(SecretError::MissingSecretName);
        }

        let io_err = |source| SecretError::Io {
            name: name.to_string(),
            source,
        };

        let file = fs::File::open(self.location.join(name)).map_err(io_err)?;

        let mut secret = HashMap::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(io_err)?;
            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split('=').collect();
            if parts.len() != 2 {
                return Err(SecretError::MalformedContent {
                    name: name.to_string(),
                });
            }
            secret.insert(parts[0].to_string(), parts[1].to_string());
        }

        Ok(secret)
    }
}

impl Default for SecretReader {
    /// A reader over [`DEFAULT_SECRETS_LOCATION`]. Cannot fail.
    fn default() -> Self {
        Self {
            location: PathBuf::from(DEFAULT_SECRETS_LOCATION),
        }
    }
}
