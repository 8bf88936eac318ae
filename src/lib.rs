//! Secret Mount - read container secrets mounted as files.
//!
//! Container runtimes expose secrets as individual files under a well-known
//! directory (conventionally `/run/secrets/`). This library reads them back
//! out, either as a raw string or as a `key=value` map.

pub mod error;
pub mod reader;

pub use error::SecretError;
pub use reader::{SecretReader, DEFAULT_SECRETS_LOCATION};
