//! Error types for reposeed-core.

use thiserror::Error;

/// All errors that can arise while resolving invocation parameters.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable was absent or empty.
    #[error("missing required environment variable: {key}")]
    Missing { key: &'static str },
}
