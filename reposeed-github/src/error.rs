//! Error types for reposeed-github.

use thiserror::Error;

/// All errors that can arise from GitHub API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered outside the 2xx range. Body retained for diagnostics.
    #[error("GitHub API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Transport-level failure (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(#[from] Box<ureq::Transport>),

    /// The response body could not be read or decoded.
    #[error("invalid response body: {0}")]
    Body(#[from] std::io::Error),

    /// JSON serialization of a request payload failed.
    #[error("payload serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `GET /user` succeeded but carried no usable login — the credential is
    /// invalid or insufficiently scoped.
    #[error("credential resolves to no login; check the token and its scopes")]
    MissingLogin,
}

impl ApiError {
    /// True for the 2xx-gate failures (never for transport or decode errors).
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
