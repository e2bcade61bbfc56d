//! Error types for reposeed-git.

use thiserror::Error;

/// All errors that can arise from supervised `git` invocations.
#[derive(Debug, Error)]
pub enum GitError {
    /// The `git` binary could not be spawned at all.
    #[error("failed to run `git {args}`: {source}")]
    Spawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// `git` ran and exited non-zero; stderr retained for diagnostics.
    #[error("`git {args}` failed: {stderr}")]
    Command { args: String, stderr: String },
}
