//! Error types for reposeed-template.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template materialization.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template directory does not exist (external precondition).
    #[error("template directory not found at {path}")]
    TemplateMissing { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`TemplateError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TemplateError {
    TemplateError::Io {
        path: path.into(),
        source,
    }
}
