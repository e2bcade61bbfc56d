//! Supervised `git` command-line collaborator.
//!
//! Public API surface:
//! - [`operations`] — one function per git operation, all rooted at a dir
//! - [`publish`] — the [`Publisher`] trait and its [`GitCli`] implementation
//! - [`error`] — [`GitError`]

pub mod error;
pub mod operations;
pub mod publish;

pub use error::GitError;
pub use publish::{GitCli, Identity, PublishOutcome, Publisher};
