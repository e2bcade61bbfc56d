//! Reposeed core library — invocation parameters, domain newtypes, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes for repository name, version tag, and owner
//! - [`error`] — [`ConfigError`]
//! - [`params`] — environment-driven parameter resolution

pub mod error;
pub mod params;
pub mod types;

pub use error::ConfigError;
pub use params::Params;
pub use types::{Owner, RepoName, VersionTag};
