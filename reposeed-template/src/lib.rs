//! Template workspace materialization.
//!
//! Public API surface:
//! - [`materialize`] — copy + strip VCS metadata + substitute + mark tools
//! - [`substitute`] — pure placeholder substitution over one string
//! - [`error`] — [`TemplateError`]

pub mod error;
pub mod materialize;

pub use error::TemplateError;
pub use materialize::{materialize, substitute};
