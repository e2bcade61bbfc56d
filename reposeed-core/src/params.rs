//! Invocation parameter resolution.
//!
//! # Environment keys
//!
//! | Key            | Required | Meaning                                    |
//! |----------------|----------|--------------------------------------------|
//! | `REPO_NAME`    | yes      | name of the repository to provision        |
//! | `GO_VERSION`   | yes      | version tag substituted into the template  |
//! | `GITHUB_TOKEN` | yes      | bearer token for the GitHub REST API       |
//! | `GITHUB_ORG`   | no       | target organization (defaults to the user) |
//!
//! # API pattern
//!
//! Resolution has two forms:
//! - `from_lookup(f)` — explicit key→value closure; used in tests with maps
//! - `from_env()` — reads the process environment, delegates to `from_lookup`
//!
//! Tests must NEVER call `from_env`; always inject a lookup.

use crate::error::ConfigError;
use crate::types::{Owner, RepoName, VersionTag};

/// Environment key for the repository name.
pub const REPO_NAME: &str = "REPO_NAME";
/// Environment key for the version tag.
pub const GO_VERSION: &str = "GO_VERSION";
/// Environment key for the API bearer token.
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
/// Environment key for the optional target organization.
pub const GITHUB_ORG: &str = "GITHUB_ORG";

/// Fully resolved invocation parameters.
///
/// Invariant: `name`, `version_tag`, and `token` are non-empty; resolution
/// fails before construction otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub name: RepoName,
    pub version_tag: VersionTag,
    pub token: String,
    pub organization: Option<Owner>,
}

impl Params {
    /// Resolve parameters from an arbitrary key→value lookup.
    ///
    /// An absent key and an empty value are treated identically: required
    /// keys fail with [`ConfigError::Missing`] naming the key, the optional
    /// organization resolves to `None`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let name = required(&lookup, REPO_NAME)?;
        let version_tag = required(&lookup, GO_VERSION)?;
        let token = required(&lookup, GITHUB_TOKEN)?;
        let organization = optional(&lookup, GITHUB_ORG);

        Ok(Params {
            name: RepoName(name),
            version_tag: VersionTag(version_tag),
            token,
            organization: organization.map(Owner),
        })
    }

    /// `from_lookup` convenience wrapper over the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<String, ConfigError> {
    match optional(lookup, key) {
        Some(value) => Ok(value),
        None => Err(ConfigError::Missing { key }),
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
