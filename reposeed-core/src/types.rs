//! Domain newtypes for reposeed.
//!
//! All names that cross a collaborator boundary (API payloads, git remotes,
//! template substitution) are strongly typed; raw `String` is confined to
//! credential material.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for the repository being provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed version tag, used purely as a substitution value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionTag(pub String);

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for VersionTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionTag {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// The account or organization namespace owning the new repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(pub String);

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Owner {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Owner {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(RepoName::from("demo").to_string(), "demo");
        assert_eq!(VersionTag::from("1.24.0").to_string(), "1.24.0");
        assert_eq!(Owner::from("acme").to_string(), "acme");
    }

    #[test]
    fn newtype_equality() {
        let a = RepoName::from("x");
        let b = RepoName::from(String::from("x"));
        assert_eq!(a, b);
    }
}
