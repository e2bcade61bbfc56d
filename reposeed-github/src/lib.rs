//! GitHub REST collaborator for reposeed.
//!
//! The workflow talks to the platform through the narrow [`Forge`] trait so
//! it stays collaborator-agnostic and testable with fakes. [`GitHubClient`]
//! is the production implementation over a blocking `ureq` agent.
//!
//! Public API surface:
//! - [`Forge`] — the collaborator seam
//! - [`GitHubClient`] — `ureq`-backed implementation
//! - [`models`] — fixed-shape request/response payloads
//! - [`error`] — [`ApiError`]

pub mod client;
pub mod error;
pub mod models;

use reposeed_core::types::{Owner, RepoName};

pub use client::GitHubClient;
pub use error::ApiError;
pub use models::{BranchProtection, CreateRepoRequest, CreatedRepo, RepoSettings};

/// Platform operations the provisioning workflow depends on.
///
/// One method per REST call; implementations must not retry.
pub trait Forge {
    /// `GET /user` — login of the identity behind the credential.
    ///
    /// A `null` or empty login is an authentication failure
    /// ([`ApiError::MissingLogin`]), not a success with a sentinel value.
    fn viewer_login(&self) -> Result<Owner, ApiError>;

    /// `POST /orgs/{org}/repos` or `POST /user/repos`.
    ///
    /// Returns the created repository's URLs on 2xx; any other status is
    /// [`ApiError::Status`] with the response body retained for diagnostics.
    fn create_repository(
        &self,
        org: Option<&Owner>,
        req: &CreateRepoRequest,
    ) -> Result<CreatedRepo, ApiError>;

    /// `PATCH /repos/{owner}/{name}` — merge/workflow policy.
    fn update_settings(
        &self,
        owner: &Owner,
        name: &RepoName,
        settings: &RepoSettings,
    ) -> Result<(), ApiError>;

    /// `PUT /repos/{owner}/{name}/branches/{branch}/protection`.
    fn protect_branch(
        &self,
        owner: &Owner,
        name: &RepoName,
        branch: &str,
        protection: &BranchProtection,
    ) -> Result<(), ApiError>;
}
