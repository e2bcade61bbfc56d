//! Partial data models for the GitHub REST API.
//!
//! Requests carry only the fields reposeed sets; responses deserialize only
//! the fields reposeed reads — everything else is ignored.

use serde::{Deserialize, Serialize};

use reposeed_core::types::RepoName;

/// The default branch every provisioned repository starts with.
pub const DEFAULT_BRANCH: &str = "master";

/// Status-check context required on the default branch before merging.
pub const REQUIRED_STATUS_CONTEXT: &str = "test";

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Response shape of `GET /user`.
///
/// `login` is an `Option` so a JSON `null` deserializes instead of erroring;
/// the client treats `None` (and empty) as a failed identity lookup.
#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub login: Option<String>,
}

// ---------------------------------------------------------------------------
// Repository creation
// ---------------------------------------------------------------------------

/// Request payload for repository creation.
///
/// The shape is fixed regardless of input: public, all feature tabs off,
/// no auto-init, default branch `master`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoRequest {
    pub name: RepoName,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub auto_init: bool,
    pub default_branch: &'static str,
}

impl CreateRepoRequest {
    pub fn for_name(name: RepoName) -> Self {
        CreateRepoRequest {
            name,
            private: false,
            has_issues: false,
            has_projects: false,
            has_wiki: false,
            auto_init: false,
            default_branch: DEFAULT_BRANCH,
        }
    }
}

/// Response fields retained from repository creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedRepo {
    /// User-facing URL, for logging.
    pub html_url: String,
    /// HTTPS clone URL, registered as the push target.
    pub clone_url: String,
}

// ---------------------------------------------------------------------------
// Repository settings
// ---------------------------------------------------------------------------

/// Payload for `PATCH /repos/{owner}/{name}` — merge and workflow policy.
#[derive(Debug, Clone, Serialize)]
pub struct RepoSettings {
    pub allow_squash_merge: bool,
    pub allow_merge_commit: bool,
    pub allow_rebase_merge: bool,
    pub allow_auto_merge: bool,
    pub delete_branch_on_merge: bool,
    pub default_workflow_permissions: &'static str,
    pub default_branch: &'static str,
}

impl RepoSettings {
    /// Squash-only merges, auto-merge on, branch auto-deletion on, read-only
    /// workflow token.
    pub fn standard() -> Self {
        RepoSettings {
            allow_squash_merge: true,
            allow_merge_commit: false,
            allow_rebase_merge: false,
            allow_auto_merge: true,
            delete_branch_on_merge: true,
            default_workflow_permissions: "read",
            default_branch: DEFAULT_BRANCH,
        }
    }
}

// ---------------------------------------------------------------------------
// Branch protection
// ---------------------------------------------------------------------------

/// Payload for `PUT /repos/{owner}/{name}/branches/{branch}/protection`.
#[derive(Debug, Clone, Serialize)]
pub struct BranchProtection {
    pub required_status_checks: RequiredStatusChecks,
    pub enforce_admins: bool,
    pub required_pull_request_reviews: RequiredPullRequestReviews,
    /// No user/team push restrictions; must serialize as JSON `null`.
    pub restrictions: Option<()>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequiredStatusChecks {
    pub strict: bool,
    pub contexts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RequiredPullRequestReviews {
    pub required_approving_review_count: u32,
}

impl BranchProtection {
    /// Require the [`REQUIRED_STATUS_CONTEXT`] check and one approving
    /// review; administrators exempt; no push restrictions.
    pub fn standard() -> Self {
        BranchProtection {
            required_status_checks: RequiredStatusChecks {
                strict: false,
                contexts: vec![REQUIRED_STATUS_CONTEXT.to_string()],
            },
            enforce_admins: false,
            required_pull_request_reviews: RequiredPullRequestReviews {
                required_approving_review_count: 1,
            },
            restrictions: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn create_request_shape_is_fixed() {
        let req = CreateRepoRequest::for_name(RepoName::from("demo"));
        let value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(
            value,
            json!({
                "name": "demo",
                "private": false,
                "has_issues": false,
                "has_projects": false,
                "has_wiki": false,
                "auto_init": false,
                "default_branch": "master",
            })
        );
    }

    #[test]
    fn create_request_shape_ignores_input_values() {
        // Odd names must not change the flag shape.
        let req = CreateRepoRequest::for_name(RepoName::from("x-y.z_0"));
        let value = serde_json::to_value(&req).expect("serialize");
        assert_eq!(value["private"], Value::Bool(false));
        assert_eq!(value["auto_init"], Value::Bool(false));
        assert_eq!(value["default_branch"], "master");
    }

    #[test]
    fn settings_payload_allows_only_squash_merge() {
        let value = serde_json::to_value(RepoSettings::standard()).expect("serialize");
        assert_eq!(value["allow_squash_merge"], Value::Bool(true));
        assert_eq!(value["allow_merge_commit"], Value::Bool(false));
        assert_eq!(value["allow_rebase_merge"], Value::Bool(false));
        assert_eq!(value["allow_auto_merge"], Value::Bool(true));
        assert_eq!(value["delete_branch_on_merge"], Value::Bool(true));
        assert_eq!(value["default_workflow_permissions"], "read");
        assert_eq!(value["default_branch"], "master");
    }

    #[test]
    fn protection_payload_serializes_null_restrictions() {
        let value = serde_json::to_value(BranchProtection::standard()).expect("serialize");
        assert_eq!(value["restrictions"], Value::Null);
        assert_eq!(value["enforce_admins"], Value::Bool(false));
        assert_eq!(
            value["required_status_checks"]["contexts"],
            json!([REQUIRED_STATUS_CONTEXT])
        );
        assert_eq!(
            value["required_pull_request_reviews"]["required_approving_review_count"],
            1
        );
    }

    #[test]
    fn viewer_tolerates_null_login() {
        let viewer: Viewer = serde_json::from_str(r#"{"login": null}"#).expect("deserialize");
        assert!(viewer.login.is_none());
    }

    #[test]
    fn created_repo_keeps_both_urls() {
        let repo: CreatedRepo = serde_json::from_str(
            r#"{
                "html_url": "https://github.com/acme/demo",
                "clone_url": "https://github.com/acme/demo.git",
                "id": 42,
                "full_name": "acme/demo"
            }"#,
        )
        .expect("deserialize");
        assert_eq!(repo.html_url, "https://github.com/acme/demo");
        assert_eq!(repo.clone_url, "https://github.com/acme/demo.git");
    }
}
