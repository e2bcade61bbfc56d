//! Blocking `ureq` implementation of the [`Forge`] trait.
//!
//! One HTTP request per operation, no retries, no explicit timeout beyond
//! the agent's defaults. Non-2xx responses surface as
//! [`ApiError::Status`] with the body preserved.

use reposeed_core::types::{Owner, RepoName};

use crate::error::ApiError;
use crate::models::{BranchProtection, CreateRepoRequest, CreatedRepo, RepoSettings, Viewer};
use crate::Forge;

/// Production API root.
const API_ROOT: &str = "https://api.github.com";

/// Standard media type for the REST API.
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Accept value for the branch protection endpoint: the standard media type
/// plus the preview marker the endpoint additionally requires. Sent as one
/// combined header because `set` replaces a same-named header.
const ACCEPT_PROTECTION: &str =
    "application/vnd.github+json, application/vnd.github.luke-cage-preview+json";

/// Pinned REST API version marker.
const API_VERSION: &str = "2022-11-28";

/// GitHub REST client carrying a bearer token.
///
/// The base URL is injectable so tests can point the client at a local
/// server; production code uses [`GitHubClient::new`].
pub struct GitHubClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
}

impl GitHubClient {
    /// Client against the production API root.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, API_ROOT)
    }

    /// Client against an arbitrary base URL (tests).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        GitHubClient {
            agent: ureq::agent(),
            token: token.into(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request with the headers every call carries.
    fn request(&self, method: &str, path: &str) -> ureq::Request {
        self.agent
            .request(method, &self.url(path))
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", ACCEPT_JSON)
            .set("X-GitHub-Api-Version", API_VERSION)
            .set("User-Agent", "reposeed")
    }

    /// Execute a request, mapping ureq's error split onto [`ApiError`].
    fn send(
        req: ureq::Request,
        body: Option<serde_json::Value>,
    ) -> Result<ureq::Response, ApiError> {
        let result = match body {
            Some(value) => req.send_json(value),
            None => req.call(),
        };
        match result {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(ApiError::Status { status, body })
            }
            Err(ureq::Error::Transport(transport)) => Err(ApiError::Transport(Box::new(transport))),
        }
    }
}

/// Creation endpoint path: personal vs organization namespace.
fn create_repo_path(org: Option<&Owner>) -> String {
    match org {
        Some(org) => format!("/orgs/{org}/repos"),
        None => "/user/repos".to_string(),
    }
}

impl Forge for GitHubClient {
    fn viewer_login(&self) -> Result<Owner, ApiError> {
        tracing::debug!("GET /user");
        let response = Self::send(self.request("GET", "/user"), None)?;
        let viewer: Viewer = response.into_json()?;
        match viewer.login {
            Some(login) if !login.is_empty() => Ok(Owner(login)),
            _ => Err(ApiError::MissingLogin),
        }
    }

    fn create_repository(
        &self,
        org: Option<&Owner>,
        req: &CreateRepoRequest,
    ) -> Result<CreatedRepo, ApiError> {
        let path = create_repo_path(org);
        tracing::debug!("POST {path}");
        let response = Self::send(
            self.request("POST", &path),
            Some(serde_json::to_value(req)?),
        )?;
        let created: CreatedRepo = response.into_json()?;
        tracing::info!("created repository: {}", created.html_url);
        Ok(created)
    }

    fn update_settings(
        &self,
        owner: &Owner,
        name: &RepoName,
        settings: &RepoSettings,
    ) -> Result<(), ApiError> {
        let path = format!("/repos/{owner}/{name}");
        tracing::debug!("PATCH {path}");
        Self::send(
            self.request("PATCH", &path),
            Some(serde_json::to_value(settings)?),
        )?;
        Ok(())
    }

    fn protect_branch(
        &self,
        owner: &Owner,
        name: &RepoName,
        branch: &str,
        protection: &BranchProtection,
    ) -> Result<(), ApiError> {
        let path = format!("/repos/{owner}/{name}/branches/{branch}/protection");
        tracing::debug!("PUT {path}");
        let req = self
            .request("PUT", &path)
            .set("Accept", ACCEPT_PROTECTION);
        Self::send(req, Some(serde_json::to_value(protection)?))?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = GitHubClient::with_base_url("tok", "http://127.0.0.1:9999/");
        assert_eq!(client.url("/user"), "http://127.0.0.1:9999/user");
    }

    #[test]
    fn personal_creation_path() {
        assert_eq!(create_repo_path(None), "/user/repos");
    }

    #[test]
    fn organization_creation_path() {
        let org = Owner::from("acme");
        assert_eq!(create_repo_path(Some(&org)), "/orgs/acme/repos");
    }

    #[test]
    fn protection_accept_carries_standard_and_preview_markers() {
        let client = GitHubClient::with_base_url("tok", "http://127.0.0.1:9999");
        let req = client
            .request("PUT", "/repos/acme/demo/branches/master/protection")
            .set("Accept", ACCEPT_PROTECTION);
        let accept = req.header("Accept").expect("accept header");
        assert!(accept.contains("application/vnd.github+json"));
        assert!(accept.contains("application/vnd.github.luke-cage-preview+json"));
    }
}
