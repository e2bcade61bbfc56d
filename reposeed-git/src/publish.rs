//! The publish step: initial commit and push behind a trait seam.

use std::path::Path;

use crate::error::GitError;
use crate::operations;

/// Fixed message for the initial commit.
pub const COMMIT_MESSAGE: &str = "Initial commit";

/// Name under which the created repository is registered.
pub const REMOTE_NAME: &str = "origin";

/// Outcome of publishing a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    /// False when the workspace had nothing to commit (tolerated, not fatal).
    pub committed: bool,
}

/// Commit identity applied as repository-local config before committing.
///
/// Production leaves this unset and relies on the ambient git configuration;
/// tests inject one so they run in bare environments.
#[derive(Debug, Clone)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Seam between the workflow and the version-control collaborator.
pub trait Publisher {
    /// Initialize history in `workspace`, commit everything, and push the
    /// branch to `remote_url` as the tracking upstream.
    fn publish(&self, workspace: &Path, remote_url: &str) -> Result<PublishOutcome, GitError>;
}

/// `git` command-line implementation of [`Publisher`].
#[derive(Debug, Clone)]
pub struct GitCli {
    pub branch: String,
    pub identity: Option<Identity>,
}

impl Default for GitCli {
    fn default() -> Self {
        GitCli {
            branch: "master".to_string(),
            identity: None,
        }
    }
}

impl Publisher for GitCli {
    fn publish(&self, workspace: &Path, remote_url: &str) -> Result<PublishOutcome, GitError> {
        operations::init(workspace, &self.branch)?;
        if let Some(identity) = &self.identity {
            operations::config(workspace, "user.name", &identity.name)?;
            operations::config(workspace, "user.email", &identity.email)?;
        }

        operations::add_all(workspace)?;
        let committed = if operations::has_changes(workspace)? {
            operations::commit(workspace, COMMIT_MESSAGE)?;
            true
        } else {
            tracing::warn!("nothing to commit in {}", workspace.display());
            false
        };

        operations::add_remote(workspace, REMOTE_NAME, remote_url)?;
        operations::push_upstream(workspace, REMOTE_NAME, &self.branch)?;

        tracing::info!("pushed {} to {remote_url}", self.branch);
        Ok(PublishOutcome { committed })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::operations::run_git;

    fn test_publisher() -> GitCli {
        GitCli {
            branch: "master".to_string(),
            identity: Some(Identity {
                name: "tester".to_string(),
                email: "tester@example.invalid".to_string(),
            }),
        }
    }

    fn bare_remote() -> (TempDir, String) {
        let bare = TempDir::new().unwrap();
        run_git(bare.path(), &["init", "--bare", "-b", "master"]).expect("bare init");
        let url = bare.path().to_str().unwrap().to_string();
        (bare, url)
    }

    #[test]
    fn publish_commits_and_pushes_master() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("go.mod"), "module demo\n").unwrap();
        let (bare, url) = bare_remote();

        let outcome = test_publisher()
            .publish(work.path(), &url)
            .expect("publish");
        assert!(outcome.committed);

        let heads = run_git(bare.path(), &["branch", "--list"]).expect("branches");
        assert!(String::from_utf8_lossy(&heads.stdout).contains("master"));

        // Upstream tracking is configured for the pushed branch.
        let upstream = run_git(
            work.path(),
            &["rev-parse", "--abbrev-ref", "master@{upstream}"],
        )
        .expect("upstream");
        assert_eq!(
            String::from_utf8_lossy(&upstream.stdout).trim(),
            "origin/master"
        );
    }

    #[test]
    fn empty_workspace_is_tolerated() {
        let work = TempDir::new().unwrap();
        let (_bare, url) = bare_remote();

        // Nothing to commit and nothing to push; the push of a branch with
        // no commits fails, so an empty workspace publishes no refs but the
        // commit step itself must not error out.
        let result = test_publisher().publish(work.path(), &url);
        match result {
            Ok(outcome) => assert!(!outcome.committed),
            // Pushing an unborn branch is rejected by git itself.
            Err(GitError::Command { args, .. }) => assert!(args.starts_with("push")),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn publish_to_unreachable_remote_fails() {
        let work = TempDir::new().unwrap();
        fs::write(work.path().join("file"), "x").unwrap();

        let err = test_publisher()
            .publish(work.path(), "/nonexistent/remote/path")
            .expect_err("push should fail");
        assert!(matches!(err, GitError::Command { .. }));
    }
}
