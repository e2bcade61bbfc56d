//! Low-level git operations, each rooted at an explicit working directory.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::GitError;

/// Run `git <args>` in `dir`, mapping non-zero exits to [`GitError::Command`].
pub(crate) fn run_git(dir: &Path, args: &[&str]) -> Result<Output, GitError> {
    let rendered = args.join(" ");
    tracing::debug!("git {rendered} (in {})", dir.display());

    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| GitError::Spawn {
            args: rendered.clone(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(GitError::Command {
            args: rendered,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

/// Initialize a fresh repository with `branch` as the initial branch.
pub fn init(dir: &Path, branch: &str) -> Result<(), GitError> {
    run_git(dir, &["init", "-b", branch])?;
    Ok(())
}

/// Set a repository-local config value.
pub fn config(dir: &Path, key: &str, value: &str) -> Result<(), GitError> {
    run_git(dir, &["config", key, value])?;
    Ok(())
}

/// Stage all changes.
pub fn add_all(dir: &Path) -> Result<(), GitError> {
    run_git(dir, &["add", "."])?;
    Ok(())
}

/// True when `git status --porcelain` reports anything to commit.
pub fn has_changes(dir: &Path) -> Result<bool, GitError> {
    let output = run_git(dir, &["status", "--porcelain"])?;
    Ok(!output.stdout.is_empty())
}

/// Create a commit with the given message.
pub fn commit(dir: &Path, message: &str) -> Result<(), GitError> {
    run_git(dir, &["commit", "-m", message])?;
    Ok(())
}

/// Add a remote.
pub fn add_remote(dir: &Path, name: &str, url: &str) -> Result<(), GitError> {
    run_git(dir, &["remote", "add", name, url])?;
    Ok(())
}

/// Push `branch` to `remote`, setting it as the tracking upstream.
pub fn push_upstream(dir: &Path, remote: &str, branch: &str) -> Result<(), GitError> {
    run_git(dir, &["push", "-u", remote, branch])?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
