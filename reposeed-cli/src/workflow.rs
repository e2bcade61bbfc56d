//! The five-stage provisioning workflow.
//!
//! ```text
//! InputResolution → OwnerResolution → RemoteCreation → LocalPublish
//!     → RemoteConfiguration → Done
//! ```
//!
//! Stage 1 happens in `reposeed-core` before this module runs. Stages 2–4
//! are hard gates: any failure aborts with an error and nothing is rolled
//! back (a created remote must be deleted manually). Stage 5 is best-effort:
//! each failed configuration call becomes a warning in the [`Report`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use reposeed_core::types::Owner;
use reposeed_core::Params;
use reposeed_github::models::DEFAULT_BRANCH;
use reposeed_github::{BranchProtection, CreateRepoRequest, Forge, RepoSettings};
use reposeed_git::Publisher;
use reposeed_template::materialize;

/// Summary of a completed provisioning run.
#[derive(Debug)]
pub struct Report {
    pub owner: Owner,
    pub html_url: String,
    pub workspace: PathBuf,
    pub committed: bool,
    /// Soft failures from stage 5, empty on a clean run.
    pub warnings: Vec<String>,
}

/// Execute stages 2–5 with already-resolved parameters.
///
/// `scratch` must be an empty directory under the platform temp space; it is
/// left in place afterwards for inspection.
pub fn run(
    params: &Params,
    template_dir: &Path,
    scratch: &Path,
    forge: &dyn Forge,
    publisher: &dyn Publisher,
) -> Result<Report> {
    // Stage 2: owner resolution — a supplied organization short-circuits the
    // identity lookup entirely.
    let owner = match &params.organization {
        Some(org) => org.clone(),
        None => forge
            .viewer_login()
            .context("could not resolve the authenticated user")?,
    };

    // Stage 3: remote creation (hard gate).
    let request = CreateRepoRequest::for_name(params.name.clone());
    let created = forge
        .create_repository(params.organization.as_ref(), &request)
        .with_context(|| format!("could not create repository '{}'", params.name))?;

    // Stage 4: materialize and push (hard gates).
    materialize(
        template_dir,
        scratch,
        &params.name.0,
        &params.version_tag.0,
    )
    .with_context(|| format!("could not materialize template '{}'", template_dir.display()))?;

    let outcome = publisher
        .publish(scratch, &created.clone_url)
        .with_context(|| format!("could not push to {}", created.clone_url))?;

    // Stage 5: remote configuration (best-effort).
    let mut warnings = Vec::new();
    if let Err(err) = forge.update_settings(&owner, &params.name, &RepoSettings::standard()) {
        warnings.push(format!("repository settings not applied: {err}"));
    }
    if let Err(err) = forge.protect_branch(
        &owner,
        &params.name,
        DEFAULT_BRANCH,
        &BranchProtection::standard(),
    ) {
        warnings.push(format!("branch protection not applied: {err}"));
    }

    Ok(Report {
        owner,
        html_url: created.html_url,
        workspace: scratch.to_path_buf(),
        committed: outcome.committed,
        warnings,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
