//! Reposeed — provision a new GitHub repository from a local template.
//!
//! # Usage
//!
//! ```text
//! REPO_NAME=demo GO_VERSION=1.24.0 GITHUB_TOKEN=... reposeed
//! reposeed --name demo --go-version 1.24.0 --org acme --template-dir ./template
//! ```
//!
//! Flags override the corresponding environment variables; the token is
//! environment-only. Exit code is 0 on success (configuration warnings
//! included), non-zero on any hard failure.

mod workflow;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use reposeed_core::{params, Params};
use reposeed_git::GitCli;
use reposeed_github::GitHubClient;

#[derive(Parser, Debug)]
#[command(
    name = "reposeed",
    version,
    about = "Provision a new GitHub repository from a local template",
    long_about = None,
)]
struct Cli {
    /// Repository name (falls back to $REPO_NAME).
    #[arg(long)]
    name: Option<String>,

    /// Version tag substituted for the template's version placeholder
    /// (falls back to $GO_VERSION).
    #[arg(long)]
    go_version: Option<String>,

    /// Target organization (falls back to $GITHUB_ORG; omit to create under
    /// the authenticated user).
    #[arg(long)]
    org: Option<String>,

    /// Template directory to materialize.
    #[arg(long, default_value = "template")]
    template_dir: PathBuf,
}

impl Cli {
    /// Resolve parameters: flag first, environment second.
    fn resolve_params(&self) -> Result<Params, reposeed_core::ConfigError> {
        Params::from_lookup(|key| {
            let flag = match key {
                params::REPO_NAME => self.name.clone(),
                params::GO_VERSION => self.go_version.clone(),
                params::GITHUB_ORG => self.org.clone(),
                _ => None,
            };
            flag.or_else(|| std::env::var(key).ok())
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let resolved = cli.resolve_params()?;

    let forge = GitHubClient::new(resolved.token.clone());
    let publisher = GitCli::default();

    // Scratch space under the OS temp dir; deliberately kept after the run
    // so the pushed tree can be inspected.
    let scratch = tempfile::Builder::new()
        .prefix("reposeed-")
        .tempdir()
        .context("could not create scratch directory")?
        .keep();

    let report = workflow::run(&resolved, &cli.template_dir, &scratch, &forge, &publisher)?;

    println!("✓ Created repository: {}", report.html_url);
    if report.committed {
        println!("✓ Pushed 'master' from {}", report.workspace.display());
    } else {
        println!("✓ Nothing to commit; workspace at {}", report.workspace.display());
    }
    println!("✓ Owner: {}", report.owner);

    for warning in &report.warnings {
        eprintln!("{} {warning}", "warning:".yellow().bold());
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use reposeed_core::types::{Owner, RepoName, VersionTag};

    use super::*;

    /// Single test owning all four keys — parameter resolution reads the
    /// process environment, which is shared across the test binary.
    #[test]
    fn flags_override_environment_and_env_fills_gaps() {
        std::env::set_var("REPO_NAME", "from-env");
        std::env::set_var("GO_VERSION", "9.9.9");
        std::env::set_var("GITHUB_TOKEN", "tok-env");
        std::env::set_var("GITHUB_ORG", "env-org");

        let cli = Cli {
            name: Some("flagged".to_string()),
            go_version: Some("1.2.3".to_string()),
            org: None,
            template_dir: PathBuf::from("template"),
        };
        let resolved = cli.resolve_params().expect("resolve");

        // Flags win over their environment counterparts.
        assert_eq!(resolved.name, RepoName::from("flagged"));
        assert_eq!(resolved.version_tag, VersionTag::from("1.2.3"));
        // Unflagged values fall back to the environment.
        assert_eq!(resolved.token, "tok-env");
        assert_eq!(resolved.organization, Some(Owner::from("env-org")));

        // The org flag also wins when supplied.
        let cli = Cli {
            name: Some("flagged".to_string()),
            go_version: Some("1.2.3".to_string()),
            org: Some("flag-org".to_string()),
            template_dir: PathBuf::from("template"),
        };
        let resolved = cli.resolve_params().expect("resolve");
        assert_eq!(resolved.organization, Some(Owner::from("flag-org")));

        for key in ["REPO_NAME", "GO_VERSION", "GITHUB_TOKEN", "GITHUB_ORG"] {
            std::env::remove_var(key);
        }
    }
}
