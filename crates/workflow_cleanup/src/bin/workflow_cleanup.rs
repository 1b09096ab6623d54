//! Delete expired workflow runs.
//!
//! This binary removes completed GitHub Actions workflow runs older than the
//! retention threshold from one repository. It's designed to be run from a
//! scheduled GitHub Actions workflow or manually for maintenance.
//!
//! Usage:
//!   workflow-cleanup [--dry-run] [--org <ORG>] [--repo <REPO>] [--max-age-days <DAYS>]
//!
//! Environment variables:
//! - GITHUB_TOKEN: Token allowed to delete workflow runs (required)
//! - GITHUB_ORGANIZATION: Owner of the repository, unless --org is given
//! - GITHUB_REPOSITORY: Repository name, unless --repo is given
//! - WORKFLOW_CLEANUP_LOG: Log filter, e.g. "info" or "github_client=debug"

use chrono::Utc;
use clap::Parser;
use secrecy::ExposeSecret;
use tracing::error;
use workflow_cleanup::{output, CleanupConfig, CleanupMode, WorkflowCleanup, MAX_AGE_DAYS};

/// Delete completed workflow runs older than the retention threshold
#[derive(Parser, Debug)]
#[command(name = "workflow-cleanup", version)]
#[command(about = "Delete completed workflow runs older than the retention threshold", long_about = None)]
struct Cli {
    /// Report what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Organization or user owning the repository [default: $GITHUB_ORGANIZATION]
    #[arg(long)]
    org: Option<String>,

    /// Repository to clean up [default: $GITHUB_REPOSITORY]
    #[arg(long)]
    repo: Option<String>,

    /// Runs strictly older than this many whole days are deleted
    #[arg(long, default_value_t = MAX_AGE_DAYS, value_parser = clap::value_parser!(i64).range(0..))]
    max_age_days: i64,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mode = CleanupMode::from_dry_run(cli.dry_run);
    if mode == CleanupMode::DryRun {
        println!("{}", output::format_dry_run_warning());
    }

    // Load configuration from environment
    let config = CleanupConfig::from_env_with_overrides(cli.org, cli.repo)?;

    println!("{}", output::format_header(&config, cli.max_age_days));
    println!();

    let octocrab = github_client::create_token_client(config.github_token.expose_secret())?;
    let client = github_client::GitHubClient::new(octocrab);

    let cleanup = WorkflowCleanup::new(client, config.organization, config.repository)
        .with_max_age_days(cli.max_age_days);

    println!("{}", output::format_processing());
    let summary = cleanup.run(mode, Utc::now()).await?;

    println!();
    println!("{}", output::format_summary(&summary));

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize logging
    workflow_cleanup::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("Error: {e:#}");
        std::process::exit(1);
    }
}
