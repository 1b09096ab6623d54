//! Workflow run cleanup utilities.
//!
//! This crate deletes GitHub Actions workflow runs that are older than a
//! retention threshold from a single repository. It can be used both
//! programmatically and via the `workflow-cleanup` binary.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use github_client::{WorkflowRun, WorkflowRunClient};
use tracing::{debug, info, warn};

pub mod config;
pub use config::CleanupConfig;

pub mod output;

/// Runs strictly older than this many whole days are removed.
pub const MAX_AGE_DAYS: i64 = 15;

/// Whether qualifying runs are actually deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    /// Count qualifying runs without issuing any delete request
    DryRun,
    /// Delete qualifying runs
    Delete,
}

impl CleanupMode {
    /// Maps the `--dry-run` flag onto a mode.
    pub fn from_dry_run(dry_run: bool) -> Self {
        if dry_run {
            Self::DryRun
        } else {
            Self::Delete
        }
    }
}

/// Outcome of a cleanup pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupSummary {
    /// Mode the pass ran in
    pub mode: CleanupMode,
    /// Number of listing requests issued
    pub pages_fetched: u32,
    /// Runs seen across all pages
    pub runs_inspected: usize,
    /// Runs older than the retention threshold
    pub runs_qualifying: usize,
    /// Runs deleted, or in dry-run mode the runs that would have been deleted
    pub runs_processed: usize,
}

impl CleanupSummary {
    fn new(mode: CleanupMode) -> Self {
        Self {
            mode,
            pages_fetched: 0,
            runs_inspected: 0,
            runs_qualifying: 0,
            runs_processed: 0,
        }
    }

    /// Human readable one-line result.
    pub fn message(&self) -> String {
        match self.mode {
            CleanupMode::DryRun => {
                format!("{} workflows would have been deleted.", self.runs_processed)
            }
            CleanupMode::Delete => {
                format!("{} workflows deleted successfully.", self.runs_processed)
            }
        }
    }
}

/// Workflow run cleanup for one repository.
///
/// Walks every page of completed runs, one page and one delete request at a
/// time, and removes the runs older than the retention threshold.
pub struct WorkflowCleanup<C> {
    client: C,
    organization: String,
    repository: String,
    max_age_days: i64,
}

impl<C: WorkflowRunClient> WorkflowCleanup<C> {
    /// Create a new cleanup instance using the default retention threshold.
    ///
    /// # Arguments
    ///
    /// * `client` - Authenticated workflow run client
    /// * `organization` - Owner of the repository
    /// * `repository` - Repository whose runs are cleaned up
    pub fn new(client: C, organization: String, repository: String) -> Self {
        Self {
            client,
            organization,
            repository,
            max_age_days: MAX_AGE_DAYS,
        }
    }

    /// Replace the retention threshold.
    pub fn with_max_age_days(mut self, max_age_days: i64) -> Self {
        self.max_age_days = max_age_days;
        self
    }

    /// Whether `run` is old enough to be removed at `now`.
    pub fn is_expired(&self, run: &WorkflowRun, now: DateTime<Utc>) -> bool {
        run.age_in_days(now) > self.max_age_days
    }

    /// Find and delete (or in dry-run mode, count) expired workflow runs.
    ///
    /// Page 1 is always fetched. The total page count is taken from the first
    /// response only; without one, no further page is requested.
    ///
    /// # Errors
    ///
    /// Any failure to list a page aborts the whole pass, as does a delete
    /// request that never got a response. A delete answered with anything
    /// but `204 No Content` only leaves that run uncounted.
    pub async fn run(&self, mode: CleanupMode, now: DateTime<Utc>) -> Result<CleanupSummary> {
        info!(
            org = self.organization,
            repo = self.repository,
            max_age_days = self.max_age_days,
            dry_run = mode == CleanupMode::DryRun,
            "Searching for expired workflow runs"
        );

        let mut summary = CleanupSummary::new(mode);
        let mut total_pages = 0u32;
        let mut page = 1u32;

        loop {
            debug!(page = page, total_pages = total_pages, "Fetching page {}", page);

            let runs_page = self
                .client
                .list_workflow_runs(&self.organization, &self.repository, page)
                .await
                .with_context(|| format!("Failed to list workflow runs (page {page})"))?;
            summary.pages_fetched += 1;

            if page == 1 {
                if let Some(last_page) = runs_page.last_page {
                    total_pages = last_page;
                }
            }

            for run in &runs_page.workflow_runs {
                summary.runs_inspected += 1;

                if !self.is_expired(run, now) {
                    debug!(
                        run_id = run.id,
                        created_at = %run.created_at,
                        "Workflow run is too new, skipping"
                    );
                    continue;
                }

                summary.runs_qualifying += 1;
                if self.process_expired_run(run, mode).await? {
                    summary.runs_processed += 1;
                }
            }

            match next_page(page, total_pages) {
                Some(next) => page = next,
                None => break,
            }
        }

        info!(
            org = self.organization,
            repo = self.repository,
            pages = summary.pages_fetched,
            inspected = summary.runs_inspected,
            qualifying = summary.runs_qualifying,
            processed = summary.runs_processed,
            "Cleanup completed"
        );

        Ok(summary)
    }

    async fn process_expired_run(&self, run: &WorkflowRun, mode: CleanupMode) -> Result<bool> {
        if mode == CleanupMode::DryRun {
            info!(
                run_id = run.id,
                created_at = %run.created_at,
                "Would delete expired workflow run"
            );
            return Ok(true);
        }

        info!(
            run_id = run.id,
            created_at = %run.created_at,
            "Found expired workflow run, attempting deletion"
        );

        let deleted = self
            .client
            .delete_workflow_run(&self.organization, &self.repository, run.id)
            .await
            .with_context(|| format!("Failed to delete workflow run {}", run.id))?;

        if !deleted {
            warn!(run_id = run.id, "Workflow run was not deleted");
        }

        Ok(deleted)
    }
}

/// The page to fetch after `page`, or `None` once `total_pages` is exhausted.
fn next_page(page: u32, total_pages: u32) -> Option<u32> {
    page.checked_add(1).filter(|next| *next <= total_pages)
}

/// Initialize logging for cleanup operations.
///
/// Sets up tracing with appropriate formatting for CLI use. The filter is
/// read from `WORKFLOW_CLEANUP_LOG` and defaults to warnings only.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("WORKFLOW_CLEANUP_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
