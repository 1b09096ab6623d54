//! # Models
//!
//! This module contains the data models returned by the GitHub Actions API
//! endpoints used for workflow run cleanup.
//!
//! Only the fields the cleanup needs are modelled. Everything else in the
//! GitHub payload is ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A single workflow run as listed by `GET /repos/{owner}/{repo}/actions/runs`.
///
/// # Examples
///
/// ```
/// use github_client::models::WorkflowRun;
///
/// let run: WorkflowRun = serde_json::from_str(
///     r#"{ "id": 42, "created_at": "2024-01-01T10:00:00Z", "status": "completed" }"#,
/// ).unwrap();
///
/// assert_eq!(run.id, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowRun {
    /// The unique ID of the workflow run
    pub id: u64,
    /// When the run was created
    pub created_at: DateTime<Utc>,
}

impl WorkflowRun {
    /// Whole days elapsed between the creation of the run and `now`.
    ///
    /// Partial days are truncated, so a run created 15 days and 23 hours ago is
    /// 15 days old. Runs dated after `now` have a negative age.
    pub fn age_in_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}

/// Body of the workflow run listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WorkflowRunsResponse {
    #[serde(default)]
    pub workflow_runs: Vec<WorkflowRun>,
}

/// One page of workflow runs together with the pagination data GitHub sent
/// alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowRunPage {
    /// The runs on this page, possibly empty
    pub workflow_runs: Vec<WorkflowRun>,
    /// Number of the last page, taken from the `rel="last"` entry of the
    /// `link` header. `None` if the header is missing or unparseable.
    pub last_page: Option<u32>,
}
