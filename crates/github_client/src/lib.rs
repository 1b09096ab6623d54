//! Crate for interacting with the GitHub Actions REST API.
//!
//! This crate provides a client for listing and deleting the workflow runs of a
//! single repository, authenticated with a bearer token. The operations are
//! exposed through the [`WorkflowRunClient`] trait so callers can substitute
//! their own implementation.

use async_trait::async_trait;
use http::header::{HeaderName, ACCEPT, LINK};
use http::StatusCode;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use tracing::{debug, error, info, instrument, warn};

pub mod errors;
pub use errors::Error;

pub mod models;
pub use models::{WorkflowRun, WorkflowRunPage};

mod pagination;
pub use pagination::parse_last_page;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Base URI of the public GitHub REST API.
pub const GITHUB_API_URI: &str = "https://api.github.com";

/// Media type requested from GitHub on every call.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// REST API version pinned on every call.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Maximum page size accepted by the workflow run listing endpoint.
pub const RUNS_PER_PAGE: u8 = 100;

/// Trait for workflow run operations on a single repository.
#[async_trait]
pub trait WorkflowRunClient: Send + Sync {
    /// Fetches one page of completed workflow runs.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `page` - The 1-based page number to fetch.
    ///
    /// # Returns
    ///
    /// The runs on the requested page together with the last page number, if
    /// GitHub reported one in the `link` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, GitHub answers with a non-2xx
    /// status or the body cannot be decoded.
    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<WorkflowRunPage, Error>;

    /// Deletes a single workflow run.
    ///
    /// Returns `Ok(true)` only if GitHub answered `204 No Content`. Any other
    /// status is reported as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an `Error::ApiError` if no response was received at all.
    async fn delete_workflow_run(&self, owner: &str, repo: &str, run_id: u64)
        -> Result<bool, Error>;
}

/// A client for the GitHub Actions API, authenticated with a bearer token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Wraps an already configured `Octocrab` instance.
    ///
    /// Use [`create_token_client`] to build one with the headers GitHub expects.
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WorkflowRunClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo, page = page))]
    async fn list_workflow_runs(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
    ) -> Result<WorkflowRunPage, Error> {
        let path = format!(
            "/repos/{owner}/{repo}/actions/runs?status=completed&per_page={RUNS_PER_PAGE}&page={page}"
        );

        debug!("Making API call to: {}", path);
        let response = self
            .client
            ._get(path.as_str())
            .await
            .map_err(|e| api_error("Failed to list workflow runs", e))?;

        let status = response.status();
        if !status.is_success() {
            error!(
                status = status.as_u16(),
                path = path,
                "GitHub rejected the workflow run listing"
            );
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                path,
            });
        }

        let last_page = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_last_page);

        let body = self.client.body_to_string(response).await.map_err(|e| {
            error!(error = %e, "Failed to read workflow run listing body");
            Error::InvalidResponse
        })?;
        let parsed: models::WorkflowRunsResponse = serde_json::from_str(&body)?;

        info!(
            count = parsed.workflow_runs.len(),
            last_page = ?last_page,
            "Retrieved workflow runs"
        );

        Ok(WorkflowRunPage {
            workflow_runs: parsed.workflow_runs,
            last_page,
        })
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo, run_id = run_id))]
    async fn delete_workflow_run(
        &self,
        owner: &str,
        repo: &str,
        run_id: u64,
    ) -> Result<bool, Error> {
        let path = format!("/repos/{owner}/{repo}/actions/runs/{run_id}");

        let response = self
            .client
            ._delete(path.as_str(), None::<&()>)
            .await
            .map_err(|e| api_error("Failed to delete workflow run", e))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            info!("Deleted workflow run");
            Ok(true)
        } else {
            warn!(
                status = status.as_u16(),
                "Workflow run was not deleted (may not exist or lack permissions)"
            );
            Ok(false)
        }
    }
}

/// Creates an `Octocrab` client for the public GitHub API authenticated with a
/// bearer token.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the client cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(token: &str) -> Result<Octocrab, Error> {
    create_token_client_with_base_uri(token, GITHUB_API_URI)
}

/// Creates an `Octocrab` client authenticated with a bearer token that talks
/// to `base_uri` instead of the public GitHub API.
///
/// Every request carries the `Accept` and `X-GitHub-Api-Version` headers the
/// Actions API expects. Requests are sent exactly once; octocrab's retry
/// middleware is disabled.
///
/// # Errors
///
/// Returns an `Error::AuthError` if `base_uri` is not a valid URI or the client
/// cannot be built.
#[instrument(skip(token))]
pub fn create_token_client_with_base_uri(token: &str, base_uri: &str) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .base_uri(base_uri)
        .map_err(|e| Error::AuthError(format!("Invalid base URI '{base_uri}': {e}")))?
        .add_header(ACCEPT, GITHUB_ACCEPT.to_string())
        .add_header(
            HeaderName::from_static("x-github-api-version"),
            GITHUB_API_VERSION.to_string(),
        )
        .add_retry_config(RetryConfig::None)
        .personal_token(token.to_string())
        .build()
        .map_err(|e| {
            error!(error = ?e, "Failed to build Octocrab client");
            Error::AuthError("Failed to build the GitHub client.".to_string())
        })
}

fn api_error(message: &str, e: octocrab::Error) -> Error {
    match &e {
        octocrab::Error::GitHub { source, .. } => error!(
            error_message = source.message,
            "{}. Received an error from GitHub", message
        ),
        _ => error!(error_message = e.to_string(), message),
    };

    Error::ApiError(e.to_string())
}
