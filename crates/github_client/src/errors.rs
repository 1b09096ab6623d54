//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when talking to the GitHub
//! Actions REST API through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Listing failures are never retried by callers, so every variant here is
/// treated as fatal for the operation that produced it. A delete request that
/// completes with an unexpected status code is *not* an error; see
/// [`crate::WorkflowRunClient::delete_workflow_run`].
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.list_workflow_runs("my-org", "my-repo", 1).await {
///     Ok(page) => println!("Fetched {} runs", page.workflow_runs.len()),
///     Err(Error::UnexpectedStatus { status, .. }) => eprintln!("GitHub answered {status}"),
///     Err(err) => eprintln!("Other error: {err}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response.
    ///
    /// Covers network failures, timeouts and any other transport-level problem
    /// reported by the underlying HTTP client. The contained string carries the
    /// transport's own description of the failure.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// The GitHub client could not be initialized.
    ///
    /// This error occurs when the HTTP client cannot be built, for example
    /// because the base URI or one of the default headers is invalid.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    ///
    /// This error occurs when the GitHub API returns a body that cannot be
    /// parsed into the expected data structure.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The response body could not be read.
    #[error("Invalid response format")]
    InvalidResponse,

    /// GitHub answered with a status code outside of the 2xx range.
    ///
    /// Parameters: (status code, request path)
    #[error("GitHub returned status {status} for {path}")]
    UnexpectedStatus { status: u16, path: String },
}
