//! Configuration for workflow run cleanup.
//!
//! The token and target repository come from the environment. The
//! organization and repository can be overridden from the command line.

use anyhow::{bail, Context, Result};
use secrecy::SecretString;
use std::env;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Environment variable holding the GitHub access token.
pub const TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable holding the organization (or user) owning the repository.
pub const ORGANIZATION_VAR: &str = "GITHUB_ORGANIZATION";

/// Environment variable holding the repository name.
pub const REPOSITORY_VAR: &str = "GITHUB_REPOSITORY";

/// Configuration for cleanup operations.
///
/// The `Debug` output never contains the token.
#[derive(Debug)]
pub struct CleanupConfig {
    /// Token used as the bearer credential for every API call
    pub github_token: SecretString,
    /// Organization (or user) owning the repository
    pub organization: String,
    /// Repository whose workflow runs are cleaned up
    pub repository: String,
}

impl CleanupConfig {
    /// Load cleanup configuration from environment variables, preferring the
    /// given organization and repository over their environment values.
    ///
    /// Environment variables:
    /// - `GITHUB_TOKEN`: Token with `actions:write` permission on the repository
    /// - `GITHUB_ORGANIZATION`: Owner of the repository, unless overridden
    /// - `GITHUB_REPOSITORY`: Name of the repository, unless overridden
    pub fn from_env_with_overrides(
        organization: Option<String>,
        repository: Option<String>,
    ) -> Result<Self> {
        Self::from_lookup_with_overrides(|key| env::var(key).ok(), organization, repository)
    }

    /// Load cleanup configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_overrides(lookup, None, None)
    }

    /// Load cleanup configuration through an arbitrary variable lookup,
    /// preferring the given organization and repository over looked up values.
    ///
    /// Blank values are rejected the same way missing ones are.
    pub fn from_lookup_with_overrides<F>(
        lookup: F,
        organization: Option<String>,
        repository: Option<String>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let github_token = required(&lookup, TOKEN_VAR, None)?;
        let organization = required(&lookup, ORGANIZATION_VAR, organization)
            .context("No organization given. Pass --org or set GITHUB_ORGANIZATION")?;
        let repository = required(&lookup, REPOSITORY_VAR, repository)
            .context("No repository given. Pass --repo or set GITHUB_REPOSITORY")?;

        Ok(Self {
            github_token: SecretString::from(github_token),
            organization,
            repository,
        })
    }
}

fn required<F>(lookup: &F, key: &str, value: Option<String>) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = value
        .or_else(|| lookup(key))
        .with_context(|| format!("{key} environment variable not set"))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        bail!("{key} must not be empty");
    }

    Ok(trimmed.to_string())
}
