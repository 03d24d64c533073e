//! Provider client contract shared by the GitHub- and Gitea-style variants.
//!
//! A route's configured protocol selects which implementation serves its
//! prefix; handlers only ever see the trait. Callers must validate owner,
//! repository, and path before any of these methods run, since raw URLs are
//! built by string interpolation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::{ClientIdentity, Protocol, Route};
use crate::models::{OwnerSummary, ReadmeLocation, RepoItem, RepoSummary};

use super::gitea::GiteaClient;
use super::github::GitHubClient;

/// Errors from provider calls
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure or a non-decodable response body; the two are not
    /// distinguished
    #[error("{0}")]
    Fetch(String),
    /// The operation has no endpoint on this provider variant
    #[error("operation not supported by this provider")]
    Unsupported,
    /// Client could not be constructed from the configured identity
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL from the message so tokens in query strings or
        // private hostnames never reach an error body.
        Self::Fetch(err.without_url().to_string())
    }
}

/// Capability set common to both provider variants. One outbound GET per
/// call, no pagination follow-up, no caching.
#[async_trait]
pub trait GitProvider: Send + Sync {
    /// Owner account metadata. Fails on an owner kind other than
    /// `User`/`Organization`.
    async fn owner_info(&self, owner: &str) -> Result<OwnerSummary, ProviderError>;

    /// Up to one page (100 entries) of the owner's repositories.
    async fn repo_list(
        &self,
        owner: &str,
        organization: bool,
    ) -> Result<Vec<RepoItem>, ProviderError>;

    /// Repository metadata including the reported default branch.
    async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError>;

    /// Name and repository-relative path of the canonical readme.
    async fn readme_location(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<ReadmeLocation, ProviderError>;

    /// Raw bytes of one file at `branch`/`path`.
    async fn raw_file(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError>;
}

/// Build the provider client for a route, selected by its protocol tag.
pub fn build(
    route: &Route,
    identity: &ClientIdentity,
) -> Result<Arc<dyn GitProvider>, ProviderError> {
    match route.protocol {
        Protocol::Github => {
            // Config validation guarantees raw_base for github routes.
            let raw_base = route.raw_base.clone().unwrap_or_default();
            Ok(Arc::new(GitHubClient::new(
                route.api_base.clone(),
                raw_base,
                identity,
            )?))
        }
        Protocol::Gitea => Ok(Arc::new(GiteaClient::new(route.api_base.clone())?)),
    }
}
