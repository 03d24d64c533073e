//! Gitea-style provider client.
//!
//! Speaks the Gitea v1 API rooted at the configured server base, issuing
//! unauthenticated requests. There is no distinct owner listing surface and
//! no readme-discovery endpoint; the canonical readme is assumed to be
//! `README.md` at the tree root.

use async_trait::async_trait;
use tracing::debug;

use crate::models::{OwnerSummary, ReadmeLocation, RepoItem, RepoSummary};

use super::github::UPSTREAM_TIMEOUT;
use super::provider::{GitProvider, ProviderError};

pub struct GiteaClient {
    http: reqwest::Client,
    api_base: String,
}

impl GiteaClient {
    pub fn new(api_base: String) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;
        Ok(Self { http, api_base })
    }
}

#[async_trait]
impl GitProvider for GiteaClient {
    async fn owner_info(&self, _owner: &str) -> Result<OwnerSummary, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    async fn repo_list(
        &self,
        _owner: &str,
        _organization: bool,
    ) -> Result<Vec<RepoItem>, ProviderError> {
        Err(ProviderError::Unsupported)
    }

    async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
        let url = format!("{}/api/v1/repos/{owner}/{repo}", self.api_base);
        debug!(%url, "gitea api call");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    async fn readme_location(
        &self,
        _owner: &str,
        _repo: &str,
    ) -> Result<ReadmeLocation, ProviderError> {
        Ok(ReadmeLocation {
            name: "README.md".to_string(),
            path: "README.md".to_string(),
        })
    }

    async fn raw_file(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!(
            "{}/api/v1/repos/{owner}/{repo}/raw/{branch}/{path}",
            self.api_base
        );
        debug!(%url, "gitea raw fetch");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
