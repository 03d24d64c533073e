//! GitHub-style provider client.
//!
//! Speaks the GitHub REST surface: metadata under the API base, raw content
//! under a separate raw base. Requests carry the configured User-Agent, the
//! versioned JSON media type, and, when configured, a bearer token for
//! higher rate limits and private-repository access.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientIdentity;
use crate::models::{OwnerSummary, ReadmeLocation, RepoItem, RepoSummary};

use super::provider::{GitProvider, ProviderError};

/// Upstream calls are abandoned after this long; a slow provider must not
/// stall the serving thread indefinitely.
pub(crate) const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(15);

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

pub struct GitHubClient {
    http: reqwest::Client,
    api_base: String,
    raw_base: String,
}

impl GitHubClient {
    pub fn new(
        api_base: String,
        raw_base: String,
        identity: &ClientIdentity,
    ) -> Result<Self, ProviderError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        if let Some(token) = &identity.auth_token {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ProviderError::Config("auth token is not a valid header".into()))?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = reqwest::Client::builder()
            .user_agent(identity.user_agent.as_str())
            .default_headers(headers)
            .timeout(UPSTREAM_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_base,
            raw_base,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ProviderError> {
        debug!(%url, "github api call");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl GitProvider for GitHubClient {
    async fn owner_info(&self, owner: &str) -> Result<OwnerSummary, ProviderError> {
        self.get_json(format!("{}/users/{owner}", self.api_base))
            .await
    }

    async fn repo_list(
        &self,
        owner: &str,
        organization: bool,
    ) -> Result<Vec<RepoItem>, ProviderError> {
        let url = if organization {
            format!("{}/orgs/{owner}/repos?per_page=100", self.api_base)
        } else {
            format!("{}/users/{owner}/repos?per_page=100", self.api_base)
        };
        self.get_json(url).await
    }

    async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
        self.get_json(format!("{}/repos/{owner}/{repo}", self.api_base))
            .await
    }

    async fn readme_location(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<ReadmeLocation, ProviderError> {
        self.get_json(format!("{}/repos/{owner}/{repo}/readme", self.api_base))
            .await
    }

    async fn raw_file(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Vec<u8>, ProviderError> {
        let url = format!("{}/{owner}/{repo}/{branch}/{path}", self.raw_base);
        debug!(%url, "github raw fetch");
        let response = self.http.get(&url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
