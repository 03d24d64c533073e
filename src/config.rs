//! Gateway configuration loaded once from a YAML file at startup.
//!
//! The parsed [`Config`] is immutable for the process lifetime: the route
//! table and provider clients are built from it before the server starts
//! accepting connections.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub site: SiteConfig,
    /// Client identity used for authenticated providers
    #[serde(default)]
    pub client: ClientIdentity,
    /// Logical routes, each binding a path prefix to one provider
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Server process settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Bind address, e.g. `127.0.0.1:8080`
    pub addr: String,
}

/// Site-wide presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site name shown on every composed page
    pub name: String,
    /// Directory served for requests outside all route prefixes
    #[serde(rename = "static")]
    pub static_dir: String,
}

/// Identity attached to outbound GitHub-style API calls
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClientIdentity {
    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Optional bearer token for higher rate limits and private repos
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ClientIdentity {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            auth_token: None,
        }
    }
}

fn default_user_agent() -> String {
    concat!("repogate/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Provider protocol spoken by a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Github,
    Gitea,
}

/// One logical route: a path prefix bound to a provider and its base URLs
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Route {
    /// Path prefix the route is mounted under, a single segment like `gh`
    pub path: String,
    pub protocol: Protocol,
    /// Provider API base URL
    pub api_base: String,
    /// Raw content base URL; required for github routes
    #[serde(default)]
    pub raw_base: Option<String>,
}

impl Route {
    /// Prefix normalized to a leading-slash scope path, e.g. `/gh`.
    pub fn scope_path(&self) -> String {
        format!("/{}", self.path.trim_matches('/'))
    }
}

impl Config {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::Read)?;
        let config: Config = serde_yaml::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for route in &self.routes {
            let prefix = route.path.trim_matches('/');
            if prefix.is_empty() || prefix.contains('/') {
                return Err(ConfigError::InvalidPrefix(route.path.clone()));
            }
            if !seen.insert(prefix.to_string()) {
                return Err(ConfigError::DuplicatePrefix(prefix.to_string()));
            }
            if route.protocol == Protocol::Github && route.raw_base.is_none() {
                return Err(ConfigError::MissingRawBase(prefix.to_string()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("route prefix must be a single non-empty path segment: {0:?}")]
    InvalidPrefix(String),
    #[error("duplicate route prefix: {0}")]
    DuplicatePrefix(String),
    #[error("route {0}: github routes require raw-base")]
    MissingRawBase(String),
}
