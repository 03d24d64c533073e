//! Payloads handed to page composition.

use super::provider::OwnerKind;

/// Data for the owner/organization listing page
#[derive(Debug, Clone)]
pub struct OwnerPage {
    pub login: String,
    pub profile_url: String,
    pub kind: OwnerKind,
    pub repos: Vec<RepoEntry>,
}

/// One repository link on the owner page
#[derive(Debug, Clone)]
pub struct RepoEntry {
    pub name: String,
    pub description: Option<String>,
    /// Relative link target; `name` when the request carried a trailing
    /// slash for the owner segment, `owner/name` otherwise
    pub relative_url: String,
}

/// Data for the repository landing page
#[derive(Debug, Clone)]
pub struct RepoPage {
    pub name: String,
    pub description: Option<String>,
    /// Provider-native page for the repository
    pub html_url: String,
    /// Relative link back to the owner page (`..` or `.`)
    pub owner_href: String,
    pub readme_name: String,
    /// Relative link to the rendered readme
    pub readme_href: String,
}
