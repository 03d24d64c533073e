//! Wire types decoded from provider API responses.
//!
//! Fields mirror the JSON both GitHub- and Gitea-style APIs return; optional
//! or missing fields decode to their defaults so a sparse response does not
//! fail the call. The owner `type` is the exception: anything other than
//! `User` or `Organization` is a protocol violation and fails decoding.

use serde::Deserialize;

/// Kind of account an owner identifier resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum OwnerKind {
    User,
    Organization,
}

impl OwnerKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Organization => "Organization",
        }
    }
}

/// Owner account metadata, from `/users/{owner}`
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerSummary {
    pub login: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(rename = "type")]
    pub kind: OwnerKind,
}

/// One entry of an owner's repository listing
#[derive(Debug, Clone, Deserialize)]
pub struct RepoItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Repository metadata, from `/repos/{owner}/{repo}`
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    /// Empty when the provider does not designate a default branch
    #[serde(default)]
    pub default_branch: String,
}

/// Location of the canonical readme within a repository
#[derive(Debug, Clone, Deserialize)]
pub struct ReadmeLocation {
    pub name: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_owner_summary() {
        let json = r#"{"login":"acme","html_url":"https://github.com/acme","type":"Organization","id":42}"#;
        let owner: OwnerSummary = serde_json::from_str(json).expect("should decode");
        assert_eq!(owner.login, "acme");
        assert_eq!(owner.kind, OwnerKind::Organization);
    }

    #[test]
    fn rejects_unknown_owner_kind() {
        let json = r#"{"login":"bot","html_url":"","type":"Bot"}"#;
        assert!(serde_json::from_str::<OwnerSummary>(json).is_err());
    }

    #[test]
    fn decodes_repo_summary_with_nulls() {
        let json = r#"{"name":"widgets","description":null,"html_url":"https://github.com/acme/widgets","default_branch":"trunk"}"#;
        let repo: RepoSummary = serde_json::from_str(json).expect("should decode");
        assert_eq!(repo.name, "widgets");
        assert!(repo.description.is_none());
        assert_eq!(repo.default_branch, "trunk");
    }

    #[test]
    fn missing_default_branch_decodes_empty() {
        let json = r#"{"name":"widgets"}"#;
        let repo: RepoSummary = serde_json::from_str(json).expect("should decode");
        assert_eq!(repo.default_branch, "");
    }

    #[test]
    fn decodes_repo_listing() {
        let json = r#"[{"name":"a","description":"first"},{"name":"b"}]"#;
        let list: Vec<RepoItem> = serde_json::from_str(json).expect("should decode");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].description.as_deref(), Some("first"));
        assert!(list[1].description.is_none());
    }
}
