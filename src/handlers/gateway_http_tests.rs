//! HTTP tests for the request-resolution pipeline.
//!
//! Exercised end-to-end through the actix service with an in-memory fake
//! provider, so every test also asserts which upstream calls were (and were
//! not) made.

#[cfg(test)]
mod gateway_tests {
    use std::sync::{Arc, Mutex};

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use async_trait::async_trait;

    use crate::config::{Protocol, Route};
    use crate::handlers::{scope_for, RouteState};
    use crate::models::{OwnerKind, OwnerSummary, ReadmeLocation, RepoItem, RepoSummary};
    use crate::services::provider::{GitProvider, ProviderError};

    struct FakeProvider {
        kind: OwnerKind,
        default_branch: String,
        readme_path: String,
        raw: Vec<u8>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeProvider {
        fn new(default_branch: &str, raw: &str) -> Arc<Self> {
            Arc::new(Self {
                kind: OwnerKind::User,
                default_branch: default_branch.to_string(),
                readme_path: "README.md".to_string(),
                raw: raw.as_bytes().to_vec(),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GitProvider for FakeProvider {
        async fn owner_info(&self, owner: &str) -> Result<OwnerSummary, ProviderError> {
            self.record(format!("owner_info {owner}"));
            Ok(OwnerSummary {
                login: owner.to_string(),
                html_url: format!("https://upstream.example/{owner}"),
                kind: self.kind,
            })
        }

        async fn repo_list(
            &self,
            owner: &str,
            organization: bool,
        ) -> Result<Vec<RepoItem>, ProviderError> {
            self.record(format!("repo_list {owner} organization={organization}"));
            Ok(vec![
                RepoItem {
                    name: "widgets".to_string(),
                    description: Some("makes widgets".to_string()),
                },
                RepoItem {
                    name: "gears".to_string(),
                    description: None,
                },
            ])
        }

        async fn repo_info(&self, owner: &str, repo: &str) -> Result<RepoSummary, ProviderError> {
            self.record(format!("repo_info {owner}/{repo}"));
            Ok(RepoSummary {
                name: repo.to_string(),
                description: Some("makes widgets".to_string()),
                html_url: format!("https://upstream.example/{owner}/{repo}"),
                default_branch: self.default_branch.clone(),
            })
        }

        async fn readme_location(
            &self,
            owner: &str,
            repo: &str,
        ) -> Result<ReadmeLocation, ProviderError> {
            self.record(format!("readme_location {owner}/{repo}"));
            Ok(ReadmeLocation {
                name: "README.md".to_string(),
                path: self.readme_path.clone(),
            })
        }

        async fn raw_file(
            &self,
            owner: &str,
            repo: &str,
            branch: &str,
            path: &str,
        ) -> Result<Vec<u8>, ProviderError> {
            self.record(format!("raw_file {owner}/{repo} {branch} {path}"));
            Ok(self.raw.clone())
        }
    }

    fn route_state(prefix: &str, protocol: Protocol, provider: Arc<FakeProvider>) -> web::Data<RouteState> {
        web::Data::new(RouteState {
            site_name: "Example".to_string(),
            route: Route {
                path: prefix.to_string(),
                protocol,
                api_base: "https://api.upstream.example".to_string(),
                raw_base: Some("https://raw.upstream.example".to_string()),
            },
            provider,
        })
    }

    async fn get(
        protocol: Protocol,
        provider: Arc<FakeProvider>,
        uri: &str,
    ) -> (StatusCode, String) {
        let prefix = match protocol {
            Protocol::Github => "gh",
            Protocol::Gitea => "forge",
        };
        let app = test::init_service(
            App::new().service(scope_for(route_state(prefix, protocol, provider))),
        )
        .await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn rejects_invalid_owner_name_before_any_call() {
        let provider = FakeProvider::new("main", "");
        let (status, body) = get(Protocol::Github, provider.clone(), "/gh/bad%20name").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid owner name");
        assert!(provider.calls().is_empty());
    }

    #[actix_web::test]
    async fn owner_page_without_slash_prefixes_owner() {
        let provider = FakeProvider::new("main", "");
        let (status, body) = get(Protocol::Github, provider, "/gh/acme").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"acme/widgets\""), "body: {body}");
        assert!(body.contains("makes widgets"), "body: {body}");
    }

    #[actix_web::test]
    async fn owner_page_with_slash_links_repo_name_only() {
        let provider = FakeProvider::new("main", "");
        let (status, body) = get(Protocol::Github, provider, "/gh/acme/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"widgets\""), "body: {body}");
        assert!(!body.contains("href=\"acme/widgets\""), "body: {body}");
    }

    #[actix_web::test]
    async fn organization_owner_uses_org_listing() {
        let provider = Arc::new(FakeProvider {
            kind: OwnerKind::Organization,
            default_branch: "main".to_string(),
            readme_path: "README.md".to_string(),
            raw: Vec::new(),
            calls: Mutex::new(Vec::new()),
        });
        let (status, _) = get(Protocol::Github, provider.clone(), "/gh/acme").await;
        assert_eq!(status, StatusCode::OK);
        assert!(provider
            .calls()
            .contains(&"repo_list acme organization=true".to_string()));
    }

    #[actix_web::test]
    async fn repo_landing_without_slash_carries_repo_segment() {
        let provider = FakeProvider::new("main", "");
        let (status, body) = get(Protocol::Github, provider.clone(), "/gh/acme/widgets").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"widgets/blob/README.md\""), "body: {body}");
        assert!(body.contains("href=\".\""), "body: {body}");
        // Landing composes from metadata only.
        assert!(!provider.calls().iter().any(|c| c.starts_with("raw_file")));
    }

    #[actix_web::test]
    async fn repo_landing_with_slash_links_blob_directly() {
        let provider = FakeProvider::new("main", "");
        let (status, body) = get(Protocol::Github, provider, "/gh/acme/widgets/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"blob/README.md\""), "body: {body}");
        assert!(body.contains("href=\"..\""), "body: {body}");
    }

    #[actix_web::test]
    async fn blob_renders_markdown_with_scanned_title() {
        let provider = FakeProvider::new("trunk", "### Z\n# Y\n\nbody text");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/blob/docs/guide.md").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>Y - Example</title>"), "body: {body}");
        assert!(body.contains("<h1>Y</h1>"), "body: {body}");
        assert!(provider
            .calls()
            .contains(&"raw_file acme/widgets trunk docs/guide.md".to_string()));
    }

    #[actix_web::test]
    async fn blob_rejects_non_blob_mode() {
        let provider = FakeProvider::new("main", "");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/tree/guide.md").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid mode");
        assert!(provider.calls().is_empty());
    }

    #[actix_web::test]
    async fn blob_rejects_traversal_path() {
        let provider = FakeProvider::new("main", "");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/blob/a/../b.md").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid path");
        assert!(provider.calls().is_empty());
    }

    #[actix_web::test]
    async fn blob_rejects_dotted_name_by_substring() {
        let provider = FakeProvider::new("main", "");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/blob/a..b.md").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid path");
    }

    #[actix_web::test]
    async fn blob_extension_gate_runs_before_any_fetch() {
        let provider = FakeProvider::new("main", "");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/blob/logo.png").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "unsupported extension .png");
        assert!(provider.calls().is_empty());
    }

    #[actix_web::test]
    async fn blob_fails_hard_on_missing_default_branch() {
        let provider = FakeProvider::new("", "# unreachable");
        let (status, body) =
            get(Protocol::Github, provider.clone(), "/gh/acme/widgets/blob/guide.md").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "provider did not report a default branch");
        let calls = provider.calls();
        assert!(calls.contains(&"repo_info acme/widgets".to_string()));
        assert!(!calls.iter().any(|c| c.starts_with("raw_file")));
    }

    #[actix_web::test]
    async fn gitea_landing_falls_back_to_main_branch() {
        let provider = FakeProvider::new("", "# Hello");
        let (status, body) = get(Protocol::Gitea, provider.clone(), "/forge/acme/widgets").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Hello</h1>"), "body: {body}");
        assert!(provider
            .calls()
            .contains(&"raw_file acme/widgets main README.md".to_string()));
    }

    #[actix_web::test]
    async fn gitea_landing_uses_reported_branch() {
        let provider = FakeProvider::new("develop", "# Hello");
        let (status, _) = get(Protocol::Gitea, provider.clone(), "/forge/acme/widgets/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(provider
            .calls()
            .contains(&"raw_file acme/widgets develop README.md".to_string()));
    }

    #[actix_web::test]
    async fn gitea_routes_omit_owner_listing() {
        let provider = FakeProvider::new("main", "");
        let (status, _) = get(Protocol::Gitea, provider.clone(), "/forge/acme").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(provider.calls().is_empty());
    }

    #[actix_web::test]
    async fn readme_title_falls_back_to_file_name() {
        let provider = FakeProvider::new("main", "plain text, no headings");
        let (status, body) = get(Protocol::Gitea, provider, "/forge/acme/widgets").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<title>README.md - Example</title>"), "body: {body}");
    }
}
