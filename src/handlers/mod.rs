//! HTTP handlers and per-route registration.
//!
//! Each configured route mounts a scope under its path prefix. The slash
//! and no-slash variants of the owner and repository endpoints are distinct
//! handlers because the relative-URL rule on the composed page depends on
//! whether the request carried a trailing slash.

pub mod blob;
pub mod owner;
pub mod repo;

#[cfg(test)]
mod gateway_http_tests;

use std::sync::Arc;

use actix_web::{web, Scope};

use crate::config::{Protocol, Route};
use crate::services::GitProvider;

/// Read-only state shared by every handler under one route prefix
pub struct RouteState {
    pub site_name: String,
    pub route: Route,
    pub provider: Arc<dyn GitProvider>,
}

/// Build the actix scope for one configured route.
///
/// Github prefixes register the owner listing, repository landing, and blob
/// shapes; gitea prefixes omit the owner listing and serve the readme
/// inline on the landing endpoint.
pub fn scope_for(state: web::Data<RouteState>) -> Scope {
    let scope = web::scope(&state.route.scope_path()).app_data(state.clone());
    match state.route.protocol {
        Protocol::Github => scope
            .route("/{owner}", web::get().to(owner::owner_index))
            .route("/{owner}/", web::get().to(owner::owner_index_slash))
            .route("/{owner}/{repo}", web::get().to(repo::repo_landing))
            .route("/{owner}/{repo}/", web::get().to(repo::repo_landing_slash))
            .route("/{owner}/{repo}/{mode}/{path:.*}", web::get().to(blob::file_page)),
        Protocol::Gitea => scope
            .route("/{owner}/{repo}", web::get().to(repo::readme_inline))
            .route("/{owner}/{repo}/", web::get().to(repo::readme_inline))
            .route("/{owner}/{repo}/{mode}/{path:.*}", web::get().to(blob::file_page)),
    }
}
