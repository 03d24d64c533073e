//! Owner listing handlers.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{OwnerKind, OwnerPage, RepoEntry};
use crate::pages;
use crate::services::validation;

use super::RouteState;

/// GET `{prefix}/{owner}`
pub async fn owner_index(
    state: web::Data<RouteState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    handle_owner(&state, &path.into_inner(), false).await
}

/// GET `{prefix}/{owner}/`
pub async fn owner_index_slash(
    state: web::Data<RouteState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    handle_owner(&state, &path.into_inner(), true).await
}

async fn handle_owner(
    state: &RouteState,
    owner: &str,
    slash: bool,
) -> Result<HttpResponse, AppError> {
    if !validation::is_valid_identifier(owner) {
        return Err(AppError::InvalidInput("invalid owner name".into()));
    }

    let info = state.provider.owner_info(owner).await?;
    let organization = info.kind == OwnerKind::Organization;
    let listing = state.provider.repo_list(owner, organization).await?;

    let repos = listing
        .into_iter()
        .map(|item| {
            // With a trailing slash the owner segment is already part of the
            // base, so the repo name alone resolves correctly.
            let relative_url = if slash {
                item.name.clone()
            } else {
                format!("{owner}/{}", item.name)
            };
            RepoEntry {
                name: item.name,
                description: item.description,
                relative_url,
            }
        })
        .collect();

    let page = OwnerPage {
        login: info.login,
        profile_url: info.html_url,
        kind: info.kind,
        repos,
    };

    Ok(html_response(pages::owner_page(&state.site_name, &page)))
}

pub(super) fn html_response(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(markup.into_string())
}
