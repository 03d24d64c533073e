//! Repository landing handlers.
//!
//! Github prefixes compose the repository page (description, owner link,
//! readme link). Gitea prefixes render the readme inline instead: resolve
//! the branch with the `main` fallback, fetch `README.md` raw, and convert
//! it, since the provider exposes no readme-discovery endpoint.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::RepoPage;
use crate::pages;
use crate::services::{branch, markdown, validation};

use super::owner::html_response;
use super::RouteState;

/// GET `{prefix}/{owner}/{repo}` (github)
pub async fn repo_landing(
    state: web::Data<RouteState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner, repo) = path.into_inner();
    handle_landing(&state, &owner, &repo, false).await
}

/// GET `{prefix}/{owner}/{repo}/` (github)
pub async fn repo_landing_slash(
    state: web::Data<RouteState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner, repo) = path.into_inner();
    handle_landing(&state, &owner, &repo, true).await
}

async fn handle_landing(
    state: &RouteState,
    owner: &str,
    repo: &str,
    slash: bool,
) -> Result<HttpResponse, AppError> {
    validate_names(owner, repo)?;

    let info = state.provider.repo_info(owner, repo).await?;
    let readme = state.provider.readme_location(owner, repo).await?;

    let readme_href = if slash {
        format!("blob/{}", readme.path)
    } else {
        format!("{repo}/blob/{}", readme.path)
    };
    let owner_href = if slash { ".." } else { "." };

    let page = RepoPage {
        name: info.name,
        description: info.description,
        html_url: info.html_url,
        owner_href: owner_href.to_string(),
        readme_name: readme.name,
        readme_href,
    };

    Ok(html_response(pages::repo_page(&state.site_name, &page)))
}

/// GET `{prefix}/{owner}/{repo}[/]` (gitea)
pub async fn readme_inline(
    state: web::Data<RouteState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner, repo) = path.into_inner();
    validate_names(&owner, &repo)?;

    let info = state.provider.repo_info(&owner, &repo).await?;
    let branch = branch::landing_branch(&info.default_branch);
    let readme = state.provider.readme_location(&owner, &repo).await?;

    let raw = state
        .provider
        .raw_file(&owner, &repo, branch, &readme.path)
        .await?;
    let source = String::from_utf8_lossy(&raw);
    let doc = markdown::render(&source)?;
    let title = doc.title.unwrap_or(readme.name);

    Ok(html_response(pages::markdown_page(
        &state.site_name,
        &title,
        &doc.html,
    )))
}

pub(super) fn validate_names(owner: &str, repo: &str) -> Result<(), AppError> {
    if !validation::is_valid_identifier(owner) || !validation::is_valid_identifier(repo) {
        return Err(AppError::InvalidInput("invalid repo name".into()));
    }
    Ok(())
}
