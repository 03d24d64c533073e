//! Arbitrary sub-path file handler.
//!
//! Pipeline order is fixed and tested: validate names, mode, and path,
//! gate on the `.md` extension, then fetch metadata, resolve the branch
//! (hard failure when unreported), and only then fetch raw content. The
//! extension gate runs before any upstream call so unsupported requests
//! cost nothing.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::pages;
use crate::services::{branch, markdown, validation};

use super::owner::html_response;
use super::repo::validate_names;
use super::RouteState;

/// GET `{prefix}/{owner}/{repo}/{mode}/{path...}`
pub async fn file_page(
    state: web::Data<RouteState>,
    path: web::Path<(String, String, String, String)>,
) -> Result<HttpResponse, AppError> {
    let (owner, repo, mode, file_path) = path.into_inner();

    validate_names(&owner, &repo)?;
    if mode != "blob" {
        return Err(AppError::InvalidInput("invalid mode".into()));
    }
    if !validation::is_safe_path(&file_path) {
        return Err(AppError::InvalidInput("invalid path".into()));
    }

    let file_name = file_path.rsplit('/').next().unwrap_or(&file_path);
    let ext = extension_of(file_name);
    if ext != ".md" {
        return Err(AppError::UnsupportedExtension(ext.to_string()));
    }

    let info = state.provider.repo_info(&owner, &repo).await?;
    let branch = branch::blob_branch(&info.default_branch)?;

    let raw = state
        .provider
        .raw_file(&owner, &repo, branch, &file_path)
        .await?;
    let source = String::from_utf8_lossy(&raw);
    let doc = markdown::render(&source)?;
    let title = doc.title.unwrap_or_else(|| file_name.to_string());

    Ok(html_response(pages::markdown_page(
        &state.site_name,
        &title,
        &doc.html,
    )))
}

/// Suffix of `file_name` beginning at the final dot, or the empty string.
fn extension_of(file_name: &str) -> &str {
    file_name
        .rfind('.')
        .map(|i| &file_name[i..])
        .unwrap_or("")
}
