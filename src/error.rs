//! Request-level error type.
//!
//! Every failure is terminal for its request and surfaces as a plain-text
//! body. Status policy: request-input failures (identifier, path guard,
//! mode, extension) return 400; upstream, branch-resolution, and rendering
//! failures return 500.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::services::branch::MissingDefaultBranch;
use crate::services::markdown::MarkdownError;
use crate::services::provider::ProviderError;

/// Application-level error type
#[derive(Debug)]
pub enum AppError {
    /// Identifier, path, or mode taken from the request path is unsafe
    InvalidInput(String),
    /// Transport failure or non-decodable response from a provider call
    Upstream(ProviderError),
    /// Provider reported no default branch and no safe fallback exists
    UnresolvedBranch,
    /// File extension other than `.md` requested through the blob endpoint
    UnsupportedExtension(String),
    /// Markdown conversion failed
    Render(MarkdownError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "{msg}"),
            Self::Upstream(e) => write!(f, "upstream fetch failed: {e}"),
            Self::UnresolvedBranch => write!(f, "provider did not report a default branch"),
            Self::UnsupportedExtension(ext) => write!(f, "unsupported extension {ext}"),
            Self::Render(e) => write!(f, "render failed: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::UnsupportedExtension(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) | Self::UnresolvedBranch | Self::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        Self::Upstream(err)
    }
}

impl From<MissingDefaultBranch> for AppError {
    fn from(_: MissingDefaultBranch) -> Self {
        Self::UnresolvedBranch
    }
}

impl From<MarkdownError> for AppError {
    fn from(err: MarkdownError) -> Self {
        Self::Render(err)
    }
}
