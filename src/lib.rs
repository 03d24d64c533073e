//! repogate — a read-only web gateway that presents repositories and files
//! hosted on GitHub- and Gitea-compatible providers as browsable pages,
//! without exposing the providers' native URLs.
//!
//! Request pipeline: dispatcher → input validation → provider metadata →
//! branch resolution → raw content → Markdown rendering → page composition.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod services;

pub use config::{Config, ConfigError, Protocol, Route};
pub use error::AppError;
pub use handlers::RouteState;
