pub mod branch;
pub mod gitea;
pub mod github;
pub mod markdown;
pub mod provider;
pub mod validation;

pub use branch::MissingDefaultBranch;
pub use gitea::GiteaClient;
pub use github::GitHubClient;
pub use markdown::{Heading, MarkdownError, RenderedDocument};
pub use provider::{GitProvider, ProviderError};
pub use validation::{is_safe_path, is_valid_identifier};
