pub mod page;
pub mod provider;

pub use page::{OwnerPage, RepoEntry, RepoPage};
pub use provider::{OwnerKind, OwnerSummary, ReadmeLocation, RepoItem, RepoSummary};
