//! Page composition with maud.
//!
//! Four page shapes share one layout shell carrying the configured site
//! name: owner listing, repository landing, rendered Markdown file, and
//! plain-text file. Composition is a pure function from page data to
//! markup; provider logic never leaks in here.

mod file;
mod layout;
mod owner;
mod repo;

pub use file::{markdown_page, text_page};
pub use owner::owner_page;
pub use repo::repo_page;
