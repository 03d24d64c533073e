//! Repository landing page.

use maud::{html, Markup};

use crate::models::RepoPage;

use super::layout::page_shell;

pub fn repo_page(site_name: &str, page: &RepoPage) -> Markup {
    let body = html! {
        h1 {
            a href=(page.html_url) { (page.name) }
        }
        @if let Some(description) = &page.description {
            p class="description" { (description) }
        }
        nav {
            a href=(page.owner_href) { "owner" }
            " · "
            a href=(page.readme_href) { (page.readme_name) }
        }
    };
    page_shell(site_name, &page.name, body)
}
