//! Owner/organization listing page.

use maud::{html, Markup};

use crate::models::OwnerPage;

use super::layout::page_shell;

pub fn owner_page(site_name: &str, page: &OwnerPage) -> Markup {
    let body = html! {
        h1 {
            a href=(page.profile_url) { (page.login) }
        }
        p class="owner-kind" { (page.kind.label()) }
        ul class="repo-list" {
            @for repo in &page.repos {
                li {
                    a href=(repo.relative_url) { (repo.name) }
                    @if let Some(description) = &repo.description {
                        " - " span class="description" { (description) }
                    }
                }
            }
        }
    };
    page_shell(site_name, &page.login, body)
}
