//! Shared HTML document shell.

use maud::{html, Markup, DOCTYPE};

/// Wraps page-specific body markup in the standard document structure.
pub fn page_shell(site_name: &str, title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_name) }
            }
            body {
                main class="content" {
                    (body)
                }
            }
        }
    }
}
