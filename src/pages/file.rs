//! File pages: rendered Markdown and plain text.

use maud::{html, Markup, PreEscaped};

use super::layout::page_shell;

/// Rendered Markdown file. `body_html` comes straight from the Markdown
/// converter and is embedded unescaped.
pub fn markdown_page(site_name: &str, title: &str, body_html: &str) -> Markup {
    let body = html! {
        article class="markdown-body" {
            (PreEscaped(body_html))
        }
    };
    page_shell(site_name, title, body)
}

/// Plain-text file, shown preformatted with the file name as title.
pub fn text_page(site_name: &str, file_name: &str, text: &str) -> Markup {
    let body = html! {
        pre class="plain-text" { (text) }
    };
    page_shell(site_name, file_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_body_is_embedded_unescaped() {
        let html = markdown_page("Example", "Guide", "<h1>Guide</h1><p>hi</p>").into_string();
        assert!(html.contains("<h1>Guide</h1>"), "html: {html}");
        assert!(html.contains("Guide - Example"), "html: {html}");
    }

    #[test]
    fn text_body_is_escaped() {
        let html = text_page("Example", "notes.txt", "a < b && c").into_string();
        assert!(html.contains("a &lt; b &amp;&amp; c"), "html: {html}");
        assert!(html.contains("notes.txt - Example"), "html: {html}");
        assert!(html.contains("<pre"), "html: {html}");
    }
}
