//! Markdown rendering and title extraction.
//!
//! Uses comrak with GitHub Flavored Markdown extensions (tables,
//! strikethrough, autolinks, task lists). Raw HTML embedded in the source is
//! passed through unescaped: content originates from a source-controlled
//! repository, not end-user input.
//!
//! The title is taken from the heading with the smallest level value in the
//! document, first occurrence winning ties — a document that opens with an
//! `###` and later contains a `#` reports the `#` text.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{format_html, parse_document, Arena, Options};
use thiserror::Error;

/// One heading encountered while scanning a document, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Result of rendering one Markdown document
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Title from the heading scan; `None` when the document has no headings
    pub title: Option<String>,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("markdown conversion failed: {0}")]
    Format(#[from] std::io::Error),
}

fn gfm_options() -> Options<'static> {
    let mut options = Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.render.unsafe_ = true;
    options
}

/// Parse `source` once, producing the HTML body and the scanned title.
pub fn render(source: &str) -> Result<RenderedDocument, MarkdownError> {
    let arena = Arena::new();
    let options = gfm_options();
    let root = parse_document(&arena, source, &options);

    let headings = scan_headings(root);

    let mut html = Vec::new();
    format_html(root, &options, &mut html)?;

    Ok(RenderedDocument {
        title: title_of(&headings).map(str::to_string),
        html: String::from_utf8_lossy(&html).into_owned(),
    })
}

/// Collect every heading in document order with the concatenated text of its
/// inline children, nested markup ignored.
fn scan_headings<'a>(root: &'a AstNode<'a>) -> Vec<Heading> {
    let mut headings = Vec::new();
    for node in root.descendants() {
        let level = match &node.data.borrow().value {
            NodeValue::Heading(heading) => heading.level,
            _ => continue,
        };
        headings.push(Heading {
            level,
            text: inline_text(node),
        });
    }
    headings
}

fn inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    // skip(1): the node itself, whose data is borrowed by the caller
    for child in node.descendants().skip(1) {
        match &child.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            _ => {}
        }
    }
    text
}

/// Text of the smallest-level heading; ties broken by document order.
pub fn title_of(headings: &[Heading]) -> Option<&str> {
    let mut best: Option<&Heading> = None;
    for heading in headings {
        if best.map_or(true, |b| heading.level < b.level) {
            best = Some(heading);
        }
    }
    best.map(|h| h.text.as_str())
}
