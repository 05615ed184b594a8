//! HTML content extractor
//!
//! This module parses a page once and pulls out the two things the crawl needs:
//! - The visible text, cleaned into trimmed non-empty lines
//! - The raw `href` values of every anchor, for the session to resolve and filter

use scraper::{Html, Node, Selector};

/// Elements whose subtrees never contribute visible text
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "header", "footer", "noscript", "img"];

/// Text and links extracted from one HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPage {
    /// Cleaned visible text, one text fragment per line
    pub text: String,

    /// Raw href attribute values of all anchors, in document order
    pub links: Vec<String>,
}

/// Parses HTML and extracts visible text and anchor hrefs
///
/// # Text Extraction Rules
///
/// - Subtrees rooted at `script`, `style`, `header`, `footer`, `noscript`
///   and `img` are dropped
/// - Each remaining text node becomes its own line
/// - Lines are trimmed and empty lines discarded (see [`clean_text`])
///
/// # Link Extraction Rules
///
/// Every `<a href>` in the document is collected, including anchors inside
/// hidden regions such as navigation headers. Values are returned unresolved.
///
/// # Example
///
/// ```
/// use site_scribe::crawler::extract_page;
///
/// let html = r#"<html><body><header>Menu</header><p> Hello </p><a href="/next">Next</a></body></html>"#;
/// let page = extract_page(html);
/// assert_eq!(page.text, "Hello\nNext");
/// assert_eq!(page.links, vec!["/next".to_string()]);
/// ```
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);

    ExtractedPage {
        text: clean_text(&visible_text(&document)),
        links: extract_hrefs(&document),
    }
}

/// Joins all visible text nodes with newlines
fn visible_text(document: &Html) -> String {
    let mut fragments = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });

        if !hidden {
            fragments.push(&**text);
        }
    }

    fragments.join("\n")
}

/// Collects the raw href of every anchor
fn extract_hrefs(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}

/// Cleans extracted text
///
/// Splits on newlines, trims every line, drops lines that are empty after
/// trimming and joins the rest with `\n`. The result never contains a blank
/// line or a line with leading/trailing whitespace.
///
/// # Example
///
/// ```
/// use site_scribe::crawler::clean_text;
///
/// assert_eq!(clean_text("  a \n\n\t\n b\n"), "a\nb");
/// ```
pub fn clean_text(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
