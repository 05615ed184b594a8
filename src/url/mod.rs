//! URL handling module for Site-Scribe
//!
//! This module provides start URL parsing, link resolution and normalization,
//! the extension filter, and the same-site check that keeps a crawl on one domain.

mod domain;
mod filter;

use crate::{UrlError, UrlResult};
use ::url::Url;

// Re-export main functions
pub use domain::{is_same_site, site_origin};
pub use filter::{has_skipped_extension, normalize_url, resolve_link};

/// Outcome of checking one discovered link against the crawl's scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
    /// Same-site page link that should be scheduled
    Follow(Url),
    /// The href could not be resolved to an http(s) URL
    Unresolvable,
    /// The resolved URL ends with a skipped extension
    SkippedExtension(Url),
    /// The resolved URL belongs to a different site
    OffSite(Url),
}

/// Classifies a raw href found on `page_url`
///
/// The checks run in this order:
/// 1. Resolve against the page URL (relative, protocol-relative and fragment links)
/// 2. Extension filter, regardless of domain
/// 3. Same-site check against the start URL
///
/// Whether the target was already visited is left to the frontier.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::{classify_link, LinkDecision};
///
/// let start = Url::parse("https://example.com/").unwrap();
/// let exts = vec![".jpg".to_string()];
///
/// assert!(matches!(
///     classify_link("/about", &start, &start, &exts),
///     LinkDecision::Follow(_)
/// ));
/// assert!(matches!(
///     classify_link("/photo.jpg", &start, &start, &exts),
///     LinkDecision::SkippedExtension(_)
/// ));
/// assert!(matches!(
///     classify_link("https://other.com/x", &start, &start, &exts),
///     LinkDecision::OffSite(_)
/// ));
/// ```
pub fn classify_link(
    href: &str,
    page_url: &Url,
    start_url: &Url,
    skip_extensions: &[String],
) -> LinkDecision {
    let resolved = match resolve_link(href, page_url) {
        Some(url) => url,
        None => return LinkDecision::Unresolvable,
    };

    if has_skipped_extension(&resolved, skip_extensions) {
        return LinkDecision::SkippedExtension(resolved);
    }

    if !is_same_site(&resolved, start_url) {
        return LinkDecision::OffSite(resolved);
    }

    LinkDecision::Follow(resolved)
}

/// The URL a crawl starts from
///
/// Keeps the text the user entered (trimmed) next to the parsed URL. The
/// entered text is what the output header and summary show; the parsed URL
/// defines the site and seeds the visited set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartUrl {
    entered: String,
    url: Url,
}

impl StartUrl {
    /// The start URL as the user typed it, without surrounding whitespace
    pub fn as_entered(&self) -> &str {
        &self.entered
    }

    /// The normalized start URL
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Parses the user-supplied start URL
///
/// The input is trimmed, must be an absolute `http` or `https` URL with a host,
/// and is normalized the same way as every discovered link.
///
/// # Examples
///
/// ```
/// use site_scribe::url::parse_start_url;
///
/// let start = parse_start_url(" https://Example.com ").unwrap();
/// assert_eq!(start.as_entered(), "https://Example.com");
/// assert_eq!(start.url().as_str(), "https://example.com/");
/// ```
pub fn parse_start_url(input: &str) -> UrlResult<StartUrl> {
    let entered = input.trim();
    let url = Url::parse(entered).map_err(|e| UrlError::Parse(format!("{}: {}", input, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(input.to_string()));
    }

    Ok(StartUrl {
        entered: entered.to_string(),
        url: normalize_url(url),
    })
}
