use url::Url;

/// Normalizes a URL for the visited set
///
/// The `url` crate already lowercases the host, drops default ports and turns an
/// empty path into `/`. The fragment is removed on top of that, so links to
/// anchors on a page map to the page itself.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::normalize_url;
///
/// let url = normalize_url(Url::parse("HTTPS://Example.com:443#top").unwrap());
/// assert_eq!(url.as_str(), "https://example.com/");
/// ```
pub fn normalize_url(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}

/// Resolves an href against the page it was found on
///
/// Handles relative paths, protocol-relative links and fragment-only links.
/// Returns `None` for hrefs that do not resolve to an `http`/`https` URL
/// (`mailto:`, `javascript:`, `tel:`, `data:`, malformed input).
pub fn resolve_link(href: &str, base_url: &Url) -> Option<Url> {
    let resolved = base_url.join(href.trim()).ok()?;

    match resolved.scheme() {
        "http" | "https" if resolved.host_str().is_some() => Some(normalize_url(resolved)),
        _ => None,
    }
}

/// Returns true if the URL ends with one of the skipped suffixes
///
/// The match is a case-sensitive suffix match on the whole normalized URL, so
/// `/photo.JPG` and `/photo.jpg?size=2` are not filtered.
pub fn has_skipped_extension(url: &Url, skip_extensions: &[String]) -> bool {
    let url = url.as_str();
    skip_extensions.iter().any(|ext| url.ends_with(ext.as_str()))
}
