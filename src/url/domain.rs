use url::Url;

/// Returns the `scheme://host[:port]` origin of a URL
///
/// # Examples
///
/// ```
/// use url::Url;
/// use site_scribe::url::site_origin;
///
/// let url = Url::parse("https://EXAMPLE.com/path?q=1").unwrap();
/// assert_eq!(site_origin(&url), "https://example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(site_origin(&url), "http://127.0.0.1:8080");
/// ```
pub fn site_origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns true if `candidate` lives on the same site as `start`
///
/// Two URLs share a site when scheme, host and port all match. Path, query
/// and fragment are ignored. URLs without a host never match.
pub fn is_same_site(candidate: &Url, start: &Url) -> bool {
    let origin = candidate.origin();
    origin.is_tuple() && origin == start.origin()
}
