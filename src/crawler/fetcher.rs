//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeout
//! - GET requests that turn transport failures and non-success statuses into errors
//! - Content-Type inspection for the HTML-only filter
//!
//! There are no retries. Redirects follow the client's default policy and no
//! cookies are kept between requests.

use crate::config::Config;
use crate::ScribeError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Media types treated as HTML pages
const HTML_MEDIA_TYPES: &[&str] = &["text/html", "application/xhtml+xml"];

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value, if the server sent one
    pub content_type: Option<String>,
    /// Page body, decoded using the response charset
    pub body: String,
}

impl FetchedPage {
    /// Returns true if the response declares an HTML media type
    ///
    /// A response without a Content-Type header is assumed to be HTML.
    pub fn is_html(&self) -> bool {
        match &self.content_type {
            None => true,
            Some(content_type) => {
                let essence = content_type
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_ascii_lowercase();
                HTML_MEDIA_TYPES.contains(&essence.as_str())
            }
        }
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawl configuration (timeout and user agent are used)
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use site_scribe::config::Config;
/// use site_scribe::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.crawler.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL with a single GET request
///
/// # Error Mapping
///
/// | Condition | Result |
/// |-----------|--------|
/// | Request timed out | `ScribeError::Timeout` |
/// | DNS / connection / TLS / body read failure | `ScribeError::Http` |
/// | Status outside 2xx | `ScribeError::HttpStatus` |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
pub async fn fetch_page(client: &Client, url: &Url) -> Result<FetchedPage, ScribeError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScribeError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().clone();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await.map_err(|e| classify_error(url, e))?;

    Ok(FetchedPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}

/// Maps a transport error onto the crate error type
fn classify_error(url: &Url, error: reqwest::Error) -> ScribeError {
    if error.is_timeout() {
        ScribeError::Timeout {
            url: url.to_string(),
        }
    } else {
        ScribeError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
