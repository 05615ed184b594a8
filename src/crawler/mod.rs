//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a per-request timeout
//! - HTML parsing, visible text extraction and link collection
//! - The frontier: visited set plus depth-first or breadth-first work list
//! - The crawl session that ties them to an output sink

mod extractor;
mod fetcher;
mod frontier;
mod session;

pub use extractor::{clean_text, extract_page, ExtractedPage};
pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use frontier::Frontier;
pub use session::CrawlSession;

use crate::config::Config;
use crate::output::{CrawlSummary, TextFileSink};
use crate::url::StartUrl;
use crate::ScribeError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and an empty frontier
/// 2. Fetch the start URL and every same-site page reachable from it
/// 3. Write each page's visible text to `config.output.path`
/// 4. Return the run summary
///
/// # Arguments
///
/// * `config` - The crawl configuration
/// * `start` - The parsed start URL (see `url::parse_start_url`)
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Crawl completed; failed fetches and writes are counted in it
/// * `Err(ScribeError)` - The HTTP client could not be built
///
/// # Example
///
/// ```no_run
/// use site_scribe::config::Config;
/// use site_scribe::crawler::crawl;
/// use site_scribe::url::parse_start_url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let start = parse_start_url("https://example.com")?;
/// let summary = crawl(Config::default(), start).await?;
/// println!("{} pages written", summary.blocks_written);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config, start: StartUrl) -> Result<CrawlSummary, ScribeError> {
    let sink = TextFileSink::new(&config.output.path);
    let mut session = CrawlSession::new(config, start, sink)?;
    session.run().await;
    Ok(session.into_summary())
}
