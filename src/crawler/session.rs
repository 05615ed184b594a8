//! Crawl session - traversal of one site from a start URL
//!
//! A `CrawlSession` owns everything a run needs: the HTTP client, the frontier
//! (visited set plus work list), the output sink and the running summary. It is
//! created at crawl start and dropped when the crawl ends; nothing is global.
//!
//! Each URL taken from the frontier goes through `visit`:
//! 1. Mark visited (before any network call)
//! 2. Fetch; on failure log and abandon this URL only
//! 3. Skip non-HTML responses when `html-only` is set
//! 4. Extract text and links
//! 5. Write the header if it is not written yet, then append this page
//! 6. Resolve and filter links, schedule the survivors
//!
//! No error ends the run. Failed fetches and failed writes are logged and
//! counted in the summary, and the crawl moves on.

use crate::config::Config;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::output::{AppendOutcome, CrawlSummary, PageSink};
use crate::url::{classify_link, site_origin, LinkDecision, StartUrl};
use crate::ScribeError;
use reqwest::Client;
use url::Url;

/// How often (in processed pages) a progress line is logged
const PROGRESS_INTERVAL: u64 = 10;

/// State for one crawl run
pub struct CrawlSession<S: PageSink> {
    config: Config,
    client: Client,
    frontier: Frontier,
    sink: S,
    start: StartUrl,
    header_written: bool,
    summary: CrawlSummary,
}

impl<S: PageSink> CrawlSession<S> {
    /// Creates a new session
    ///
    /// # Arguments
    ///
    /// * `config` - The validated crawl configuration
    /// * `start` - The parsed start URL; it also defines the crawl's site
    /// * `sink` - Where page text is written
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlSession)` - Ready to run
    /// * `Err(ScribeError)` - The HTTP client could not be built
    pub fn new(config: Config, start: StartUrl, sink: S) -> Result<Self, ScribeError> {
        let client = build_http_client(&config)?;
        let frontier = Frontier::new(config.crawler.traversal_order);
        let summary = CrawlSummary::new(start.as_entered(), config.output.path.clone());

        Ok(Self {
            config,
            client,
            frontier,
            sink,
            start,
            header_written: false,
            summary,
        })
    }

    /// Runs the crawl until the frontier is drained
    pub async fn run(&mut self) {
        tracing::info!(
            "Starting {:?} crawl of {}",
            self.frontier.order(),
            self.start.url()
        );

        self.frontier.schedule(vec![self.start.url().clone()]);

        while let Some(url) = self.frontier.next_pending() {
            self.visit(url).await;
        }

        if let Err(e) = self.sink.finish() {
            tracing::error!("Error closing output: {}", e);
            self.summary.write_failures += 1;
        }
        self.summary.mark_finished();

        tracing::info!(
            "Crawl completed: {} unique URLs visited, {} pages written",
            self.summary.urls_visited,
            self.summary.blocks_written
        );
    }

    /// Processes a single URL
    ///
    /// Visiting a URL that is already in the visited set does nothing: no
    /// fetch and no output. Links found on the page are scheduled on the
    /// frontier rather than visited directly.
    pub async fn visit(&mut self, url: Url) {
        if !self.frontier.mark_visited(&url) {
            tracing::trace!("Already visited {}", url);
            return;
        }
        self.summary.urls_visited = self.frontier.visited_count() as u64;

        tracing::info!("Fetching: {}", url);
        let page = match fetch_page(&self.client, &url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Error fetching {}: {}", url, e);
                self.summary.fetch_failures += 1;
                return;
            }
        };
        if page.final_url != url {
            tracing::debug!("{} redirected to {}", url, page.final_url);
        }
        tracing::trace!("HTTP {} from {}", page.status_code, page.final_url);

        if self.config.crawler.html_only && !page.is_html() {
            tracing::warn!(
                "Skipping {}: content type {} is not HTML",
                url,
                page.content_type.as_deref().unwrap_or("unknown")
            );
            self.summary.pages_not_html += 1;
            return;
        }

        let extracted = extract_page(&page.body);
        let header_ready = self.write_header();

        self.summary.pages_processed += 1;
        tracing::info!("{}. {}", self.summary.pages_processed, url);

        if header_ready {
            self.write_page(&url, &extracted.text);
        }

        let links = self.discover_links(&url, &extracted.links);
        tracing::debug!("{} links to schedule from {}", links.len(), url);
        self.frontier.schedule(links);

        if self.summary.pages_processed % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                "Progress: {} pages processed, {} pending",
                self.summary.pages_processed,
                self.frontier.pending_count()
            );
        }
    }

    /// Begins the output unless that already succeeded
    ///
    /// Returns false if the header could not be written; the next fetched
    /// page tries again.
    fn write_header(&mut self) -> bool {
        if self.header_written {
            return true;
        }

        match self.sink.begin(self.start.as_entered()) {
            Ok(()) => {
                self.header_written = true;
                true
            }
            Err(e) => {
                tracing::error!("Error writing output header: {}", e);
                self.summary.write_failures += 1;
                false
            }
        }
    }

    fn write_page(&mut self, url: &Url, text: &str) {
        match self.sink.append(url.as_str(), text) {
            Ok(AppendOutcome::Written) => {
                self.summary.blocks_written += 1;
                tracing::info!("Content saved for: {}", url);
            }
            Ok(AppendOutcome::SkippedEmpty) => {
                self.summary.pages_empty += 1;
                tracing::warn!("Content for {} is empty or unreadable. Skipping...", url);
            }
            Err(e) => {
                tracing::error!("Error saving content for {}: {}", url, e);
                self.summary.write_failures += 1;
            }
        }
    }

    /// Resolves and filters the raw hrefs of one page
    ///
    /// Keeps same-site links that pass the extension filter and are not yet
    /// visited, in document order.
    fn discover_links(&mut self, page_url: &Url, hrefs: &[String]) -> Vec<Url> {
        let mut links = Vec::new();

        for href in hrefs {
            match classify_link(
                href,
                page_url,
                self.start.url(),
                &self.config.crawler.skip_extensions,
            ) {
                LinkDecision::Follow(link) => {
                    if !self.frontier.is_visited(&link) {
                        links.push(link);
                    }
                }
                LinkDecision::SkippedExtension(link) => {
                    tracing::debug!("Skipping {}: filtered extension", link);
                    self.summary.links_skipped_extension += 1;
                }
                LinkDecision::OffSite(link) => {
                    tracing::debug!(
                        "Skipping {}: outside {}",
                        link,
                        site_origin(self.start.url())
                    );
                    self.summary.links_off_site += 1;
                }
                LinkDecision::Unresolvable => {
                    tracing::trace!("Ignoring href {:?} on {}", href, page_url);
                }
            }
        }

        links
    }

    /// Returns the frontier (visited set and pending work)
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Returns the running summary
    pub fn summary(&self) -> &CrawlSummary {
        &self.summary
    }

    /// Returns the output sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session, returning its summary
    pub fn into_summary(self) -> CrawlSummary {
        self.summary
    }
}
