//! Crawl statistics and the end-of-run summary
//!
//! The session updates a `CrawlSummary` as it goes; the binary prints it once
//! the frontier is drained.

use chrono::{DateTime, Utc};

/// Counters and timing for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    /// The start URL as entered
    pub start_url: String,

    /// Where page blocks were written
    pub output_path: String,

    /// When the session started
    pub started_at: DateTime<Utc>,

    /// When the frontier was drained
    pub finished_at: Option<DateTime<Utc>>,

    /// Unique URLs marked visited (fetched or attempted)
    pub urls_visited: u64,

    /// Pages fetched successfully and handed to the sink
    pub pages_processed: u64,

    /// Page blocks appended to the output
    pub blocks_written: u64,

    /// Pages skipped because they had no visible text
    pub pages_empty: u64,

    /// Responses skipped because they were not HTML
    pub pages_not_html: u64,

    /// URLs whose fetch failed
    pub fetch_failures: u64,

    /// Header or page block writes that failed
    pub write_failures: u64,

    /// Links dropped by the extension filter
    pub links_skipped_extension: u64,

    /// Links dropped because they pointed to another site
    pub links_off_site: u64,
}

impl CrawlSummary {
    /// Creates an empty summary stamped with the current time
    pub fn new(start_url: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            output_path: output_path.into(),
            started_at: Utc::now(),
            finished_at: None,
            urls_visited: 0,
            pages_processed: 0,
            blocks_written: 0,
            pages_empty: 0,
            pages_not_html: 0,
            fetch_failures: 0,
            write_failures: 0,
            links_skipped_extension: 0,
            links_off_site: 0,
        }
    }

    /// Stamps the finish time
    pub fn mark_finished(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Returns the run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }

    /// Returns the share of visited URLs that produced a page block
    pub fn write_rate(&self) -> f64 {
        if self.urls_visited == 0 {
            return 0.0;
        }
        (self.blocks_written as f64 / self.urls_visited as f64) * 100.0
    }
}

/// Prints the summary to stdout in a formatted manner
///
/// # Arguments
///
/// * `summary` - The summary to display
pub fn print_summary(summary: &CrawlSummary) {
    println!();
    println!("=== Crawl Summary ===\n");

    println!("Run:");
    println!("  Start URL: {}", summary.start_url);
    println!("  Started: {}", summary.started_at.to_rfc3339());
    if let Some(finished) = summary.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = summary.duration_seconds() {
        println!("  Duration: {:.2}s", duration);
    }
    println!();

    println!("Pages:");
    println!("  Unique URLs visited: {}", summary.urls_visited);
    println!("  Processed: {}", summary.pages_processed);
    println!(
        "  Written: {} ({:.1}% of visited)",
        summary.blocks_written,
        summary.write_rate()
    );
    println!("  Empty: {}", summary.pages_empty);
    println!("  Not HTML: {}", summary.pages_not_html);
    println!("  Fetch failures: {}", summary.fetch_failures);
    println!("  Write failures: {}", summary.write_failures);
    println!();

    println!("Links skipped:");
    println!("  By extension: {}", summary.links_skipped_extension);
    println!("  Off site: {}", summary.links_off_site);
    println!();

    println!(
        "Scraping completed! Total unique URLs found: {}. Content saved in '{}'.",
        summary.urls_visited, summary.output_path
    );
}
