//! Output module for persisting scraped text and reporting on a crawl
//!
//! This module handles:
//! - The `PageSink` interface the crawl session writes pages through
//! - The plain-text document sink (`scraped_content.txt` by default)
//! - Crawl statistics and the end-of-run console summary

pub mod stats;
mod text_file;
mod traits;

pub use stats::{print_summary, CrawlSummary};
pub use text_file::{format_block, format_header, separator, TextFileSink, SEPARATOR_WIDTH};
pub use traits::{AppendOutcome, OutputError, OutputResult, PageSink};
