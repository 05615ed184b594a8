//! Output sink traits and types
//!
//! This module defines the trait interface the crawl session uses to persist
//! page text, along with its error and outcome types.

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Output has not been started; call begin() before append()")]
    NotStarted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// What happened to one page handed to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// A page block was appended
    Written,

    /// The text was empty or whitespace-only; nothing was written
    SkippedEmpty,
}

/// Trait for page sinks
///
/// A sink receives pages in crawl order. `begin` is called when the first page
/// of a run has been fetched and must reset any previous output. If it fails,
/// the session calls it again on the next fetched page. Once it has
/// succeeded, every page goes through `append`.
pub trait PageSink {
    /// Creates or truncates the output and writes the run header
    ///
    /// # Arguments
    ///
    /// * `start_url` - The start URL as the user entered it
    fn begin(&mut self, start_url: &str) -> OutputResult<()>;

    /// Appends one page's cleaned text
    ///
    /// # Arguments
    ///
    /// * `url` - The page URL
    /// * `text` - The cleaned visible text of the page
    ///
    /// # Returns
    ///
    /// `AppendOutcome::SkippedEmpty` if the text had no visible content
    fn append(&mut self, url: &str, text: &str) -> OutputResult<AppendOutcome>;

    /// Flushes and releases the output
    fn finish(&mut self) -> OutputResult<()>;
}
