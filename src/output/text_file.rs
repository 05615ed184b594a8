//! Plain-text document sink
//!
//! Writes the scraped document in the following layout:
//!
//! ```text
//! Scraped Data from <start_url>
//! ====...====
//! ====...====
//! URL: <page_url>
//! ====...====
//! <cleaned visible text>
//!
//! ====...====
//! URL: <next_page_url>
//! ...
//! ```
//!
//! One handle is held for the whole run and flushed after every write, so an
//! interrupted crawl leaves a readable partial document.

use crate::output::traits::{AppendOutcome, OutputError, OutputResult, PageSink};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Number of `=` characters in a separator line
pub const SEPARATOR_WIDTH: usize = 100;

/// Returns a full-width separator line (without newline)
pub fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

/// Formats the document header written once per run
pub fn format_header(start_url: &str) -> String {
    format!("Scraped Data from {}\n{}\n", start_url, separator())
}

/// Formats one page block: separator, URL line, separator, text, blank line
pub fn format_block(url: &str, text: &str) -> String {
    let sep = separator();
    format!("{sep}\nURL: {url}\n{sep}\n{text}\n\n")
}

/// Sink writing page blocks to a single text file
#[derive(Debug)]
pub struct TextFileSink {
    /// Destination path
    path: PathBuf,

    /// Open handle, present between `begin` and `finish`
    writer: Option<BufWriter<File>>,

    /// Number of page blocks written this run
    blocks_written: usize,
}

impl TextFileSink {
    /// Creates a sink for the given path
    ///
    /// Nothing is touched on disk until `begin` is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            writer: None,
            blocks_written: 0,
        }
    }

    /// Returns the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of page blocks written this run
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    fn write_flushed(&mut self, content: &str) -> OutputResult<()> {
        let writer = self.writer.as_mut().ok_or(OutputError::NotStarted)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl PageSink for TextFileSink {
    fn begin(&mut self, start_url: &str) -> OutputResult<()> {
        let file = File::create(&self.path)?;
        self.writer = Some(BufWriter::new(file));
        self.blocks_written = 0;

        self.write_flushed(&format_header(start_url))?;
        tracing::debug!("Created output file {}", self.path.display());
        Ok(())
    }

    fn append(&mut self, url: &str, text: &str) -> OutputResult<AppendOutcome> {
        if self.writer.is_none() {
            return Err(OutputError::NotStarted);
        }

        if text.trim().is_empty() {
            return Ok(AppendOutcome::SkippedEmpty);
        }

        self.write_flushed(&format_block(url, text))?;
        self.blocks_written += 1;
        Ok(AppendOutcome::Written)
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}
