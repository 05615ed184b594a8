//! Configuration module for Site-Scribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so a crawl can run without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use site_scribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scribe.toml")).unwrap();
//! println!("Request timeout: {}s", config.crawler.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, TraversalOrder, UserAgentConfig, DEFAULT_OUTPUT_PATH,
    DEFAULT_SKIP_EXTENSIONS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
