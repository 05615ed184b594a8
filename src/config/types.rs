use serde::Deserialize;

/// Output file written when neither the config nor the CLI names one
pub const DEFAULT_OUTPUT_PATH: &str = "scraped_content.txt";

/// Suffixes of links that are never fetched
pub const DEFAULT_SKIP_EXTENSIONS: &[&str] = &[
    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg", ".pdf", ".mp4",
];

/// Main configuration structure for Site-Scribe
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Order in which discovered links are processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Each page's links are fully explored before its later siblings
    #[default]
    DepthFirst,
    /// Pages are processed level by level from the start URL
    BreadthFirst,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Timeout applied to each individual request (seconds)
    #[serde(rename = "request-timeout-secs", default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// Traversal policy for the work list
    #[serde(rename = "traversal-order", default)]
    pub traversal_order: TraversalOrder,

    /// Skip responses whose Content-Type is declared and not HTML
    #[serde(rename = "html-only", default = "default_html_only")]
    pub html_only: bool,

    /// Case-sensitive URL suffixes that are never fetched
    #[serde(rename = "skip-extensions", default = "default_skip_extensions")]
    pub skip_extensions: Vec<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            traversal_order: TraversalOrder::default(),
            html_only: default_html_only(),
            skip_extensions: default_skip_extensions(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name", default = "default_crawler_name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default = "default_crawler_version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

impl UserAgentConfig {
    /// Formats the `User-Agent` header value as `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the scraped text document
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_html_only() -> bool {
    true
}

fn default_skip_extensions() -> Vec<String> {
    DEFAULT_SKIP_EXTENSIONS
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_crawler_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}
