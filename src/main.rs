//! Site-Scribe main entry point
//!
//! This is the command-line interface for the Site-Scribe text harvester.

use anyhow::{bail, Context};
use clap::Parser;
use site_scribe::config::{load_config, validate, Config, TraversalOrder};
use site_scribe::crawler::crawl;
use site_scribe::output::print_summary;
use site_scribe::url::parse_start_url;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Site-Scribe: a single-domain text harvester
///
/// Site-Scribe crawls every page reachable from a start URL without leaving
/// its site, and saves the visible text of each page to one text file.
#[derive(Parser, Debug)]
#[command(name = "site-scribe")]
#[command(version)]
#[command(about = "A single-domain text harvester", long_about = None)]
struct Cli {
    /// URL to start from (prompted for when omitted)
    #[arg(value_name = "URL")]
    url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// File to write scraped text to
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Order in which discovered pages are processed
    #[arg(long, value_enum)]
    order: Option<TraversalOrder>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let input = match &cli.url {
        Some(url) => url.clone(),
        None => prompt_for_url()?,
    };
    let start = parse_start_url(&input)?;

    println!("\nScraping URLs and fetching content...\n");

    match crawl(config, start).await {
        Ok(summary) => {
            print_summary(&summary);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("site_scribe=info,warn"),
            1 => EnvFilter::new("site_scribe=debug,info"),
            2 => EnvFilter::new("site_scribe=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any), applies CLI overrides and validates the result
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("reading {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(order) = cli.order {
        config.crawler.traversal_order = order;
    }
    if let Some(timeout) = cli.timeout {
        config.crawler.request_timeout_secs = timeout;
    }

    validate(&config)?;
    Ok(config)
}

/// Reads the start URL from standard input
fn prompt_for_url() -> anyhow::Result<String> {
    print!("Enter the website URL to scrape: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading start URL from stdin")?;

    let url = line.trim();
    if url.is_empty() {
        bail!("no start URL given");
    }
    Ok(url.to_string())
}
