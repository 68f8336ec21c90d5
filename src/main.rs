//! Shelf-Crawl main entry point
//!
//! This is the command-line interface for the Shelf-Crawl catalogue crawler.

use anyhow::Context;
use clap::Parser;
use shelf_crawl::config::{load_config_or_default, Config};
use shelf_crawl::crawler::crawl;
use shelf_crawl::output::{configured_sinks, export_records, print_statistics};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shelf-Crawl: a catalogue crawler
///
/// Discovers every category of a paginated book catalogue, extracts one record
/// per book, and exports the result to CSV and XLSX.
#[derive(Parser, Debug)]
#[command(name = "shelf-crawl")]
#[command(version)]
#[command(about = "Crawls a paginated book catalogue into CSV and XLSX", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the effective configuration without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration (defaults when no file is given)
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    // Handle different modes
    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shelf_crawl=info,warn"),
            1 => EnvFilter::new("shelf_crawl=debug,info"),
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

/// Handles the --dry-run mode: shows what would be crawled and written
fn handle_dry_run(config: &Config) {
    println!("=== Shelf-Crawl Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Root URL: {}", config.crawler.root_url);
    println!("  Items per page: {}", config.crawler.items_per_page);
    println!("  Page path template: {}", config.crawler.page_path_template);

    println!("\nRequest Headers:");
    println!("  Accept: {}", config.http.accept);
    println!("  User-Agent: {}", config.http.user_agent);

    println!("\nOutput:");
    println!("  CSV (append): {}", config.output.csv_path);
    println!(
        "  XLSX: {} (sheet '{}')",
        config.output.xlsx_path, config.output.sheet_name
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let sinks = configured_sinks(&config.output);

    // Run the crawler
    let outcome = crawl(config).await.context("Crawl setup failed")?;

    if outcome.stats.categories_total == 0 {
        tracing::warn!("No categories discovered; nothing to export");
        return Ok(());
    }

    // Write both exports, then report
    let failed_sinks = export_records(&sinks, outcome.records.as_slice());
    print_statistics(&outcome.stats);

    if outcome.stats.has_failures() {
        tracing::warn!(
            "Crawl skipped {} categories, {} pages and {} items; see the log above",
            outcome.stats.categories_failed,
            outcome.stats.pages_failed,
            outcome.stats.items_failed
        );
    }
    if failed_sinks > 0 {
        tracing::warn!("{} of {} exports failed", failed_sinks, sinks.len());
    }

    Ok(())
}
