//! Crawler module for catalogue fetching and extraction
//!
//! This module contains the core crawling logic, including:
//! - Page fetching behind the `PageSource` seam
//! - Category discovery from the root navigation
//! - Listing page count and item link extraction
//! - Detail page record extraction
//! - Overall crawl coordination with per-item, per-page, and per-category failure isolation

mod categories;
mod coordinator;
pub mod document;
mod detail;
mod fetcher;
mod listing;
mod pagination;

pub use categories::{list_categories, parse_categories};
pub use coordinator::{Coordinator, CrawlOutcome};
pub use detail::{extract_record, strip_currency};
pub use document::{Document, ExtractError};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageSource, StaticPages};
pub use listing::{extract_item_links, ItemLink};
pub use pagination::{page_count, pages_for};

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl over live HTTP
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client from the configured headers
/// 2. Discover categories from the root page
/// 3. Walk every listing page of every category
/// 4. Fetch and extract every item
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlOutcome)` - Records and statistics; individual failures are logged and counted
/// * `Err(CrawlError)` - The client or root URL could not be set up
pub async fn crawl(config: Config) -> Result<CrawlOutcome, CrawlError> {
    let fetcher = HttpFetcher::new(&config.http)?;
    let coordinator = Coordinator::new(config, fetcher)?;
    Ok(coordinator.run().await)
}
