//! Crawler coordinator - main crawl orchestration logic
//!
//! Walks every category in discovery order, every listing page within it, and
//! every item on each page. Failures are isolated at three levels:
//!
//! | Failure | Effect |
//! |---------|--------|
//! | Item link, detail page fetch or extraction | That item is skipped |
//! | Listing page 2..N fetch or link extraction | That page is skipped, later pages still run |
//! | First listing page fetch or page count | The whole category contributes nothing |
//!
//! Nothing is retried and no failure aborts sibling work.

use url::Url;

use crate::catalog::{Category, CrawlResult, ItemRecord};
use crate::config::Config;
use crate::crawler::{detail, list_categories, listing, pagination, ItemLink, PageSource};
use crate::output::CrawlStats;
use crate::state::CategoryState;
use crate::url::{page_url, parse_root};
use crate::CrawlError;

/// Records and counters from one crawl
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    pub records: CrawlResult,
    pub stats: CrawlStats,
}

/// Main crawler coordinator structure
pub struct Coordinator<S> {
    config: Config,
    root_url: Url,
    source: S,
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    /// * `source` - Where pages come from (live HTTP or in-memory fixtures)
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The configured root URL is not a valid http(s) URL
    pub fn new(config: Config, source: S) -> Result<Self, CrawlError> {
        let root_url = parse_root(&config.crawler.root_url)?;
        Ok(Self {
            config,
            root_url,
            source,
        })
    }

    /// Discovers categories, then crawls all of them
    pub async fn run(&self) -> CrawlOutcome {
        tracing::info!("Starting crawl from {}", self.root_url);
        let start_time = std::time::Instant::now();

        let categories = self.discover_categories().await;
        let outcome = self.crawl_categories(&categories).await;

        tracing::info!(
            "Crawl finished: {} records from {} categories in {:.1}s",
            outcome.records.len(),
            categories.len(),
            start_time.elapsed().as_secs_f64()
        );
        outcome
    }

    /// Reads the category list from the root page; empty on failure
    pub async fn discover_categories(&self) -> Vec<Category> {
        list_categories(&self.source, &self.root_url).await
    }

    /// Crawls the given categories in order and concatenates their records
    pub async fn crawl_categories(&self, categories: &[Category]) -> CrawlOutcome {
        let mut outcome = CrawlOutcome::default();
        outcome.stats.categories_total = categories.len();

        for (index, category) in categories.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Crawling category {}",
                index + 1,
                categories.len(),
                category.name
            );
            let records = self.crawl_category(category, &mut outcome.stats).await;
            outcome.records.extend(records);
        }

        outcome.stats.records = outcome.records.len();
        outcome
    }

    /// Crawls one category, absorbing any category-level failure
    async fn crawl_category(
        &self,
        category: &Category,
        stats: &mut CrawlStats,
    ) -> Vec<ItemRecord> {
        let mut state = CategoryState::Start;

        let records = match self.walk_category(category, &mut state, stats).await {
            Ok(records) => {
                if let Err(e) = state.transition(CategoryState::Done) {
                    tracing::error!(category = %category.name, "{}", e);
                }
                records
            }
            Err(e) => {
                tracing::error!(
                    category = %category.name,
                    url = %category.listing_url,
                    "Error loading category {}: {}",
                    category.name,
                    e
                );
                if let Err(e) = state.transition(CategoryState::Failed) {
                    tracing::error!(category = %category.name, "{}", e);
                }
                stats.categories_failed += 1;
                Vec::new()
            }
        };

        if state.is_success() {
            tracing::info!(
                category = %category.name,
                "{} with {} records",
                state,
                records.len()
            );
        } else {
            tracing::warn!(category = %category.name, "Category ended in {}", state);
        }
        records
    }

    /// Walks every listing page of a category
    ///
    /// Errors returned here fail the whole category; page and item failures are
    /// handled inside.
    async fn walk_category(
        &self,
        category: &Category,
        state: &mut CategoryState,
        stats: &mut CrawlStats,
    ) -> Result<Vec<ItemRecord>, CrawlError> {
        let (pages, first_page_links) = {
            let listing_page = self.source.fetch(&category.listing_url).await?;
            state.transition(CategoryState::ListingFetched)?;

            let pages =
                pagination::page_count(&listing_page, self.config.crawler.items_per_page)?;
            (pages, listing::extract_item_links(&listing_page, category))
        };

        tracing::debug!(category = %category.name, "{} listing pages", pages);
        stats.pages_total += pages as usize;

        let mut records = Vec::new();
        match first_page_links {
            Ok(links) => records.extend(self.crawl_items(category, 1, &links, stats).await),
            Err(e) => {
                tracing::warn!(
                    category = %category.name,
                    page = 1,
                    "Error reading items on page 1 of category {}: {}",
                    category.name,
                    e
                );
                stats.pages_failed += 1;
            }
        }
        state.transition(CategoryState::PageDone(1))?;

        for page in 2..=pages {
            records.extend(self.crawl_page(category, page, stats).await);
            state.transition(CategoryState::PageDone(page))?;
        }

        Ok(records)
    }

    /// Fetches listing page `page` (2 or later) and crawls its items
    async fn crawl_page(
        &self,
        category: &Category,
        page: u32,
        stats: &mut CrawlStats,
    ) -> Vec<ItemRecord> {
        match self.page_links(category, page).await {
            Ok(links) => self.crawl_items(category, page, &links, stats).await,
            Err(e) => {
                tracing::warn!(
                    category = %category.name,
                    page,
                    "Error loading page {} of category {}: {}",
                    page,
                    category.name,
                    e
                );
                stats.pages_failed += 1;
                Vec::new()
            }
        }
    }

    async fn page_links(
        &self,
        category: &Category,
        page: u32,
    ) -> Result<Vec<ItemLink>, CrawlError> {
        let url = page_url(
            &category.listing_url,
            &self.config.crawler.page_path_template,
            page,
        )?;
        let listing_page = self.source.fetch(&url).await?;
        Ok(listing::extract_item_links(&listing_page, category)?)
    }

    /// Fetches and extracts each item, skipping the ones that fail
    async fn crawl_items(
        &self,
        category: &Category,
        page: u32,
        links: &[ItemLink],
        stats: &mut CrawlStats,
    ) -> Vec<ItemRecord> {
        let mut records = Vec::with_capacity(links.len());

        for link in links {
            stats.items_total += 1;
            let link = match link {
                Ok(link) => link,
                Err(e) => {
                    tracing::warn!(
                        category = %category.name,
                        page,
                        "Skipping item on page {} of category {}: {}",
                        page,
                        category.name,
                        e
                    );
                    stats.items_failed += 1;
                    continue;
                }
            };

            match self.fetch_item(link, category).await {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        category = %category.name,
                        page,
                        url = %link,
                        "Error loading book page {}: {}",
                        link,
                        e
                    );
                    stats.items_failed += 1;
                }
            }
        }

        tracing::debug!(
            category = %category.name,
            page,
            "{} of {} items extracted",
            records.len(),
            links.len()
        );
        records
    }

    async fn fetch_item(&self, url: &Url, category: &Category) -> Result<ItemRecord, CrawlError> {
        let detail_page = self.source.fetch(url).await?;
        Ok(detail::extract_record(&detail_page, category)?)
    }
}
