//! Crawl statistics
//!
//! Counters accumulated by the coordinator while it walks the catalogue.

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Categories discovered on the root page
    pub categories_total: usize,

    /// Categories whose first listing page or page count failed
    pub categories_failed: usize,

    /// Listing pages the categories reported
    pub pages_total: usize,

    /// Listing pages skipped after a fetch or extraction failure
    pub pages_failed: usize,

    /// Detail pages attempted
    pub items_total: usize,

    /// Detail pages skipped after a fetch or extraction failure
    pub items_failed: usize,

    /// Records in the final result
    pub records: usize,
}

impl CrawlStats {
    /// Returns the share of attempted items that produced a record, as a percentage
    pub fn item_success_rate(&self) -> f64 {
        if self.items_total == 0 {
            return 0.0;
        }
        ((self.items_total - self.items_failed) as f64 / self.items_total as f64) * 100.0
    }

    /// Returns true if anything at all failed
    pub fn has_failures(&self) -> bool {
        self.categories_failed > 0 || self.pages_failed > 0 || self.items_failed > 0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStats) {
    println!("=== Crawl Statistics ===\n");

    println!(
        "Categories: {} ({} failed)",
        stats.categories_total, stats.categories_failed
    );
    println!(
        "Listing pages: {} ({} failed)",
        stats.pages_total, stats.pages_failed
    );
    println!("Items: {} ({} failed)", stats.items_total, stats.items_failed);
    println!();

    println!(
        "Success Rate: {:.1}% ({} records)",
        stats.item_success_rate(),
        stats.records
    );
}
