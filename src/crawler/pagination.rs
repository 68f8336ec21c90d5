//! Listing page count resolution

use crate::crawler::{Document, ExtractError};

/// The first `<strong>` in the results form holds the category's total item count
const TOTAL_COUNT_SELECTOR: &str = "form.form-horizontal strong";

/// Number of listing pages for a category, read from its first listing page
///
/// Returns `ceil(total / items_per_page)`, never less than 1. A missing or
/// non-numeric count is an `ExtractError` for the caller to handle.
pub fn page_count(listing_page: &Document, items_per_page: u32) -> Result<u32, ExtractError> {
    let raw = listing_page.first_text(TOTAL_COUNT_SELECTOR)?;
    let raw = raw.trim();

    let total: u32 = raw.parse().map_err(|_| ExtractError::InvalidCount {
        value: raw.to_string(),
    })?;

    Ok(pages_for(total, items_per_page))
}

/// `ceil(total / items_per_page)`, clamped to at least one page
pub fn pages_for(total: u32, items_per_page: u32) -> u32 {
    total.div_ceil(items_per_page.max(1)).max(1)
}
