//! Item link extraction from listing pages

use scraper::ElementRef;
use url::Url;

use crate::catalog::Category;
use crate::crawler::document::{require_attr, select_in};
use crate::crawler::{Document, ExtractError};
use crate::url::resolve_link;

/// One summary block per item on a listing page
const ITEM_SELECTOR: &str = "article.product_pod";

/// Detail-page URL of one summary block, or why it could not be read
pub type ItemLink = Result<Url, ExtractError>;

/// Detail-page links for every item on a listing page, in page order
///
/// Each block is resolved on its own: a block with no link, no `href`, or an
/// href that does not resolve to an http(s) URL yields an `Err` entry in its
/// position and leaves its siblings untouched.
///
/// Links are resolved against the category's first listing URL rather than the
/// page's own URL; later pages sit alongside it, so the relative hrefs resolve
/// identically.
pub fn extract_item_links(
    listing_page: &Document,
    category: &Category,
) -> Result<Vec<ItemLink>, ExtractError> {
    let items = listing_page.select_all(ITEM_SELECTOR)?;
    Ok(items
        .iter()
        .map(|item| item_link(item, &category.listing_url))
        .collect())
}

fn item_link(item: &ElementRef<'_>, base: &Url) -> ItemLink {
    let link = select_in(item, "a")?;
    let href = require_attr(&link, "article.product_pod a", "href")?;
    Ok(resolve_link(base, href)?)
}
