//! Category discovery from the catalogue root

use scraper::ElementRef;
use url::Url;

use crate::catalog::Category;
use crate::crawler::document::{element_text, require_attr, select_all_in};
use crate::crawler::{Document, ExtractError, PageSource};
use crate::url::resolve_link;

/// Sidebar navigation holding one link per category
const NAV_SELECTOR: &str = "ul.nav-list";

/// Fetches the root page and returns its categories in navigation order
///
/// A fetch or parse failure is logged and yields an empty list; with no
/// categories the crawl has nothing to do.
pub async fn list_categories<S: PageSource + ?Sized>(
    source: &S,
    root_url: &Url,
) -> Vec<Category> {
    let document = match source.fetch(root_url).await {
        Ok(document) => document,
        Err(e) => {
            tracing::error!(url = %root_url, "Error loading categories: {}", e);
            return Vec::new();
        }
    };

    match parse_categories(&document, root_url) {
        Ok(categories) => {
            tracing::info!("Discovered {} categories", categories.len());
            categories
        }
        Err(e) => {
            tracing::error!(url = %root_url, "Error reading category navigation: {}", e);
            Vec::new()
        }
    }
}

/// Reads the category links out of a root page
///
/// The first navigation link is the catch-all "Books" entry and is skipped.
/// Names are trimmed; hrefs are resolved against `root_url`. An entry whose
/// href is missing or unresolvable is logged and left out.
pub fn parse_categories(
    document: &Document,
    root_url: &Url,
) -> Result<Vec<Category>, ExtractError> {
    let nav = document.select_first(NAV_SELECTOR)?;
    let links = select_all_in(&nav, "a")?;

    let mut categories = Vec::with_capacity(links.len().saturating_sub(1));
    for link in links.iter().skip(1) {
        let name = element_text(link).trim().to_string();
        match category_url(link, root_url) {
            Ok(listing_url) => categories.push(Category::new(name, listing_url)),
            Err(e) => tracing::warn!(category = %name, "Skipping category {}: {}", name, e),
        }
    }

    Ok(categories)
}

fn category_url(link: &ElementRef<'_>, root_url: &Url) -> Result<Url, ExtractError> {
    let href = require_attr(link, "ul.nav-list a", "href")?;
    Ok(resolve_link(root_url, href)?)
}
