//! Record extraction from item detail pages

use crate::catalog::{Category, ItemRecord, DESCRIPTION_PLACEHOLDER};
use crate::crawler::document::{class_token, element_text, next_sibling_named};
use crate::crawler::{Document, ExtractError};

const TITLE_SELECTOR: &str = "h1";
const PRICE_SELECTOR: &str = "p.price_color";
const RATING_SELECTOR: &str = "p.star-rating";
const IDENTIFIER_SELECTOR: &str = "td";
const DESCRIPTION_MARKER: &str = "#product_description";

/// `£` decoded as Latin-1 shows up as `Â£`
const MISENCODED_POUND: &str = "Â£";

/// Builds the record for one detail page
///
/// Every field except the description is required: a missing element is an
/// `ExtractError`. A missing description marker yields `"----"`.
pub fn extract_record(
    detail_page: &Document,
    category: &Category,
) -> Result<ItemRecord, ExtractError> {
    let title = detail_page.first_text(TITLE_SELECTOR)?;
    let price = strip_currency(&detail_page.first_text(PRICE_SELECTOR)?);

    let rating_element = detail_page.select_first(RATING_SELECTOR)?;
    let rating = class_token(&rating_element, RATING_SELECTOR, 1)?.to_string();

    let identifier = detail_page.first_text(IDENTIFIER_SELECTOR)?;
    let description = extract_description(detail_page)?;

    Ok(ItemRecord {
        category: category.name.clone(),
        title,
        price,
        rating,
        description,
        identifier,
    })
}

/// Text of the paragraph after the description marker, or the placeholder
fn extract_description(detail_page: &Document) -> Result<String, ExtractError> {
    let marker = match detail_page.select_first(DESCRIPTION_MARKER) {
        Ok(marker) => marker,
        Err(ExtractError::NotFound { .. }) => return Ok(DESCRIPTION_PLACEHOLDER.to_string()),
        Err(e) => return Err(e),
    };

    next_sibling_named(&marker, "p")
        .map(|paragraph| element_text(&paragraph))
        .ok_or_else(|| ExtractError::NotFound {
            selector: format!("{} ~ p", DESCRIPTION_MARKER),
        })
}

/// Removes the pound sign, mis-encoded or not, leaving the bare amount
pub fn strip_currency(price: &str) -> String {
    price.replace(MISENCODED_POUND, "").replace('£', "")
}
