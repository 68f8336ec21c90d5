/// Column headers shared by every export, in row field order
pub const HEADER: [&str; 6] = ["Category", "Title", "Price,£", "Rating", "Description", "UPC"];

/// Substituted when a detail page carries no description block
pub const DESCRIPTION_PLACEHOLDER: &str = "----";

/// One extracted catalogue item
///
/// Created once per successfully parsed detail page and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    /// Name of the category being crawled when this record was made
    pub category: String,
    pub title: String,
    /// Price text with the currency symbol removed
    pub price: String,
    /// Star rating as the site's class word, e.g. "Three"
    pub rating: String,
    pub description: String,
    /// Product code (UPC)
    pub identifier: String,
}

impl ItemRecord {
    /// Fields in export order, matching `HEADER`
    pub fn to_row(&self) -> [&str; 6] {
        [
            self.category.as_str(),
            self.title.as_str(),
            self.price.as_str(),
            self.rating.as_str(),
            self.description.as_str(),
            self.identifier.as_str(),
        ]
    }
}
