//! Catalogue data model
//!
//! - `Category`: a named grouping of items with its own paginated listing
//! - `ItemRecord`: the fields extracted from one detail page
//! - `CrawlResult`: the ordered, append-only collection of records from one run

mod category;
mod item;
mod result;

pub use category::Category;
pub use item::{ItemRecord, DESCRIPTION_PLACEHOLDER, HEADER};
pub use result::CrawlResult;
