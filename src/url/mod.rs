//! URL handling module for Shelf-Crawl
//!
//! The catalogue links everything with relative hrefs, so every link is
//! resolved against a known base before it is fetched.

mod resolve;

pub use resolve::{page_url, parse_root, resolve_link};
