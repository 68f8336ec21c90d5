//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `CategoryState`: tracks one category's walk from its first listing page to
//!   completion or failure

mod category_state;

pub use category_state::CategoryState;
