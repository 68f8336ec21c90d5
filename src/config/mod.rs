//! Configuration module for Shelf-Crawl
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; anything left out falls back to the built-in catalogue
//! defaults, so running without a file crawls the public books catalogue.
//!
//! # Example
//!
//! ```no_run
//! use shelf_crawl::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("shelf.toml")).unwrap();
//! println!("Crawling from: {}", config.crawler.root_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, HttpConfig, OutputConfig, DEFAULT_ACCEPT, DEFAULT_ITEMS_PER_PAGE,
    DEFAULT_ROOT_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config};
pub use validation::validate;
