//! Shelf-Crawl: a catalogue crawler
//!
//! This crate walks a paginated, multi-category book catalogue served as static
//! HTML, extracts one record per item, and exports the aggregated dataset to
//! CSV and XLSX.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod output;
pub mod state;
pub mod url;

use thiserror::Error;

pub use crawler::{ExtractError, FetchError};
pub use output::ExportError;

/// Main error type for Shelf-Crawl operations
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Invalid state transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: state::CategoryState,
        to: state::CategoryState,
    },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Cannot resolve '{href}' against {base}: {message}")]
    Join {
        base: String,
        href: String,
        message: String,
    },
}

/// Result type alias for Shelf-Crawl operations
pub type Result<T> = std::result::Result<T, CrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use catalog::{Category, CrawlResult, ItemRecord};
pub use config::Config;
pub use crawler::{Coordinator, CrawlOutcome, Document, HttpFetcher, PageSource};
pub use state::CategoryState;
