//! Page fetching
//!
//! This module handles every page request the crawler makes:
//! - Building the HTTP client with the configured browser headers
//! - Issuing a single GET per URL, with no retries
//! - Classifying failures (non-2xx status vs. network error)
//!
//! Fetching sits behind the `PageSource` trait so the extractors and the
//! coordinator can run against in-memory pages as well as live HTTP.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::HttpConfig;
use crate::crawler::Document;
use crate::{ConfigError, CrawlError};

/// Errors raised while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("No page available for {url}")]
    Missing { url: String },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Network { url, .. } | Self::Missing { url } => url,
        }
    }
}

/// Anything that can turn a URL into a parsed document
///
/// Implementations perform at most one attempt per call.
#[async_trait(?Send)]
pub trait PageSource {
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError>;
}

/// Builds an HTTP client sending the configured Accept and User-Agent headers
///
/// # Arguments
///
/// * `config` - The outbound header configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(CrawlError)` - A header value was not valid, or the client failed to build
pub fn build_http_client(config: &HttpConfig) -> Result<Client, CrawlError> {
    let accept = HeaderValue::from_str(&config.accept)
        .map_err(|e| ConfigError::Validation(format!("Invalid accept header: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, accept);

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()
        .map_err(|e| ConfigError::Validation(format!("Failed to build HTTP client: {}", e)))?;

    Ok(client)
}

/// Live HTTP page source
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &HttpConfig) -> Result<Self, CrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }
}

#[async_trait(?Send)]
impl PageSource for HttpFetcher {
    /// Issues one GET and parses the body
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | Parsed document |
    /// | Any other status | `FetchError::Status` |
    /// | Connect / timeout / body read failure | `FetchError::Network` |
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

        Ok(Document::parse(&body))
    }
}

/// In-memory page source keyed by absolute URL
///
/// Unknown URLs fail with `FetchError::Missing`, standing in for a 404.
#[derive(Debug, Clone, Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `html` as the body served for `url`
    pub fn insert(&mut self, url: impl Into<String>, html: impl Into<String>) {
        self.pages.insert(url.into(), html.into());
    }

    /// Builder-style `insert`
    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.insert(url, html);
        self
    }
}

#[async_trait(?Send)]
impl PageSource for StaticPages {
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        self.pages
            .get(url.as_str())
            .map(|html| Document::parse(html))
            .ok_or_else(|| FetchError::Missing {
                url: url.to_string(),
            })
    }
}
