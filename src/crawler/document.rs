//! Typed access to parsed HTML documents
//!
//! Extractors never touch `scraper` directly; they go through `Document` and
//! the element helpers below, which turn a missing element into an explicit
//! `ExtractError::NotFound` rather than an empty string.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

use crate::UrlError;

/// Errors raised when an expected structure is absent from a fetched page
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("No element matches '{selector}'")]
    NotFound { selector: String },

    #[error("Element '{selector}' has no '{attribute}' attribute")]
    MissingAttribute { selector: String, attribute: String },

    #[error("Element '{selector}' has no class token at index {index}")]
    MissingClassToken { selector: String, index: usize },

    #[error("Expected an item count, found '{value}'")]
    InvalidCount { value: String },

    #[error("Unresolvable link: {0}")]
    Link(#[from] UrlError),
}

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the first element matching `css`, or `NotFound`
    pub fn select_first(&self, css: &str) -> Result<ElementRef<'_>, ExtractError> {
        let selector = parse_selector(css)?;
        self.html
            .select(&selector)
            .next()
            .ok_or_else(|| not_found(css))
    }

    /// Returns every element matching `css` in document order
    pub fn select_all(&self, css: &str) -> Result<Vec<ElementRef<'_>>, ExtractError> {
        let selector = parse_selector(css)?;
        Ok(self.html.select(&selector).collect())
    }

    /// Text content of the first element matching `css`, untrimmed
    pub fn first_text(&self, css: &str) -> Result<String, ExtractError> {
        self.select_first(css).map(|element| element_text(&element))
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

/// First descendant of `scope` matching `css`
pub fn select_in<'a>(scope: &ElementRef<'a>, css: &str) -> Result<ElementRef<'a>, ExtractError> {
    let selector = parse_selector(css)?;
    scope.select(&selector).next().ok_or_else(|| not_found(css))
}

/// Every descendant of `scope` matching `css` in document order
pub fn select_all_in<'a>(
    scope: &ElementRef<'a>,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let selector = parse_selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// Concatenated text nodes beneath `element`
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

/// Attribute value, or `MissingAttribute` naming the selector that found the element
pub fn require_attr<'a>(
    element: &ElementRef<'a>,
    selector: &str,
    attribute: &str,
) -> Result<&'a str, ExtractError> {
    element
        .value()
        .attr(attribute)
        .ok_or_else(|| ExtractError::MissingAttribute {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        })
}

/// The `index`-th whitespace-separated token of the `class` attribute, in source order
pub fn class_token<'a>(
    element: &ElementRef<'a>,
    selector: &str,
    index: usize,
) -> Result<&'a str, ExtractError> {
    element
        .value()
        .attr("class")
        .and_then(|classes| classes.split_whitespace().nth(index))
        .ok_or_else(|| ExtractError::MissingClassToken {
            selector: selector.to_string(),
            index,
        })
}

/// The next sibling element after `element` with the given tag name
pub fn next_sibling_named<'a>(element: &ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag)
}

fn parse_selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

fn not_found(css: &str) -> ExtractError {
    ExtractError::NotFound {
        selector: css.to_string(),
    }
}
