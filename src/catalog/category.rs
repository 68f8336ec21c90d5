use std::fmt;
use url::Url;

/// A catalogue category discovered from the root page's navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display name, trimmed of surrounding whitespace
    pub name: String,

    /// Absolute URL of the category's first listing page
    pub listing_url: Url,
}

impl Category {
    pub fn new(name: impl Into<String>, listing_url: Url) -> Self {
        Self {
            name: name.into(),
            listing_url,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.listing_url)
    }
}
