/// Category state definitions for tracking crawl progress
///
/// Each category moves `Start -> ListingFetched -> PageDone(1) .. PageDone(n) -> Done`.
/// `Failed` is absorbing and reachable only before any page has been walked.
use crate::CrawlError;
use std::fmt;

/// Represents the current state of a category in the crawl process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryState {
    // ===== Active States =====
    /// Nothing fetched yet
    Start,

    /// First listing page fetched
    ListingFetched,

    /// Listing page N has been walked (its items attempted or the page skipped)
    PageDone(u32),

    // ===== Terminal States =====
    /// Every listing page has been walked
    Done,

    /// The first listing page could not be fetched or its page count read
    Failed,
}

impl CategoryState {
    /// Returns true if the category was walked to completion
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Returns true if moving from `self` to `to` is a legal edge
    pub fn can_transition(&self, to: CategoryState) -> bool {
        match (*self, to) {
            (Self::Start, Self::ListingFetched) => true,
            (Self::Start | Self::ListingFetched, Self::Failed) => true,
            (Self::ListingFetched, Self::PageDone(1)) => true,
            (Self::PageDone(done), Self::PageDone(next)) => next > done,
            (Self::PageDone(_), Self::Done) => true,
            _ => false,
        }
    }

    /// Moves to `to`, or fails with `CrawlError::InvalidTransition` and leaves the state untouched
    pub fn transition(&mut self, to: CategoryState) -> Result<(), CrawlError> {
        if !self.can_transition(to) {
            return Err(CrawlError::InvalidTransition { from: *self, to });
        }
        *self = to;
        Ok(())
    }
}

impl fmt::Display for CategoryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::ListingFetched => write!(f, "listing_fetched"),
            Self::PageDone(page) => write!(f, "page_{}_done", page),
            Self::Done => write!(f, "category_done"),
            Self::Failed => write!(f, "category_failed"),
        }
    }
}
