//! Commit resolution
//!
//! Turns the chosen suggestion, or the typed text, into a [`Route`]. A
//! listing opens its detail page. A place becomes a free-text listing search
//! for "city, region, country". Free text is trimmed; nothing to search for
//! means no navigation at all.

use chrono::Utc;

use super::suggestion::Suggestion;
use crate::navigation::Route;

/// What the user committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitTarget {
    Suggestion(Suggestion),
    Text(String),
}

#[derive(Debug, Default)]
pub struct CommitResolver {
    last_freshness: i64,
}

impl CommitResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `target`, stamping searches with the current time
    pub fn resolve(&mut self, target: CommitTarget) -> Option<Route> {
        self.resolve_at(target, Utc::now().timestamp_millis())
    }

    /// Resolve `target` with an explicit clock (milliseconds since epoch)
    pub fn resolve_at(&mut self, target: CommitTarget, now_millis: i64) -> Option<Route> {
        match target {
            CommitTarget::Suggestion(Suggestion::Listing(listing)) => {
                Some(Route::Listing { id: listing.id })
            }
            CommitTarget::Suggestion(Suggestion::Location(location)) => {
                self.search_route(&location.search_text(), now_millis)
            }
            CommitTarget::Text(text) => self.search_route(&text, now_millis),
        }
    }

    fn search_route(&mut self, text: &str, now_millis: i64) -> Option<Route> {
        let search = text.trim();
        if search.is_empty() {
            log::debug!("Nothing to search for, skipping navigation");
            return None;
        }

        Some(Route::ListingSearch {
            search: search.to_string(),
            freshness: self.next_freshness(now_millis),
        })
    }

    // Clock readings can repeat (or step back); the marker must not
    fn next_freshness(&mut self, now_millis: i64) -> i64 {
        let freshness = now_millis.max(self.last_freshness.saturating_add(1));
        self.last_freshness = freshness;
        freshness
    }
}

#[cfg(test)]
#[path = "commit_tests.rs"]
mod commit_tests;
