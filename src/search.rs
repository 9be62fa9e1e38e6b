//! Type-ahead search core
//!
//! Turns keystrokes into a ranked suggestion list drawn from two endpoints
//! (locations and car listings). The pieces, leaf-first:
//!
//! - [`debouncer`] delays queries until typing pauses
//! - [`dispatcher`] and [`worker`] run both endpoint calls under one
//!   cancellation token and drop superseded responses
//! - [`aggregate`] merges the two result sets into one bounded list
//! - [`machine`] is the dropdown/selection state machine
//! - [`commit`] turns a selection or free text into a navigation route
//!
//! [`SearchController`] owns the input state and wires them together.

pub mod aggregate;
pub mod commit;
pub mod debouncer;
pub mod dispatcher;
pub mod machine;
mod search_state;
pub mod source;
pub mod suggestion;
pub mod worker;

pub use commit::{CommitResolver, CommitTarget};
pub use machine::{InputState, Phase, SearchKey};
pub use search_state::SearchController;
pub use source::{HttpSearchSource, SearchSource, SourceError};
pub use suggestion::{ListingSuggestion, LocationSuggestion, Price, Suggestion};

use std::time::Duration;

/// Inputs shorter than this (in characters) never reach the network
pub const MIN_QUERY_CHARS: usize = 3;

/// Pause in typing required before a query is dispatched
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// At most this many location suggestions are shown
pub const MAX_LOCATION_SUGGESTIONS: usize = 3;

/// At most this many listing suggestions are shown
pub const MAX_LISTING_SUGGESTIONS: usize = 5;

/// Shown in place of the dropdown when both endpoints fail
pub const SUGGESTIONS_FAILED_MESSAGE: &str = "Failed to load suggestions.";

/// Whether `text` is long enough to be sent to the endpoints
pub fn is_queryable(text: &str) -> bool {
    text.chars().count() >= MIN_QUERY_CHARS
}

#[cfg(test)]
pub(crate) mod test_support;
