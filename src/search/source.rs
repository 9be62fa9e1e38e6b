//! Search endpoint abstraction
//!
//! A [`SearchSource`] answers the two text queries the dropdown needs. Each
//! call returns the raw JSON payload; shaping it into suggestions is the
//! aggregator's job, so a source never has to understand the record layout.

use std::fmt;
use std::future::Future;

use serde_json::Value;
use thiserror::Error;

mod http;

pub use http::HttpSearchSource;

/// Which endpoint a call went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Locations,
    Listings,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Locations => f.write_str("locations"),
            SourceKind::Listings => f.write_str("listings"),
        }
    }
}

/// Errors from a single endpoint call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Transport-level failure (connect, DNS, reset, body read)
    #[error("[{endpoint}] Network error: {message}")]
    Network {
        endpoint: SourceKind,
        message: String,
    },

    /// The call was abandoned because a newer query superseded it
    #[error("Request cancelled")]
    Cancelled,
}

impl SourceError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SourceError::Cancelled)
    }
}

/// The two read-only query endpoints behind the dropdown
///
/// Implementations should resolve non-success HTTP statuses and undecodable
/// bodies to an empty payload; only transport failures are errors.
pub trait SearchSource {
    fn search_locations(&self, query: &str) -> impl Future<Output = Result<Value, SourceError>>;

    fn search_listings(&self, query: &str) -> impl Future<Output = Result<Value, SourceError>>;
}
