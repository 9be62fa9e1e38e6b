//! Navigation targets produced by committing a search
//!
//! The search core never routes anywhere itself; it hands a [`Route`] to a
//! [`Navigator`]. The terminal front-end records routes in a
//! [`RouteHistory`] and reports them.

use std::fmt;

use serde::Serialize;

/// Where a commit sends the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Detail page of one listing
    Listing { id: i64 },
    /// Listing search results filtered by free text
    ListingSearch {
        search: String,
        /// Strictly increasing marker so repeating a search is never a no-op
        freshness: i64,
    },
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Listing { id } => write!(f, "/ads/{}", id),
            Route::ListingSearch { search, freshness } => {
                write!(f, "/ads?search={}&ts={}", search, freshness)
            }
        }
    }
}

/// Receives routes from the search core
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Navigator that just remembers where it was sent
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    routes: Vec<Route>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn last(&self) -> Option<&Route> {
        self.routes.last()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Navigator for RouteHistory {
    fn navigate(&mut self, route: Route) {
        log::debug!("Navigating to {}", route);
        self.routes.push(route);
    }
}

#[cfg(test)]
#[path = "navigation_tests.rs"]
mod navigation_tests;
