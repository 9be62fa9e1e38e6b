//! typeahead library - type-ahead search over places and car listings
//!
//! The search core lives in [`search`]; the rest is the terminal front-end.
//! Exposed as a library for testing purposes.

pub mod app;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod help;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod notification;
pub mod search;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use navigation::{Navigator, Route, RouteHistory};
pub use search::{HttpSearchSource, SearchController, SearchSource};
