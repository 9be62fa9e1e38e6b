//! Errors raised while building the search backend

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TypeaheadError {
    #[error("Invalid API base URL {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}
