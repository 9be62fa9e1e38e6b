//! Search Worker Types
//!
//! Messages exchanged between the UI thread and the search worker.

use tokio_util::sync::CancellationToken;

use crate::search::suggestion::Suggestion;

/// Generation id reserved for worker-level failures not tied to a request
pub const WORKER_ERROR_REQUEST_ID: u64 = 0;

/// Request to query both endpoints for `query`
#[derive(Debug)]
pub struct SearchRequest {
    pub query: String,
    /// Generation id, used to drop responses from superseded requests
    pub request_id: u64,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

/// Outcome of one request
#[derive(Debug)]
pub enum SearchResponse {
    /// At least one endpoint answered; already merged and truncated
    Suggestions {
        suggestions: Vec<Suggestion>,
        query: String,
        request_id: u64,
    },
    /// Both endpoints failed, or the worker itself failed
    /// (`request_id == WORKER_ERROR_REQUEST_ID`)
    Failed {
        message: String,
        query: String,
        request_id: u64,
    },
    /// The request was cancelled before it finished
    Cancelled { request_id: u64 },
}

impl SearchResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            SearchResponse::Suggestions { request_id, .. }
            | SearchResponse::Failed { request_id, .. }
            | SearchResponse::Cancelled { request_id } => *request_id,
        }
    }
}
