//! Cancellable query dispatch
//!
//! UI-thread half of the search worker. Owns the generation counter and the
//! cancellation token of the one session that may be in flight, and filters
//! worker responses so only the newest session ever reaches the state
//! machine.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::time::Instant;

use tokio_util::sync::CancellationToken;

use super::SUGGESTIONS_FAILED_MESSAGE;
use super::source::SearchSource;
use super::suggestion::Suggestion;
use super::worker::types::WORKER_ERROR_REQUEST_ID;
use super::worker::{SearchRequest, SearchResponse, spawn_worker};

/// One dispatched query: the text, its generation and its cancel handle
#[derive(Debug)]
pub struct QuerySession {
    pub query: String,
    pub request_id: u64,
    pub started_at: Instant,
    cancel_token: CancellationToken,
}

/// A response that belongs to the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Suggestions {
        query: String,
        suggestions: Vec<Suggestion>,
    },
    Failed {
        query: String,
        message: String,
    },
}

pub struct QueryDispatcher {
    request_tx: Option<Sender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
    next_request_id: u64,
    session: Option<QuerySession>,
}

impl QueryDispatcher {
    /// Start a worker thread for `source` and connect to it
    pub fn spawn<S>(source: S) -> Self
    where
        S: SearchSource + Send + 'static,
    {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        spawn_worker(source, request_rx, response_tx);
        Self::with_channels(request_tx, response_rx)
    }

    /// Connect to an already running worker
    pub fn with_channels(
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) -> Self {
        Self {
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1, // Reserve 0 for worker errors
            session: None,
        }
    }

    /// Start a new session for `query`
    ///
    /// Any session still in flight is cancelled first. Returns false when the
    /// worker is gone; the caller should treat that as a failed query.
    pub fn dispatch(&mut self, query: &str) -> bool {
        self.dispatch_at(query, Instant::now())
    }

    pub fn dispatch_at(&mut self, query: &str, now: Instant) -> bool {
        self.cancel_in_flight();

        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);
        if self.next_request_id == WORKER_ERROR_REQUEST_ID {
            self.next_request_id = 1;
        }

        let Some(request_tx) = &self.request_tx else {
            log::error!("Search worker unavailable, dropping query {:?}", query);
            return false;
        };

        let cancel_token = CancellationToken::new();
        let request = SearchRequest {
            query: query.to_string(),
            request_id,
            cancel_token: cancel_token.clone(),
        };

        if request_tx.send(request).is_err() {
            log::error!("Search worker disconnected - send failed");
            self.request_tx = None;
            return false;
        }

        log::debug!("Dispatched search request {} for {:?}", request_id, query);
        self.session = Some(QuerySession {
            query: query.to_string(),
            request_id,
            started_at: now,
            cancel_token,
        });
        true
    }

    /// Cancel the in-flight session, if any
    ///
    /// Its response, should one still arrive, is dropped by [`poll`](Self::poll).
    pub fn cancel_in_flight(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                session.cancel_token.cancel();
                log::debug!("Cancelled search request {}", session.request_id);
                true
            }
            None => false,
        }
    }

    /// Drain worker responses (non-blocking)
    ///
    /// Returns the outcome of the current session once it settles. Stale and
    /// cancelled responses are swallowed.
    pub fn poll(&mut self) -> Option<QueryOutcome> {
        let rx = self.response_rx.take()?;
        let mut outcome = None;

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if let Some(accepted) = self.accept(response) {
                        outcome = Some(accepted);
                    }
                }
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected in poll");
                    self.request_tx = None;
                    if let Some(session) = self.session.take() {
                        outcome = Some(QueryOutcome::Failed {
                            query: session.query,
                            message: SUGGESTIONS_FAILED_MESSAGE.to_string(),
                        });
                    }
                    break;
                }
            }
        }

        outcome
    }

    fn accept(&mut self, response: SearchResponse) -> Option<QueryOutcome> {
        let current_request_id = self.session.as_ref().map(|s| s.request_id);

        match response {
            SearchResponse::Cancelled { request_id } => {
                log::debug!("Search request {} acknowledged cancel", request_id);
                None
            }
            // Worker-level errors apply to whatever is in flight
            SearchResponse::Failed {
                message,
                request_id: WORKER_ERROR_REQUEST_ID,
                ..
            } => {
                log::error!("Search worker error: {}", message);
                let session = self.session.take()?;
                Some(QueryOutcome::Failed {
                    query: session.query,
                    message: SUGGESTIONS_FAILED_MESSAGE.to_string(),
                })
            }
            response if Some(response.request_id()) != current_request_id => {
                log::debug!(
                    "Ignoring stale search response {} (current: {:?})",
                    response.request_id(),
                    current_request_id
                );
                None
            }
            SearchResponse::Suggestions {
                suggestions, query, ..
            } => {
                self.finish_session();
                Some(QueryOutcome::Suggestions { query, suggestions })
            }
            SearchResponse::Failed { message, query, .. } => {
                self.finish_session();
                Some(QueryOutcome::Failed { query, message })
            }
        }
    }

    fn finish_session(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!(
                "Search request {} settled in {:?}",
                session.request_id,
                session.started_at.elapsed()
            );
        }
    }

    /// Cancel everything and disconnect; the worker thread exits once it
    /// sees the closed channel
    pub fn shutdown(&mut self) {
        self.cancel_in_flight();
        self.request_tx = None;
        self.response_rx = None;
    }

    pub fn session(&self) -> Option<&QuerySession> {
        self.session.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_connected(&self) -> bool {
        self.request_tx.is_some()
    }
}

impl Drop for QueryDispatcher {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;
