//! Search Worker Thread
//!
//! Receives search requests via channel, queries both endpoints
//! concurrently with cancellation support, merges the results and sends
//! one response back per request.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use futures::future;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::types::{SearchRequest, SearchResponse, WORKER_ERROR_REQUEST_ID};
use crate::search::SUGGESTIONS_FAILED_MESSAGE;
use crate::search::aggregate::aggregate;
use crate::search::source::{SearchSource, SourceError};

/// Spawn the search worker thread
///
/// Creates a background thread with a tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Queries both endpoints of `source` concurrently, racing the cancel token
/// 3. Sends one response per request back via the response channel
///
/// The thread exits once the request channel closes.
pub fn spawn_worker<S>(
    source: S,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> JoinHandle<()>
where
    S: SearchSource + Send + 'static,
{
    std::thread::spawn(move || {
        // The default panic hook prints to stderr, which corrupts the TUI
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = panic_message(panic_info.payload());

            log::error!(
                "Search worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = response_tx_clone.send(SearchResponse::Failed {
                message: format!("Search worker crashed: {}", panic_msg),
                query: String::new(),
                request_id: WORKER_ERROR_REQUEST_ID,
            });
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("Failed to create search worker runtime: {}", e);
                    let _ = response_tx.send(SearchResponse::Failed {
                        message: format!("Search worker failed to start: {}", e),
                        query: String::new(),
                        request_id: WORKER_ERROR_REQUEST_ID,
                    });
                    return;
                }
            };

            rt.block_on(worker_loop(source, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            log::error!("Search worker thread panicked: {}", panic_message(&*e));
        }
    })
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in search worker".to_string()
    }
}

/// Process requests until the channel closes
///
/// Blocking `recv()` is fine in this dedicated thread. Requests are handled
/// one at a time; a superseded request has already been cancelled by the UI
/// thread, so it returns as soon as it is polled.
async fn worker_loop<S: SearchSource>(
    source: S,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Search worker thread started");

    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&source, request).await;
        if response_tx.send(response).is_err() {
            log::debug!("Response channel closed, stopping search worker");
            break;
        }
    }

    log::debug!("Search worker thread shutting down");
}

/// Run one request against both endpoints
///
/// Both calls run concurrently and settle independently: a failure on one
/// side leaves the other side's results intact.
pub(crate) async fn handle_request<S: SearchSource>(
    source: &S,
    request: SearchRequest,
) -> SearchResponse {
    let SearchRequest {
        query,
        request_id,
        cancel_token,
    } = request;

    if cancel_token.is_cancelled() {
        return SearchResponse::Cancelled { request_id };
    }

    log::debug!("Search request {} started for {:?}", request_id, query);

    let (locations, listings) = future::join(
        race_cancel(&cancel_token, source.search_locations(&query)),
        race_cancel(&cancel_token, source.search_listings(&query)),
    )
    .await;

    if cancel_token.is_cancelled() {
        log::debug!("Search request {} cancelled", request_id);
        return SearchResponse::Cancelled { request_id };
    }

    settle(query, request_id, locations, listings)
}

async fn race_cancel<F>(cancel_token: &CancellationToken, call: F) -> Result<Value, SourceError>
where
    F: Future<Output = Result<Value, SourceError>>,
{
    tokio::select! {
        biased;

        _ = cancel_token.cancelled() => Err(SourceError::Cancelled),
        result = call => result,
    }
}

fn settle(
    query: String,
    request_id: u64,
    locations: Result<Value, SourceError>,
    listings: Result<Value, SourceError>,
) -> SearchResponse {
    if locations.as_ref().is_err_and(SourceError::is_cancelled)
        || listings.as_ref().is_err_and(SourceError::is_cancelled)
    {
        return SearchResponse::Cancelled { request_id };
    }

    match (locations, listings) {
        (Err(locations_err), Err(listings_err)) => {
            log::warn!(
                "Search request {} failed on both endpoints: {}; {}",
                request_id,
                locations_err,
                listings_err
            );
            SearchResponse::Failed {
                message: SUGGESTIONS_FAILED_MESSAGE.to_string(),
                query,
                request_id,
            }
        }
        (locations, listings) => {
            let locations = locations.unwrap_or_else(degrade);
            let listings = listings.unwrap_or_else(degrade);
            let suggestions = aggregate(&locations, &listings);

            log::debug!(
                "Search request {} produced {} suggestions",
                request_id,
                suggestions.len()
            );

            SearchResponse::Suggestions {
                suggestions,
                query,
                request_id,
            }
        }
    }
}

fn degrade(err: SourceError) -> Value {
    log::warn!("Partial search failure, continuing without it: {}", err);
    Value::Null
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
