//! Search Worker Module
//!
//! Runs the endpoint calls on a background thread so the UI loop never
//! blocks on the network.
//!
//! ## Architecture
//!
//! - Single background thread with std::sync::mpsc channels
//! - A current-thread tokio runtime drives both endpoint calls concurrently
//! - Every request carries a generation id and a cancellation token; a
//!   cancelled request answers `Cancelled` and never produces suggestions
//! - Panic hook to prevent TUI corruption
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::mpsc::channel;
//! use typeahead::search::worker::{spawn_worker, SearchRequest, SearchResponse};
//! use tokio_util::sync::CancellationToken;
//!
//! let (request_tx, request_rx) = channel();
//! let (response_tx, response_rx) = channel();
//! spawn_worker(source, request_rx, response_tx);
//!
//! request_tx.send(SearchRequest {
//!     query: "bmw".to_string(),
//!     request_id: 1,
//!     cancel_token: CancellationToken::new(),
//! }).unwrap();
//!
//! match response_rx.recv().unwrap() {
//!     SearchResponse::Suggestions { suggestions, .. } => println!("{}", suggestions.len()),
//!     SearchResponse::Failed { message, .. } => eprintln!("{}", message),
//!     SearchResponse::Cancelled { .. } => println!("Cancelled"),
//! }
//! ```

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{SearchRequest, SearchResponse};
