//! Shared fixtures for search tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{Value, json};

use super::source::{SearchSource, SourceError, SourceKind};
use super::suggestion::{ListingSuggestion, LocationSuggestion, Price};

pub fn location(
    display_name: &str,
    city: Option<&str>,
    region: Option<&str>,
    country: Option<&str>,
) -> LocationSuggestion {
    LocationSuggestion {
        display_name: display_name.to_string(),
        city: city.map(str::to_string),
        region: region.map(str::to_string),
        country: country.map(str::to_string),
    }
}

pub fn listing(id: i64, brand: &str, model: &str, year: i32, price: &str) -> ListingSuggestion {
    ListingSuggestion {
        id,
        title: format!("{} {}", brand, model),
        brand: brand.to_string(),
        model: model.to_string(),
        year,
        price: Price::new(price),
    }
}

/// Location payload with `n` records named "Place 1".."Place n"
pub fn location_payload(n: usize) -> Value {
    let results: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "display_name": format!("Place {}", i),
                "address": {"city": format!("City {}", i), "country": "Testland"}
            })
        })
        .collect();
    json!({ "results": results })
}

/// Listing payload with ids 1..=n, in DRF page shape
pub fn listing_payload(n: usize) -> Value {
    let results: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "title": format!("Car {}", i),
                "brand": "Brand",
                "model": format!("Model {}", i),
                "year": 2000 + i,
                "price": format!("{}.00", 1000 * i)
            })
        })
        .collect();
    json!({
        "count": n,
        "next": null,
        "previous": null,
        "results": results
    })
}

/// Canned answer for one endpoint call
#[derive(Debug, Clone)]
pub struct Reply {
    delay: Duration,
    result: Result<Value, SourceError>,
}

impl Reply {
    pub fn ok(payload: Value) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(payload),
        }
    }

    pub fn network_error(endpoint: SourceKind) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(SourceError::Network {
                endpoint,
                message: "connection refused".to_string(),
            }),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: HashMap<(SourceKind, String), Reply>,
    calls: Vec<(SourceKind, String)>,
}

/// In-memory [`SearchSource`] answering from a script
///
/// Unscripted queries get an empty result set. Clones share the same script
/// and call log, so a test can keep a handle after moving the source into
/// a worker.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<Script>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: SourceKind, query: &str, reply: Reply) -> Self {
        self.script
            .lock()
            .unwrap()
            .replies
            .insert((endpoint, query.to_string()), reply);
        self
    }

    pub fn locations(self, query: &str, reply: Reply) -> Self {
        self.reply(SourceKind::Locations, query, reply)
    }

    pub fn listings(self, query: &str, reply: Reply) -> Self {
        self.reply(SourceKind::Listings, query, reply)
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<(SourceKind, String)> {
        self.script.lock().unwrap().calls.clone()
    }

    /// Queries sent to one endpoint, in order
    pub fn queries(&self, endpoint: SourceKind) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(kind, _)| *kind == endpoint)
            .map(|(_, query)| query)
            .collect()
    }

    async fn answer(&self, endpoint: SourceKind, query: &str) -> Result<Value, SourceError> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.calls.push((endpoint, query.to_string()));
            script
                .replies
                .get(&(endpoint, query.to_string()))
                .cloned()
                .unwrap_or_else(|| Reply::ok(json!({ "results": [] })))
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.result
    }
}

impl SearchSource for ScriptedSource {
    async fn search_locations(&self, query: &str) -> Result<Value, SourceError> {
        self.answer(SourceKind::Locations, query).await
    }

    async fn search_listings(&self, query: &str) -> Result<Value, SourceError> {
        self.answer(SourceKind::Listings, query).await
    }
}
