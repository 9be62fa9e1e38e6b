//! Suggestion aggregation
//!
//! Pure merge of the two endpoint payloads into one ordered dropdown list:
//! up to 3 locations first, then up to 5 listings, each group in the order
//! its endpoint returned. No dedup, sorting or scoring.

use serde::Deserialize;
use serde_json::Value;

use super::suggestion::{ListingSuggestion, LocationSuggestion, Price, Suggestion};
use super::{MAX_LISTING_SUGGESTIONS, MAX_LOCATION_SUGGESTIONS};

/// Merge both payloads into the dropdown list
///
/// Either payload may be anything: a missing or non-array `results` field
/// counts as an empty result set for that side.
pub fn aggregate(locations: &Value, listings: &Value) -> Vec<Suggestion> {
    let location_suggestions = results_of(locations)
        .iter()
        .take(MAX_LOCATION_SUGGESTIONS)
        .map(location_from_value)
        .map(Suggestion::Location);

    let listing_suggestions = results_of(listings)
        .iter()
        .filter_map(listing_from_value)
        .take(MAX_LISTING_SUGGESTIONS)
        .map(Suggestion::Listing);

    location_suggestions.chain(listing_suggestions).collect()
}

fn results_of(payload: &Value) -> &[Value] {
    payload
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// Fields decode one by one; a mistyped field falls back to its default.

fn location_from_value(value: &Value) -> LocationSuggestion {
    let address = value.get("address").unwrap_or(&Value::Null);

    let city = ["city", "town", "village"]
        .into_iter()
        .filter_map(|key| text_field(address, key))
        .find(|name| !name.trim().is_empty());

    LocationSuggestion {
        display_name: text_field(value, "display_name").unwrap_or_default(),
        city,
        region: non_blank(text_field(address, "state")),
        country: non_blank(text_field(address, "country")),
    }
}

/// Records without an integer `id` cannot be opened and are dropped
fn listing_from_value(value: &Value) -> Option<ListingSuggestion> {
    let Some(id) = value.get("id").and_then(Value::as_i64) else {
        log::debug!("Skipping listing record without an integer id: {}", value);
        return None;
    };

    let year = value
        .get("year")
        .and_then(Value::as_i64)
        .and_then(|year| i32::try_from(year).ok())
        .unwrap_or_default();

    let price = value
        .get("price")
        .filter(|price| !price.is_null())
        .and_then(|price| match Price::deserialize(price) {
            Ok(price) => Some(price),
            Err(e) => {
                log::debug!("Ignoring malformed price on listing {}: {}", id, e);
                None
            }
        })
        .unwrap_or_default();

    Some(ListingSuggestion {
        id,
        title: text_field(value, "title").unwrap_or_default(),
        brand: text_field(value, "brand").unwrap_or_default(),
        model: text_field(value, "model").unwrap_or_default(),
        year,
        price,
    })
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod aggregate_tests;
