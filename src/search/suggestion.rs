//! Suggestion types shown in the type-ahead dropdown
//!
//! A suggestion is either a place (which turns into a free-text listing
//! search when chosen) or a concrete car listing (which opens that listing).

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Suggestion {
    Location(LocationSuggestion),
    Listing(ListingSuggestion),
}

impl Suggestion {
    /// Main line shown for this entry
    pub fn primary_label(&self) -> String {
        match self {
            Suggestion::Location(location) => location.display_name.clone(),
            Suggestion::Listing(listing) => listing.headline(),
        }
    }

    /// Secondary line (price for listings, nothing for places)
    pub fn secondary_label(&self) -> Option<String> {
        match self {
            Suggestion::Location(_) => None,
            Suggestion::Listing(listing) => Some(format!("${}", listing.price)),
        }
    }

    /// Short tag rendered next to the entry
    pub fn kind_label(&self) -> &'static str {
        match self {
            Suggestion::Location(_) => "location",
            Suggestion::Listing(_) => "listing",
        }
    }

    pub fn is_location(&self) -> bool {
        matches!(self, Suggestion::Location(_))
    }
}

/// A place returned by the location endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationSuggestion {
    pub display_name: String,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl LocationSuggestion {
    /// Free-text query for this place: non-empty city, region and country
    /// joined with ", "
    pub fn search_text(&self) -> String {
        [&self.city, &self.region, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A car listing returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSuggestion {
    pub id: i64,
    pub title: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: Price,
}

impl ListingSuggestion {
    /// "brand model year", skipping blank parts
    pub fn headline(&self) -> String {
        let year = (self.year > 0).then(|| self.year.to_string());
        [Some(self.brand.as_str()), Some(self.model.as_str()), year.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Decimal price kept as the exact text the backend sent
///
/// The listing endpoint serializes decimals as strings (`"25000.00"`) but a
/// plain JSON number is accepted too. No float conversion happens, so the
/// value renders exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(String);

impl Price {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawPrice::deserialize(deserializer)? {
            RawPrice::Text(text) => Price(text.trim().to_string()),
            RawPrice::Number(number) => Price(number.to_string()),
        })
    }
}

#[cfg(test)]
#[path = "suggestion_tests.rs"]
mod suggestion_tests;
