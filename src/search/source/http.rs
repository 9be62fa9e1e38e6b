//! HTTP search source
//!
//! Talks to the marketplace backend: `GET {base}locations/search/?q=..` for
//! places and `GET {base}ads/?search=..` for listings. Uses reqwest; dropping
//! the returned future aborts the request, which is how cancellation reaches
//! the network.

use bytes::Bytes;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{SearchSource, SourceError, SourceKind};
use crate::config::ApiConfig;
use crate::error::TypeaheadError;

const DEFAULT_USER_AGENT: &str = concat!("typeahead/", env!("CARGO_PKG_VERSION"));

const LOCATIONS_QUERY_PARAM: &str = "q";
const LISTINGS_QUERY_PARAM: &str = "search";

#[derive(Debug, Clone)]
pub struct HttpSearchSource {
    client: Client,
    locations_url: Url,
    listings_url: Url,
}

impl HttpSearchSource {
    /// Build a source from the `[api]` config section
    pub fn from_config(config: &ApiConfig) -> Result<Self, TypeaheadError> {
        let base = parse_base_url(&config.base_url)?;
        let locations_url = join_path(&base, &config.locations_path)?;
        let listings_url = join_path(&base, &config.listings_path)?;

        let user_agent = config
            .user_agent
            .as_deref()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(DEFAULT_USER_AGENT);

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| TypeaheadError::HttpClient(e.to_string()))?;

        log::debug!(
            "HTTP search source: locations={} listings={}",
            locations_url,
            listings_url
        );

        Ok(Self {
            client,
            locations_url,
            listings_url,
        })
    }

    pub fn locations_url(&self) -> &Url {
        &self.locations_url
    }

    pub fn listings_url(&self) -> &Url {
        &self.listings_url
    }

    async fn fetch(
        &self,
        endpoint: SourceKind,
        url: &Url,
        param: &str,
        query: &str,
    ) -> Result<Value, SourceError> {
        let network_error = |e: reqwest::Error| SourceError::Network {
            endpoint,
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url.clone())
            .query(&[(param, query)])
            .send()
            .await
            .map_err(network_error)?;

        // A failing status is an empty result set for this endpoint, not a failure
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} endpoint answered {} for {:?}", endpoint, status, query);
            return Ok(Value::Null);
        }

        let body: Bytes = response.bytes().await.map_err(network_error)?;

        Ok(serde_json::from_slice(&body).unwrap_or_else(|e| {
            log::warn!("{} endpoint sent undecodable body: {}", endpoint, e);
            Value::Null
        }))
    }
}

impl SearchSource for HttpSearchSource {
    async fn search_locations(&self, query: &str) -> Result<Value, SourceError> {
        self.fetch(
            SourceKind::Locations,
            &self.locations_url,
            LOCATIONS_QUERY_PARAM,
            query,
        )
        .await
    }

    async fn search_listings(&self, query: &str) -> Result<Value, SourceError> {
        self.fetch(
            SourceKind::Listings,
            &self.listings_url,
            LISTINGS_QUERY_PARAM,
            query,
        )
        .await
    }
}

/// Parse the base URL, making sure it ends with `/` so paths join under it
fn parse_base_url(raw: &str) -> Result<Url, TypeaheadError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash).map_err(|e| TypeaheadError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(TypeaheadError::InvalidBaseUrl {
            url: raw.to_string(),
            message: "expected an http(s) URL".to_string(),
        });
    }

    Ok(url)
}

fn join_path(base: &Url, path: &str) -> Result<Url, TypeaheadError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| TypeaheadError::InvalidBaseUrl {
            url: format!("{}{}", base, path),
            message: e.to_string(),
        })
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
