// Configuration type definitions

use serde::Deserialize;

fn default_base_url() -> String {
    "http://localhost:8000/api/".to_string()
}

fn default_locations_path() -> String {
    "locations/search/".to_string()
}

fn default_listings_path() -> String {
    "ads/".to_string()
}

/// Backend API section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Location search path under `base_url`, queried with `?q=`
    #[serde(default = "default_locations_path")]
    pub locations_path: String,
    /// Listing search path under `base_url`, queried with `?search=`
    #[serde(default = "default_listings_path")]
    pub listings_path: String,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            locations_path: default_locations_path(),
            listings_path: default_listings_path(),
            user_agent: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
