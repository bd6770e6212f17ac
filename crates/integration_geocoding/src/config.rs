//! Geocoding configuration

use serde::{Deserialize, Serialize};

/// Configuration for both geocoding providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the Nominatim API (postal-code lookup)
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,

    /// Base URL for the Open-Meteo geocoding API (place search)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent sent with every request (required by the Nominatim usage policy)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Language for place names returned by the search API
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_search_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!(
        "Skycast/",
        env!("CARGO_PKG_VERSION"),
        " (https://github.com/twohreichel/skycast)"
    )
    .to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            nominatim_base_url: default_nominatim_base_url(),
            search_base_url: default_search_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            language: default_language(),
        }
    }
}
