//! Integration configurations: Weather and Geocoding.

use serde::{Deserialize, Serialize};

// ==============================
// Weather Configuration
// ==============================

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Open-Meteo forecast API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of forecast days to request (1-5)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout_secs(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherAppConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_weather_config(&self) -> integration_weather::WeatherConfig {
        integration_weather::WeatherConfig {
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
            forecast_days: self.forecast_days,
        }
    }
}

// ==============================
// Geocoding Configuration
// ==============================

/// Geocoding service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Nominatim base URL (postal-code lookup)
    #[serde(default = "default_nominatim_base_url")]
    pub nominatim_base_url: String,

    /// Open-Meteo geocoding base URL (place search)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Override for the User-Agent header sent to the providers
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_nominatim_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_search_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            nominatim_base_url: default_nominatim_base_url(),
            search_base_url: default_search_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
        }
    }
}

impl GeocodingAppConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_geocoding_config(&self) -> integration_geocoding::GeocodingConfig {
        let mut config = integration_geocoding::GeocodingConfig {
            nominatim_base_url: self.nominatim_base_url.trim_end_matches('/').to_string(),
            search_base_url: self.search_base_url.trim_end_matches('/').to_string(),
            timeout_secs: self.timeout_secs,
            ..integration_geocoding::GeocodingConfig::default()
        };
        if let Some(agent) = self.user_agent.as_ref().filter(|a| !a.trim().is_empty()) {
            config.user_agent.clone_from(agent);
        }
        config
    }
}
