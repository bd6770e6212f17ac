//! Application configuration
//!
//! Layered loading: built-in defaults, then an optional `config.toml` in the
//! working directory, then `SKYCAST_`-prefixed environment variables using
//! `__` between nested keys (e.g. `SKYCAST_SERVER__PORT=8080`).

mod integrations;
mod server;

pub use integrations::{GeocodingAppConfig, WeatherAppConfig};
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;
use thiserror::Error;

use crate::telemetry::TelemetryConfig;

pub(crate) const fn default_true() -> bool {
    true
}

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "SKYCAST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Geocoding provider configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// A configuration value that loaded fine but cannot be used
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid configuration for {field}: {reason}")]
pub struct ConfigValidationError {
    /// Dotted path of the offending key
    pub field: &'static str,
    /// What is wrong with it
    pub reason: String,
}

impl ConfigValidationError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., SKYCAST_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Parse configuration from a TOML document, filling gaps with defaults
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Check values that deserialize fine but would break at runtime
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::new("server.port", "must not be 0"));
        }
        if self.weather.timeout_secs == 0 {
            return Err(ConfigValidationError::new(
                "weather.timeout_secs",
                "must be greater than 0",
            ));
        }
        if self.geocoding.timeout_secs == 0 {
            return Err(ConfigValidationError::new(
                "geocoding.timeout_secs",
                "must be greater than 0",
            ));
        }
        if !(1..=5).contains(&self.weather.forecast_days) {
            return Err(ConfigValidationError::new(
                "weather.forecast_days",
                format!("{} is outside 1-5", self.weather.forecast_days),
            ));
        }

        let urls = [
            ("weather.base_url", &self.weather.base_url),
            ("geocoding.nominatim_base_url", &self.geocoding.nominatim_base_url),
            ("geocoding.search_base_url", &self.geocoding.search_base_url),
        ];
        for (field, value) in urls {
            if value.trim().is_empty() {
                return Err(ConfigValidationError::new(field, "must not be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::LogFormat;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.forecast_days, 3);
        assert_eq!(config.telemetry.log_format, LogFormat::Text);
    }

    #[test]
    fn from_toml_overrides_and_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [server]
            port = 9090

            [weather]
            forecast_days = 5

            [telemetry]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.forecast_days, 5);
        assert_eq!(config.weather.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.geocoding.timeout_secs, 30);
    }

    #[test]
    fn empty_toml_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_toml_is_rejected() {
        assert!(AppConfig::from_toml_str("[server\nport = ").is_err());
        assert!(AppConfig::from_toml_str("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.field, "server.port");
    }

    #[test]
    fn validate_rejects_zero_timeouts() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        assert_eq!(config.validate().unwrap_err().field, "weather.timeout_secs");

        let mut config = AppConfig::default();
        config.geocoding.timeout_secs = 0;
        assert_eq!(config.validate().unwrap_err().field, "geocoding.timeout_secs");
    }

    #[test]
    fn validate_rejects_forecast_days_out_of_range() {
        for days in [0, 6] {
            let mut config = AppConfig::default();
            config.weather.forecast_days = days;
            let err = config.validate().unwrap_err();
            assert_eq!(err.field, "weather.forecast_days");
        }
    }

    #[test]
    fn validate_rejects_blank_urls() {
        let mut config = AppConfig::default();
        config.geocoding.search_base_url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration for geocoding.search_base_url: must not be empty"
        );
    }
}
