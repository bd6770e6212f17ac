//! Infrastructure layer - Adapters for external systems
//!
//! Implements the geocoding and weather ports over the HTTP integration
//! crates, and owns configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;
mod wiring;

pub use adapters::*;
pub use config::{AppConfig, ConfigValidationError, GeocodingAppConfig, ServerConfig, WeatherAppConfig};
pub use telemetry::{LogFormat, LogWriter, TelemetryConfig, TelemetryError, init_telemetry};
pub use wiring::build_forecast_service;
