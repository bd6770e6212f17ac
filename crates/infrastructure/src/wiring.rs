//! Composition root shared by the binaries

use std::sync::Arc;

use application::{ApplicationError, ForecastService};
use tracing::info;

use crate::adapters::{GeocodingAdapter, WeatherAdapter};
use crate::config::AppConfig;

/// Build a [`ForecastService`] wired to the HTTP-backed adapters
///
/// # Errors
///
/// Returns an error if either HTTP client fails to initialize.
pub fn build_forecast_service(config: &AppConfig) -> Result<ForecastService, ApplicationError> {
    let weather_config = config.weather.to_weather_config();
    let geocoding_config = config.geocoding.to_geocoding_config();

    info!(
        weather_url = %weather_config.base_url,
        nominatim_url = %geocoding_config.nominatim_base_url,
        search_url = %geocoding_config.search_base_url,
        forecast_days = weather_config.forecast_days,
        "Wiring forecast service"
    );

    let geocoding = GeocodingAdapter::with_config(&geocoding_config)?;
    let weather = WeatherAdapter::with_config(weather_config)?;

    Ok(ForecastService::new(Arc::new(geocoding), Arc::new(weather)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let service = build_forecast_service(&AppConfig::default());
        assert!(service.is_ok());
    }
}
