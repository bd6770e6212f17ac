//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::{ApplicationError, WeatherPort};
use async_trait::async_trait;
use chrono::Utc;
use domain::{
    DailyForecastEntry, GeoLocation, Location, Percentage, Temperature, WeatherForecast,
    WeatherObservation,
};
use integration_weather::{
    CurrentWeather, DailyForecast, Forecast, OpenMeteoClient, WeatherClient, WeatherConfig,
    WeatherError,
};
use tracing::{debug, instrument, warn};

/// Open-Meteo has no daily humidity average; every forecast day reports this value.
pub const DAILY_HUMIDITY_PLACEHOLDER: u8 = 50;

/// Adapter for weather services using the Open-Meteo API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"dyn WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::RequestFailed(status) | WeatherError::ServiceUnavailable(status) => {
                ApplicationError::WeatherDataUnavailable(format!(
                    "Weather service error: {}",
                    status.as_u16()
                ))
            },
            WeatherError::RateLimitExceeded => ApplicationError::WeatherDataUnavailable(
                "Weather service error: 429".to_string(),
            ),
            err @ (WeatherError::ConnectionFailed(_) | WeatherError::Timeout) => {
                ApplicationError::Network(err.to_string())
            },
            WeatherError::InvalidCoordinates => {
                ApplicationError::LocationNotFound(err.to_string())
            },
            WeatherError::ParseError(e) => {
                ApplicationError::WeatherDataUnavailable(format!("Unexpected error: {e}"))
            },
        }
    }

    fn map_current(location: &Location, current: &CurrentWeather) -> WeatherObservation {
        let code = current.weather_code;
        WeatherObservation {
            location: location.clone(),
            temperature: Temperature::celsius(current.temperature),
            feels_like: Temperature::celsius(current.apparent_temperature),
            humidity: Percentage::from_f64_clamped(current.humidity),
            pressure: truncate_pressure(current.pressure_msl),
            visibility_km: current.visibility / 1000.0,
            wind_speed_kmh: current.wind_speed,
            wind_direction: current.wind_direction.map(normalize_degrees),
            condition: code.condition(),
            description: code.description().to_string(),
            observed_at: current.time,
        }
    }

    fn map_daily(day: &DailyForecast) -> DailyForecastEntry {
        DailyForecastEntry {
            date: day.date,
            high: Temperature::celsius(day.temperature_max),
            low: Temperature::celsius(day.temperature_min),
            condition: day.weather_code.condition(),
            description: day.weather_code.description().to_string(),
            humidity: Percentage::clamped(DAILY_HUMIDITY_PLACEHOLDER),
            wind_speed_kmh: day.wind_speed_max,
            precipitation_chance: Percentage::from_f64_clamped(
                day.precipitation_probability.unwrap_or_default(),
            ),
        }
    }

    fn build_forecast(
        location: &Location,
        forecast: &Forecast,
    ) -> Result<WeatherForecast, ApplicationError> {
        let current = Self::map_current(location, &forecast.current);
        let daily = forecast.daily.iter().map(Self::map_daily).collect();

        WeatherForecast::new(location.clone(), current, daily, Utc::now()).map_err(|e| {
            warn!(error = %e, "Provider returned an unusable forecast");
            ApplicationError::WeatherDataUnavailable(format!("Unexpected error: {e}"))
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_pressure(hpa: f64) -> u32 {
    // `as` saturates: NaN and negatives become 0
    hpa.trunc() as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn normalize_degrees(degrees: f64) -> u16 {
    (degrees.rem_euclid(360.0).round() as u16) % 360
}

fn coordinates_of(location: &Location) -> Result<GeoLocation, ApplicationError> {
    location.coordinates().ok_or_else(|| {
        ApplicationError::LocationNotFound(format!(
            "Location coordinates not available for {}",
            location.display_name()
        ))
    })
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(location = %location.display_name()))]
    async fn fetch(&self, location: &Location) -> Result<WeatherForecast, ApplicationError> {
        let coordinates = coordinates_of(location)?;

        let forecast = self
            .client
            .get_forecast(coordinates.latitude(), coordinates.longitude())
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to fetch weather data");
                Self::map_error(e)
            })?;

        debug!(
            days = forecast.daily.len(),
            timezone = %forecast.timezone,
            "Retrieved weather forecast"
        );

        Self::build_forecast(location, &forecast)
    }
}
