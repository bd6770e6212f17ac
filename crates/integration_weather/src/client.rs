//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo Forecast API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{
    ApiResponse, CurrentWeather, DailyData, DailyForecast, Forecast, WeatherData, WmoCode,
};

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                              weather_code,pressure_msl,wind_speed_10m,wind_direction_10m,\
                              visibility";

const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
                            precipitation_probability_max,wind_speed_10m_max";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Weather service answered with a client error status
    #[error("Weather service error: {0}")]
    RequestFailed(StatusCode),

    /// Weather service answered with a server error status
    #[error("Weather service unavailable: {0}")]
    ServiceUnavailable(StatusCode),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl WeatherError {
    fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-5, default: 3)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    3
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the configured daily outlook
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    /// Query parameters for a forecast request
    fn forecast_params(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        let days = self.config.forecast_days.clamp(1, 5);
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("temperature_unit", "celsius".to_string()),
            ("wind_speed_unit", "kmh".to_string()),
            ("timezone", "auto".to_string()),
            ("forecast_days", days.to_string()),
        ]
    }

    fn parse_current_weather(data: &WeatherData) -> Result<CurrentWeather, WeatherError> {
        Ok(CurrentWeather {
            time: Self::parse_datetime(&data.time)?,
            temperature: data.temperature_2m,
            apparent_temperature: data.apparent_temperature,
            humidity: data.relative_humidity_2m,
            weather_code: WmoCode(data.weather_code),
            pressure_msl: data.pressure_msl,
            wind_speed: data.wind_speed_10m,
            wind_direction: data.wind_direction_10m,
            visibility: data.visibility.unwrap_or_default(),
        })
    }

    fn parse_daily_forecasts(daily: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
        let mut forecasts = Vec::with_capacity(daily.time.len());

        for (i, day) in daily.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date {day}: {e}")))?;

            let temperature_max = required(&daily.temperature_2m_max, i, "temperature_2m_max")?;
            let temperature_min = required(&daily.temperature_2m_min, i, "temperature_2m_min")?;

            forecasts.push(DailyForecast {
                date,
                weather_code: WmoCode(
                    daily.weather_code.get(i).copied().flatten().unwrap_or(u8::MAX),
                ),
                temperature_max,
                temperature_min,
                precipitation_probability: optional(daily.precipitation_probability_max.as_ref(), i),
                wind_speed_max: optional(daily.wind_speed_10m_max.as_ref(), i).unwrap_or_default(),
            });
        }

        Ok(forecasts)
    }

    /// Parse an Open-Meteo local timestamp
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, WeatherError> {
        // Open-Meteo's default is minute precision (2026-02-05T14:00)
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(dt);
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_local());
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }
}

fn required(values: &[Option<f64>], index: usize, field: &str) -> Result<f64, WeatherError> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::ParseError(format!("Missing {field} for day {index}")))
}

fn optional(values: Option<&Vec<Option<f64>>>, index: usize) -> Option<f64> {
    values.and_then(|v| v.get(index).copied().flatten())
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, days = self.config.forecast_days, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_params(latitude, longitude))
            .send()
            .await
            .map_err(|e| WeatherError::from_transport(&e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Open-Meteo rate limit hit");
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(status));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(status));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current_data = api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        let daily_data = api_response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        let current = Self::parse_current_weather(&current_data)?;
        let daily = Self::parse_daily_forecasts(&daily_data)?;

        Ok(Forecast {
            current,
            daily,
            latitude: api_response.latitude,
            longitude: api_response.longitude,
            timezone: api_response.timezone,
        })
    }
}
