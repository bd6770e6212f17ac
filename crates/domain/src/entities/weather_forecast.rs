//! Forecast aggregate

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{DailyForecastEntry, WeatherObservation};
use crate::errors::DomainError;
use crate::value_objects::Location;

/// Minimum number of daily entries in a forecast
pub const MIN_FORECAST_DAYS: usize = 1;
/// Maximum number of daily entries in a forecast
pub const MAX_FORECAST_DAYS: usize = 5;

/// Current conditions plus a short chronological daily outlook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherForecast {
    location: Location,
    current: WeatherObservation,
    daily: Vec<DailyForecastEntry>,
    generated_at: DateTime<Utc>,
}

impl WeatherForecast {
    /// Assemble a forecast
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidForecast` if `daily` holds fewer than
    /// one or more than five entries, or if the dates are not strictly
    /// ascending.
    pub fn new(
        location: Location,
        current: WeatherObservation,
        daily: Vec<DailyForecastEntry>,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if !(MIN_FORECAST_DAYS..=MAX_FORECAST_DAYS).contains(&daily.len()) {
            return Err(DomainError::InvalidForecast(format!(
                "expected {MIN_FORECAST_DAYS}-{MAX_FORECAST_DAYS} daily entries, got {}",
                daily.len()
            )));
        }
        if daily.windows(2).any(|pair| pair[0].date >= pair[1].date) {
            return Err(DomainError::InvalidForecast(
                "daily entries must be in chronological order".to_string(),
            ));
        }

        Ok(Self {
            location,
            current,
            daily,
            generated_at,
        })
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub const fn current(&self) -> &WeatherObservation {
        &self.current
    }

    #[must_use]
    pub fn daily(&self) -> &[DailyForecastEntry] {
        &self.daily
    }

    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}
