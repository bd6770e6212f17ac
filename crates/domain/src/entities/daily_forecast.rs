//! One day of a multi-day forecast

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Percentage, Temperature, WeatherCondition};

/// Forecast summary for a single calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub high: Temperature,
    pub low: Temperature,
    pub condition: WeatherCondition,
    pub description: String,
    pub humidity: Percentage,
    /// Maximum wind speed in km/h
    pub wind_speed_kmh: f64,
    pub precipitation_chance: Percentage,
}

impl DailyForecastEntry {
    /// English weekday name, e.g. "Monday"
    #[must_use]
    pub fn day_name(&self) -> String {
        self.date.format("%A").to_string()
    }
}
