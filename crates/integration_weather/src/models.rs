//! Weather data models
//!
//! Types for representing weather data from the Open-Meteo API.

use chrono::{NaiveDate, NaiveDateTime};
use domain::WeatherCondition;
use serde::Deserialize;

/// WMO weather interpretation code as reported by Open-Meteo
///
/// See: <https://open-meteo.com/en/docs> for the code reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WmoCode(pub u8);

impl WmoCode {
    /// Coarse condition for this code
    #[must_use]
    pub const fn condition(self) -> WeatherCondition {
        match self.0 {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::Clouds,
            45 | 48 => WeatherCondition::Fog,
            51 | 53 | 55 | 56 | 57 => WeatherCondition::Drizzle,
            61 | 63 | 65 | 66 | 67 | 80..=82 => WeatherCondition::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => WeatherCondition::Snow,
            95 | 96 | 99 => WeatherCondition::Thunderstorm,
            _ => WeatherCondition::Unknown,
        }
    }

    /// Human-readable description for this code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow fall",
            73 => "Moderate snow fall",
            75 => "Heavy snow fall",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }
}

/// Current weather conditions
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    /// Observation time, local to the requested coordinates
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    pub weather_code: WmoCode,
    /// Mean sea level pressure in hPa
    pub pressure_msl: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_direction: Option<f64>,
    /// Visibility in metres
    pub visibility: f64,
}

/// Daily forecast entry
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: WmoCode,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Maximum precipitation probability in percent
    pub precipitation_probability: Option<f64>,
    /// Maximum wind speed in km/h
    pub wind_speed_max: f64,
}

/// Complete forecast response
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub current: CurrentWeather,
    pub daily: Vec<DailyForecast>,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone the times are expressed in
    pub timezone: String,
}

// ============================================================================
// Raw API response types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: String,
    pub current: Option<WeatherData>,
    pub daily: Option<DailyData>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WeatherData {
    pub time: String,
    #[serde(default)]
    pub temperature_2m: f64,
    #[serde(default)]
    pub relative_humidity_2m: f64,
    #[serde(default)]
    pub apparent_temperature: f64,
    #[serde(default)]
    pub weather_code: u8,
    #[serde(default)]
    pub pressure_msl: f64,
    #[serde(default)]
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub wind_direction_10m: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<Option<u8>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub wind_speed_10m_max: Option<Vec<Option<f64>>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wmo_conditions() {
        assert_eq!(WmoCode(0).condition(), WeatherCondition::Clear);
        assert_eq!(WmoCode(2).condition(), WeatherCondition::Clouds);
        assert_eq!(WmoCode(48).condition(), WeatherCondition::Fog);
        assert_eq!(WmoCode(56).condition(), WeatherCondition::Drizzle);
        assert_eq!(WmoCode(67).condition(), WeatherCondition::Rain);
        assert_eq!(WmoCode(81).condition(), WeatherCondition::Rain);
        assert_eq!(WmoCode(77).condition(), WeatherCondition::Snow);
        assert_eq!(WmoCode(86).condition(), WeatherCondition::Snow);
        assert_eq!(WmoCode(99).condition(), WeatherCondition::Thunderstorm);
    }

    #[test]
    fn test_wmo_descriptions() {
        assert_eq!(WmoCode(0).description(), "Clear sky");
        assert_eq!(WmoCode(3).description(), "Overcast");
        assert_eq!(WmoCode(82).description(), "Violent rain showers");
        assert_eq!(WmoCode(96).description(), "Thunderstorm with slight hail");
    }

    #[test]
    fn test_unknown_codes() {
        for code in [4, 44, 50, 60, 70, 90, 100, 255] {
            assert_eq!(WmoCode(code).condition(), WeatherCondition::Unknown);
            assert_eq!(WmoCode(code).description(), "Unknown");
        }
    }

    #[test]
    fn test_every_known_code_has_description() {
        for code in 0..=u8::MAX {
            let wmo = WmoCode(code);
            let known = wmo.condition() != WeatherCondition::Unknown;
            assert_eq!(known, wmo.description() != "Unknown", "code {code}");
        }
    }
}
