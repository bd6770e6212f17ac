//! Current weather conditions at a location

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Location, Percentage, Temperature, WeatherCondition};

/// Sentinel shown when the provider reports no wind direction
pub const WIND_DIRECTION_UNAVAILABLE: &str = "N/A";

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Current conditions as reported by a weather provider
///
/// Visibility is kept in kilometers and wind speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub location: Location,
    pub temperature: Temperature,
    pub feels_like: Temperature,
    pub humidity: Percentage,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    /// Visibility in kilometers
    pub visibility_km: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// Bearing the wind blows from, in degrees
    pub wind_direction: Option<u16>,
    pub condition: WeatherCondition,
    pub description: String,
    /// Observation time, local to the location
    pub observed_at: NaiveDateTime,
}

impl WeatherObservation {
    /// 16-point compass label for the wind direction
    #[must_use]
    pub fn wind_direction_text(&self) -> &'static str {
        self.wind_direction
            .map_or(WIND_DIRECTION_UNAVAILABLE, compass_point)
    }
}

/// Map a bearing in degrees to a 16-point compass label
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compass_point(degrees: u16) -> &'static str {
    let index = (f64::from(degrees) / 22.5).round() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn observation(wind_direction: Option<u16>) -> WeatherObservation {
        WeatherObservation {
            location: Location::new("Austin", Some("TX".to_string()), None, None)
                .expect("valid location"),
            temperature: Temperature::celsius(30.0),
            feels_like: Temperature::celsius(32.0),
            humidity: Percentage::clamped(40),
            pressure: 1012,
            visibility_km: 10.0,
            wind_speed_kmh: 12.0,
            wind_direction,
            condition: WeatherCondition::Clear,
            description: "Clear sky".to_string(),
            observed_at: NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|d| d.and_hms_opt(14, 0, 0))
                .expect("valid timestamp"),
        }
    }

    #[test]
    fn test_cardinal_directions() {
        assert_eq!(compass_point(0), "N");
        assert_eq!(compass_point(90), "E");
        assert_eq!(compass_point(180), "S");
        assert_eq!(compass_point(270), "W");
    }

    #[test]
    fn test_intermediate_directions() {
        assert_eq!(compass_point(22), "NNE");
        assert_eq!(compass_point(45), "NE");
        assert_eq!(compass_point(200), "SSW");
        assert_eq!(compass_point(337), "NNW");
    }

    #[test]
    fn test_wraps_back_to_north() {
        assert_eq!(compass_point(350), "N");
        assert_eq!(compass_point(359), "N");
        assert_eq!(compass_point(360), "N");
    }

    #[test]
    fn test_wind_direction_text() {
        assert_eq!(observation(Some(180)).wind_direction_text(), "S");
        assert_eq!(observation(Some(0)).wind_direction_text(), "N");
        assert_eq!(
            observation(None).wind_direction_text(),
            WIND_DIRECTION_UNAVAILABLE
        );
    }
}
