//! Request and response shapes of the forecast use case

use serde::{Deserialize, Serialize};

/// A raw location request as supplied by a front end
///
/// Every field is optional; empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct ForecastRequest {
    /// US zipcode, e.g. "90210" or "90210-1234"
    pub zipcode: Option<String>,
    pub city: Option<String>,
    /// State or province
    pub state: Option<String>,
    /// Country name or code
    pub country: Option<String>,
}

impl ForecastRequest {
    #[must_use]
    pub fn zipcode(zipcode: impl Into<String>) -> Self {
        Self {
            zipcode: Some(zipcode.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn city(
        city: impl Into<String>,
        state: Option<String>,
        country: Option<String>,
    ) -> Self {
        Self {
            zipcode: None,
            city: Some(city.into()),
            state,
            country,
        }
    }

    /// Whether the request names a zipcode, or a city with a state or country
    #[must_use]
    pub fn has_location(&self) -> bool {
        if present(self.zipcode.as_deref()) {
            return true;
        }
        present(self.city.as_deref())
            && (present(self.state.as_deref()) || present(self.country.as_deref()))
    }

    /// Copy with surrounding whitespace stripped; blank fields become `None`
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            zipcode: trim_field(self.zipcode),
            city: trim_field(self.city),
            state: trim_field(self.state),
            country: trim_field(self.country),
        }
    }
}

fn trim_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// One formatted day of the outlook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DailyForecastView {
    /// ISO date, e.g. "2024-06-01"
    pub date: String,
    /// English weekday name
    pub day_name: String,
    pub high_temperature: String,
    pub low_temperature: String,
    pub condition: String,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: String,
    /// e.g. "40%"
    pub precipitation_chance: String,
}

/// Unit labels used in a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UnitsView {
    /// "celsius" or "fahrenheit"
    pub temperature: String,
    /// "km/h" or "mph"
    pub speed: String,
    /// "km" or "miles"
    pub distance: String,
}

/// Display-ready forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ForecastResponse {
    pub location: String,
    pub current_temperature: String,
    pub feels_like: String,
    pub condition: String,
    pub description: String,
    pub humidity: u8,
    /// Sea-level pressure in hPa
    pub pressure: u32,
    pub visibility: String,
    pub wind_speed: String,
    /// 16-point compass label or "N/A"
    pub wind_direction: String,
    /// Observation time, "%Y-%m-%d %H:%M:%S"
    pub timestamp: String,
    pub daily_forecasts: Vec<DailyForecastView>,
    pub units: UnitsView,
}
