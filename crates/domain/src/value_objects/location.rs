//! Location value object
//!
//! A place described either by a US zipcode or by a city qualified with a
//! state and/or country. Coordinates are attached once the place has been
//! resolved by a geocoder, producing a new value.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

const US_COUNTRY_NAMES: [&str; 3] = ["US", "USA", "UNITED STATES"];

/// A place to fetch weather for
///
/// # Examples
///
/// ```
/// use domain::value_objects::Location;
///
/// let toronto = Location::new(
///     "Toronto",
///     Some("ON".to_string()),
///     Some("Canada".to_string()),
///     None,
/// )
/// .expect("valid location");
/// assert_eq!(toronto.display_name(), "Toronto, ON, Canada");
/// assert!(!toronto.is_us_location());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    city: String,
    state: Option<String>,
    country: Option<String>,
    zipcode: Option<String>,
    coordinates: Option<GeoLocation>,
}

impl Location {
    /// Create a location from raw fields
    ///
    /// Empty optional strings are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` unless a zipcode is given, or
    /// the city is non-empty and accompanied by a state or a country.
    pub fn new(
        city: impl Into<String>,
        state: Option<String>,
        country: Option<String>,
        zipcode: Option<String>,
    ) -> Result<Self, DomainError> {
        let city = city.into();
        let state = non_empty(state);
        let country = non_empty(country);
        let zipcode = non_empty(zipcode);

        let identifies_place =
            zipcode.is_some() || (!city.is_empty() && (state.is_some() || country.is_some()));
        if !identifies_place {
            return Err(DomainError::InvalidLocation(
                "either zipcode or city with state/country must be provided".to_string(),
            ));
        }

        Ok(Self {
            city,
            state,
            country,
            zipcode,
            coordinates: None,
        })
    }

    /// Return a copy of this location carrying resolved coordinates
    #[must_use]
    pub fn with_coordinates(&self, coordinates: GeoLocation) -> Self {
        Self {
            coordinates: Some(coordinates),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    #[must_use]
    pub fn zipcode(&self) -> Option<&str> {
        self.zipcode.as_deref()
    }

    #[must_use]
    pub const fn coordinates(&self) -> Option<GeoLocation> {
        self.coordinates
    }

    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.latitude())
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.map(|c| c.longitude())
    }

    /// Human-readable name of the place
    #[must_use]
    pub fn display_name(&self) -> String {
        let city = &self.city;
        match (&self.zipcode, &self.state, &self.country) {
            (Some(zip), state, _) => {
                format!("{city}, {} {zip}", state.as_deref().unwrap_or_default())
            },
            (None, Some(state), Some(country)) => format!("{city}, {state}, {country}"),
            (None, Some(state), None) => format!("{city}, {state}"),
            (None, None, Some(country)) => format!("{city}, {country}"),
            (None, None, None) => city.clone(),
        }
    }

    /// Whether US customary units apply to this place
    #[must_use]
    pub fn is_us_location(&self) -> bool {
        if self.zipcode.is_some() {
            return true;
        }
        self.country.as_deref().is_some_and(|country| {
            US_COUNTRY_NAMES
                .iter()
                .any(|name| country.eq_ignore_ascii_case(name))
        })
    }

    /// Free-text query for place search, skipping absent parts
    #[must_use]
    pub fn search_query(&self) -> String {
        [
            Some(self.city.as_str()),
            self.state.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            city: String,
            state: Option<String>,
            country: Option<String>,
            zipcode: Option<String>,
            coordinates: Option<GeoLocation>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let location = Self::new(raw.city, raw.state, raw.country, raw.zipcode)
            .map_err(serde::de::Error::custom)?;
        Ok(match raw.coordinates {
            Some(coordinates) => location.with_coordinates(coordinates),
            None => location,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
