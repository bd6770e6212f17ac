//! Geocoding data models

use serde::Deserialize;

/// A place resolved by one of the geocoding providers
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// City, town or village name (may be empty when the provider omits it)
    pub name: String,
    /// State or first-level administrative area
    pub state: Option<String>,
    /// Country name or code
    pub country: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Nominatim search hit
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub state: Option<String>,
}

impl NominatimAddress {
    /// Best available settlement name
    pub fn settlement(&self) -> Option<&str> {
        self.city
            .as_deref()
            .or(self.town.as_deref())
            .or(self.village.as_deref())
    }
}

/// Open-Meteo geocoding search response
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResult {
    pub name: Option<String>,
    pub admin1: Option<String>,
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}
