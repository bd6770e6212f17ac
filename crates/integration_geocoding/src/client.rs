//! HTTP geocoding client
//!
//! Postal codes go to Nominatim because Open-Meteo's geocoder does not index
//! them. Everything else goes to the Open-Meteo place search.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::GeocodingError;
use crate::models::{NominatimResult, Place, SearchResponse};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a US postal code to a place with coordinates
    async fn lookup_postal_code(&self, postal_code: &str) -> Result<Place, GeocodingError>;

    /// Resolve a free-text place query (e.g. "Paris, France")
    async fn search_place(&self, query: &str) -> Result<Place, GeocodingError>;
}

/// Geocoding client backed by Nominatim and Open-Meteo
#[derive(Debug)]
pub struct HttpGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl HttpGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, GeocodingError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| GeocodingError::from_transport(&e))?;

        Self::check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))
    }

    fn check_status(response: &Response) -> Result<(), GeocodingError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(%status, url = %response.url(), "Geocoding request rejected");
            Err(GeocodingError::RequestFailed(status))
        }
    }
}

fn parse_coordinate(value: &str, field: &str) -> Result<f64, GeocodingError> {
    value
        .trim()
        .parse()
        .map_err(|_| GeocodingError::ParseError(format!("Invalid {field}: {value}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl GeocodingClient for HttpGeocodingClient {
    #[instrument(skip(self))]
    async fn lookup_postal_code(&self, postal_code: &str) -> Result<Place, GeocodingError> {
        let postal_code = postal_code.trim();
        if postal_code.is_empty() {
            return Err(GeocodingError::NotFound(
                "Postal code must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.nominatim_base_url);
        let query = format!("{postal_code}, USA");
        debug!(url = %url, %query, "Looking up postal code");

        let results: Vec<NominatimResult> = self
            .get_json(
                &url,
                &[
                    ("q", query.as_str()),
                    ("format", "json"),
                    ("limit", "1"),
                    ("addressdetails", "1"),
                ],
            )
            .await?;

        let first = results
            .into_iter()
            .next()
            .ok_or_else(|| GeocodingError::NotFound(postal_code.to_string()))?;

        let latitude = parse_coordinate(&first.lat, "latitude")?;
        let longitude = parse_coordinate(&first.lon, "longitude")?;
        let name = first.address.settlement().unwrap_or_default().to_string();

        debug!(%name, latitude, longitude, "Postal code resolved");

        Ok(Place {
            name,
            state: non_empty(first.address.state),
            country: Some("US".to_string()),
            latitude,
            longitude,
        })
    }

    #[instrument(skip(self))]
    async fn search_place(&self, query: &str) -> Result<Place, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::NotFound(
                "Search query must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.search_base_url);
        debug!(url = %url, %query, "Searching place");

        let response: SearchResponse = self
            .get_json(
                &url,
                &[
                    ("name", query),
                    ("count", "1"),
                    ("language", self.config.language.as_str()),
                    ("format", "json"),
                ],
            )
            .await?;

        let first = response
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| GeocodingError::NotFound(query.to_string()))?;

        Ok(Place {
            name: first.name.unwrap_or_default(),
            state: non_empty(first.admin1),
            country: non_empty(first.country),
            latitude: first.latitude,
            longitude: first.longitude,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert!((parse_coordinate("34.0901", "latitude").unwrap() - 34.0901).abs() < f64::EPSILON);
        assert!((parse_coordinate(" -118.4065 ", "longitude").unwrap() + 118.4065).abs() < 1e-9);
        assert!(matches!(
            parse_coordinate("north", "latitude"),
            Err(GeocodingError::ParseError(msg)) if msg == "Invalid latitude: north"
        ));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("CA".to_string())), Some("CA".to_string()));
        assert_eq!(non_empty(Some("  ".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_client_creation() {
        assert!(HttpGeocodingClient::new(&GeocodingConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_inputs_are_rejected_without_requests() {
        let client = HttpGeocodingClient::new(&GeocodingConfig {
            nominatim_base_url: "http://127.0.0.1:9".to_string(),
            search_base_url: "http://127.0.0.1:9".to_string(),
            ..GeocodingConfig::default()
        })
        .unwrap();

        let postal = tokio_test::block_on(client.lookup_postal_code("  "));
        assert!(matches!(postal, Err(GeocodingError::NotFound(_))));

        let place = tokio_test::block_on(client.search_place(""));
        assert!(matches!(place, Err(GeocodingError::NotFound(_))));
    }

    #[test]
    fn test_client_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingClient>();
    }
}
