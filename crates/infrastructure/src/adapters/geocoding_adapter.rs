//! Geocoding adapter - Implements GeocodingPort using integration_geocoding

use std::sync::Arc;

use application::{ApplicationError, GeocodingPort};
use async_trait::async_trait;
use domain::{GeoLocation, Location};
use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, HttpGeocodingClient, Place,
};
use tracing::{debug, instrument, warn};

/// Country recorded for postal-code lookups (Nominatim is queried with ", USA")
const POSTAL_LOOKUP_COUNTRY: &str = "US";

/// Adapter resolving locations through Nominatim and Open-Meteo geocoding
pub struct GeocodingAdapter {
    client: Arc<dyn GeocodingClient>,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"dyn GeocodingClient")
            .finish()
    }
}

/// Which lookup produced an error, for message wording
#[derive(Debug, Clone, Copy)]
enum Lookup {
    PostalCode,
    Place,
}

impl GeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: &GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = HttpGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Wrap an existing client
    pub fn with_client(client: Arc<dyn GeocodingClient>) -> Self {
        Self { client }
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError, lookup: Lookup, subject: &str) -> ApplicationError {
        let message = match (&err, lookup) {
            (GeocodingError::ConnectionFailed(_) | GeocodingError::Timeout, _) => {
                return ApplicationError::Network(err.to_string());
            },
            (GeocodingError::NotFound(_), Lookup::PostalCode) => {
                format!("Zipcode not found: {subject}")
            },
            (GeocodingError::NotFound(_), Lookup::Place) => format!("Location not found: {subject}"),
            (GeocodingError::RequestFailed(_), Lookup::PostalCode) => {
                format!("Could not resolve zipcode: {subject}")
            },
            (GeocodingError::RequestFailed(_), Lookup::Place) => {
                format!("Could not resolve location: {subject}")
            },
            (GeocodingError::ParseError(_), Lookup::PostalCode) => {
                format!("Invalid response for zipcode: {subject}")
            },
            (GeocodingError::ParseError(_), Lookup::Place) => {
                format!("Invalid response for location: {subject}")
            },
        };
        ApplicationError::LocationNotFound(message)
    }

    fn coordinates(place: &Place, subject: &str) -> Result<GeoLocation, ApplicationError> {
        GeoLocation::new(place.latitude, place.longitude).map_err(|e| {
            warn!(error = %e, "Provider returned out-of-range coordinates");
            ApplicationError::LocationNotFound(format!("Invalid coordinates for {subject}"))
        })
    }

    async fn resolve_postal_code(&self, zipcode: &str) -> Result<Location, ApplicationError> {
        let zipcode = zipcode.trim();
        let place = self
            .client
            .lookup_postal_code(zipcode)
            .await
            .map_err(|e| {
                warn!(error = %e, "Postal code lookup failed");
                Self::map_error(e, Lookup::PostalCode, zipcode)
            })?;

        let coordinates = Self::coordinates(&place, zipcode)?;
        let location = Location::new(
            place.name,
            place.state,
            Some(POSTAL_LOOKUP_COUNTRY.to_string()),
            Some(zipcode.to_string()),
        )?;
        Ok(location.with_coordinates(coordinates))
    }

    async fn resolve_place(&self, location: &Location) -> Result<Location, ApplicationError> {
        let display_name = location.display_name();
        let place = self
            .client
            .search_place(&location.search_query())
            .await
            .map_err(|e| {
                warn!(error = %e, "Place search failed");
                Self::map_error(e, Lookup::Place, &display_name)
            })?;

        let coordinates = Self::coordinates(&place, &display_name)?;
        let city = if place.name.trim().is_empty() {
            location.city().to_string()
        } else {
            place.name
        };
        let resolved = Location::new(
            city,
            place.state.or_else(|| location.state().map(str::to_string)),
            place.country.or_else(|| location.country().map(str::to_string)),
            location.zipcode().map(str::to_string),
        )?;
        Ok(resolved.with_coordinates(coordinates))
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self, location), fields(location = %location.display_name()))]
    async fn resolve(&self, location: &Location) -> Result<Location, ApplicationError> {
        let resolved = match location.zipcode() {
            Some(zipcode) => self.resolve_postal_code(zipcode).await?,
            None => self.resolve_place(location).await?,
        };

        debug!(
            resolved = %resolved.display_name(),
            lat = resolved.latitude(),
            lon = resolved.longitude(),
            "Location resolved"
        );
        Ok(resolved)
    }
}
