//! Geocoding service port
//!
//! Defines the interface for turning a partial location into one with
//! coordinates.

use async_trait::async_trait;
use domain::Location;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a location to coordinates and provider-normalized names
    ///
    /// Zipcode locations are looked up as US postal codes and come back
    /// with country "US". Other locations are searched by their
    /// city/state/country text; any zipcode on the input is kept.
    ///
    /// # Errors
    ///
    /// - `LocationNotFound` if the provider has no usable match
    /// - `Network` on transport failure
    async fn resolve(&self, location: &Location) -> Result<Location, ApplicationError>;
}
