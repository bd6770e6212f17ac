//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{Location, WeatherForecast};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data providers
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and the daily outlook for a resolved location
    ///
    /// Temperatures in the returned forecast are in Celsius, wind speeds in
    /// km/h and visibility in km.
    ///
    /// # Errors
    ///
    /// - `LocationNotFound` if `location` carries no coordinates
    /// - `WeatherDataUnavailable` if the provider reports an error or the
    ///   payload cannot be turned into a forecast
    /// - `Network` on transport failure
    async fn fetch(&self, location: &Location) -> Result<WeatherForecast, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
