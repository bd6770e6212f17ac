//! Geocoding integration for Skycast
//!
//! Resolves user-supplied locations to coordinates using two free services:
//!
//! - [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) for US postal codes
//! - [Open-Meteo Geocoding](https://open-meteo.com/en/docs/geocoding-api) for
//!   free-text place names
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, HttpGeocodingClient};
//!
//! let client = HttpGeocodingClient::new(&GeocodingConfig::default())?;
//! let place = client.search_place("Portland, Oregon, US").await?;
//! println!("{} at {}, {}", place.name, place.latitude, place.longitude);
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, HttpGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocodingError;
pub use models::Place;
