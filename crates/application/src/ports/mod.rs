//! Port definitions - Interfaces for external dependencies

mod geocoding_port;
mod weather_port;

pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use weather_port::WeatherPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
