//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location;
mod measurement_unit;
mod percentage;
mod temperature;
mod weather_condition;

pub use geo_location::GeoLocation;
pub use location::Location;
pub use measurement_unit::{DistanceUnit, SpeedUnit};
pub use percentage::Percentage;
pub use temperature::{Temperature, TemperatureUnit};
pub use weather_condition::WeatherCondition;
