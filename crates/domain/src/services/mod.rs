//! Domain services - stateless rules over the weather model

pub mod location_validator;
pub mod units;

pub use location_validator::{validate_city_state, validate_city_state_country, validate_zipcode};
pub use units::{UnitSystem, distance_unit, speed_unit, temperature_unit};
