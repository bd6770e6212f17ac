//! Domain layer for Skycast
//!
//! Contains the weather model: locations, temperatures, observations and
//! forecasts, plus the pure location validation and unit selection rules.
//! This layer performs no I/O and defines the ubiquitous language.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
