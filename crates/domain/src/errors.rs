//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Location fields do not identify a place
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// Latitude or longitude out of range
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Percentage outside 0-100
    #[error("Invalid percentage: {0}% is out of range (must be 0-100)")]
    InvalidPercentage(u8),

    /// Forecast aggregate violates its shape
    #[error("Invalid forecast: {0}")]
    InvalidForecast(String),
}
