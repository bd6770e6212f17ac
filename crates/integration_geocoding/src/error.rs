//! Geocoding error types

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Geocoding request timed out")]
    Timeout,

    /// Service answered with a non-success status
    #[error("Geocoding service error: {0}")]
    RequestFailed(StatusCode),

    /// Failed to parse the service response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The query matched no place
    #[error("Location not found: {0}")]
    NotFound(String),
}

impl GeocodingError {
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GeocodingError::RequestFailed(StatusCode::SERVICE_UNAVAILABLE).to_string(),
            "Geocoding service error: 503 Service Unavailable"
        );
        assert_eq!(
            GeocodingError::NotFound("90210".to_string()).to_string(),
            "Location not found: 90210"
        );
    }
}
