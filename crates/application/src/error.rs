//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Request or location fields failed syntactic validation
    #[error("{0}")]
    InvalidLocationFormat(String),

    /// Geocoding produced no usable place
    #[error("{0}")]
    LocationNotFound(String),

    /// Weather provider answered with an error or an unusable payload
    #[error("{0}")]
    WeatherDataUnavailable(String),

    /// Transport failure reaching a provider
    #[error("{0}")]
    Network(String),

    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Closed classification adapters use to choose a presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidLocationFormat,
    LocationNotFound,
    WeatherDataUnavailable,
    Network,
    Unexpected,
}

impl ErrorKind {
    /// Human-readable prefix for user-facing messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InvalidLocationFormat => "Invalid location format",
            Self::LocationNotFound => "Location not found",
            Self::WeatherDataUnavailable => "Weather data unavailable",
            Self::Network => "Network error",
            Self::Unexpected => "Unexpected error",
        }
    }
}

impl ApplicationError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLocationFormat(_) => ErrorKind::InvalidLocationFormat,
            Self::LocationNotFound(_) => ErrorKind::LocationNotFound,
            Self::WeatherDataUnavailable(_) => ErrorKind::WeatherDataUnavailable,
            Self::Network(_) => ErrorKind::Network,
            Self::Domain(_) | Self::Internal(_) => ErrorKind::Unexpected,
        }
    }

    /// Message prefixed with its kind, e.g. "Location not found: Atlantis"
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("{}: {self}", self.kind().label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            ApplicationError::InvalidLocationFormat("x".into()).kind(),
            ErrorKind::InvalidLocationFormat
        );
        assert_eq!(
            ApplicationError::LocationNotFound("x".into()).kind(),
            ErrorKind::LocationNotFound
        );
        assert_eq!(
            ApplicationError::WeatherDataUnavailable("x".into()).kind(),
            ErrorKind::WeatherDataUnavailable
        );
        assert_eq!(ApplicationError::Network("x".into()).kind(), ErrorKind::Network);
        assert_eq!(
            ApplicationError::Internal("x".into()).kind(),
            ErrorKind::Unexpected
        );
        assert_eq!(
            ApplicationError::from(DomainError::InvalidPercentage(120)).kind(),
            ErrorKind::Unexpected
        );
    }

    #[test]
    fn test_user_message() {
        let err = ApplicationError::LocationNotFound("No results for Atlantis".into());
        assert_eq!(err.user_message(), "Location not found: No results for Atlantis");

        let err = ApplicationError::Internal("boom".into());
        assert_eq!(err.user_message(), "Unexpected error: Internal error: boom");
    }
}
