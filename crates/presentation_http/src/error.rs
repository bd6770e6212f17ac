//! API error handling
//!
//! Every JSON error body has the shape `{"error": "..."}`. The message is the
//! kind-prefixed text users also see in the CLI and the HTML flash banner.

use application::{ApplicationError, ErrorKind};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(%status, error = %self, "Request failed");
        } else {
            warn!(%status, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        let message = err.user_message();
        match err.kind() {
            ErrorKind::InvalidLocationFormat => Self::BadRequest(message),
            ErrorKind::LocationNotFound => Self::NotFound(message),
            ErrorKind::WeatherDataUnavailable | ErrorKind::Network => {
                Self::ServiceUnavailable(message)
            },
            ErrorKind::Unexpected => Self::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}
