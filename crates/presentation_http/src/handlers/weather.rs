//! JSON weather API

use application::{ForecastRequest, ForecastResponse};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, instrument};

use super::MISSING_LOCATION;
use crate::{error::ApiError, state::AppState};

/// Look up the forecast for a zipcode or a city
///
/// Missing fields are treated as absent; empty strings count as missing.
#[utoipa::path(
    post,
    path = "/api/weather",
    tag = "weather",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast for the resolved location", body = ForecastResponse),
        (status = 400, description = "Malformed body or invalid location format", body = crate::error::ErrorResponse),
        (status = 404, description = "Location not found", body = crate::error::ErrorResponse),
        (status = 503, description = "Weather data unavailable or network error", body = crate::error::ErrorResponse),
        (status = 500, description = "Unexpected error", body = crate::error::ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn get_weather(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Json(request) = payload?;
    if !request.has_location() {
        return Err(ApiError::BadRequest(MISSING_LOCATION.to_string()));
    }

    let response = state.forecast_service.get_forecast(&request).await?;
    info!(location = %response.location, "Served weather API request");
    Ok(Json(response))
}
