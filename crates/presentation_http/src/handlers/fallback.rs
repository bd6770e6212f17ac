//! Unknown routes

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::{error::ApiError, state::AppState};

/// 404 handler: JSON under `/api`, an HTML page everywhere else
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return ApiError::NotFound(format!("Not found: {path}")).into_response();
    }

    match state.pages.error("Page not found") {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Page not found").into_response(),
    }
}
