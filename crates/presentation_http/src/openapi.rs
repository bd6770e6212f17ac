//! OpenAPI documentation module
//!
//! Serves the OpenAPI 3 document for the JSON endpoints at `/api-docs/openapi.json`.

// Allow clippy warnings from macro-generated code in utoipa derive
#![allow(clippy::needless_for_each)]

use axum::Json;
use utoipa::OpenApi;

use crate::handlers;

/// OpenAPI documentation for Skycast
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Skycast API",
        description = "Current weather and a short forecast for US zipcodes and world cities",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    tags(
        (name = "health", description = "Liveness endpoint"),
        (name = "weather", description = "Forecast lookup")
    ),
    paths(
        handlers::health::health_check,
        handlers::weather::get_weather,
    ),
    components(
        schemas(
            handlers::health::HealthResponse,
            application::ForecastRequest,
            application::ForecastResponse,
            application::DailyForecastView,
            application::UnitsView,
            crate::error::ErrorResponse,
        )
    )
)]
#[derive(Debug)]
pub struct ApiDoc;

/// `GET /api-docs/openapi.json`
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/api/weather"));
    }

    #[test]
    fn document_serializes() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();
        assert_eq!(json["info"]["title"], "Skycast API");
        assert!(json["components"]["schemas"]["ForecastResponse"].is_object());
    }
}
