//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{handlers, openapi, state::AppState};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML interface
        .route("/", get(handlers::pages::index))
        .route(
            "/weather",
            get(handlers::pages::weather_redirect).post(handlers::pages::submit_weather),
        )
        // JSON API
        .route("/api/weather", post(handlers::weather::get_weather))
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        // Health
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::fallback::not_found)
        .with_state(state)
}

/// Router plus the middleware stack configured for the server
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let app = create_router(state).layer(DefaultBodyLimit::max(config.max_body_size_bytes));

    let app = if config.cors_enabled {
        app.layer(cors_layer(&config.allowed_origins))
    } else {
        app
    };

    app.layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            },
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}
