//! Integration tests for HTTP handlers
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{ApplicationError, ForecastService, GeocodingPort, WeatherPort};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{NaiveDate, Utc};
use domain::{
    DailyForecastEntry, GeoLocation, Location, Percentage, Temperature, WeatherCondition,
    WeatherForecast, WeatherObservation,
};
use infrastructure::ServerConfig;
use presentation_http::{AppState, create_app};
use serde_json::{Value, json};

/// Geocoder resolving every request to fixed coordinates, or failing
struct StubGeocoding {
    failure: Option<fn() -> ApplicationError>,
    calls: AtomicUsize,
}

#[async_trait]
impl GeocodingPort for StubGeocoding {
    async fn resolve(&self, location: &Location) -> Result<Location, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        let resolved = if location.zipcode().is_some() {
            Location::new(
                "Beverly Hills",
                Some("California".to_string()),
                Some("US".to_string()),
                location.zipcode().map(str::to_string),
            )?
        } else {
            location.clone()
        };
        Ok(resolved.with_coordinates(GeoLocation::new(34.09, -118.41)?))
    }
}

/// Weather provider returning a fixed three-day forecast, or failing
struct StubWeather {
    failure: Option<fn() -> ApplicationError>,
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn fetch(&self, location: &Location) -> Result<WeatherForecast, ApplicationError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        let day0 = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let current = WeatherObservation {
            location: location.clone(),
            temperature: Temperature::celsius(20.0),
            feels_like: Temperature::celsius(21.0),
            humidity: Percentage::clamped(55),
            pressure: 1015,
            visibility_km: 10.0,
            wind_speed_kmh: 12.0,
            wind_direction: Some(180),
            condition: WeatherCondition::Clear,
            description: "Clear sky".to_string(),
            observed_at: day0.and_hms_opt(9, 15, 0).unwrap(),
        };
        let daily = (0..3u64)
            .map(|i| DailyForecastEntry {
                date: day0 + chrono::Days::new(i),
                high: Temperature::celsius(25.0),
                low: Temperature::celsius(15.0),
                condition: WeatherCondition::Clouds,
                description: "Partly cloudy".to_string(),
                humidity: Percentage::clamped(50),
                wind_speed_kmh: 10.0,
                precipitation_chance: Percentage::clamped(20),
            })
            .collect();
        Ok(WeatherForecast::new(location.clone(), current, daily, Utc::now())?)
    }
}

struct Harness {
    server: TestServer,
    geocoding: Arc<StubGeocoding>,
}

fn harness(
    geocoding_failure: Option<fn() -> ApplicationError>,
    weather_failure: Option<fn() -> ApplicationError>,
) -> Harness {
    let geocoding = Arc::new(StubGeocoding {
        failure: geocoding_failure,
        calls: AtomicUsize::new(0),
    });
    let weather = Arc::new(StubWeather {
        failure: weather_failure,
    });
    let service = ForecastService::new(geocoding.clone(), weather);
    let state = AppState::new(service).expect("templates compile");
    let app = create_app(state, &ServerConfig::default());
    Harness {
        server: TestServer::new(app).expect("test server"),
        geocoding,
    }
}

fn ok_harness() -> Harness {
    harness(None, None)
}

// ============================================================================
// Health & docs
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let h = ok_harness();
    let response = h.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let h = ok_harness();
    let response = h.server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert!(body["paths"]["/api/weather"].is_object());
}

// ============================================================================
// JSON API
// ============================================================================

#[tokio::test]
async fn api_zipcode_success() {
    let h = ok_harness();
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "90210" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["location"], "Beverly Hills, California 90210");
    assert_eq!(body["current_temperature"], "68.0°F");
    assert_eq!(body["wind_direction"], "S");
    assert_eq!(body["units"]["temperature"], "fahrenheit");
    assert_eq!(body["daily_forecasts"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["timestamp"], "2024-06-03 09:15:00");
}

#[tokio::test]
async fn api_city_success_uses_metric_units() {
    let h = ok_harness();
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "city": "Toronto", "state": "ON", "country": "Canada" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["location"], "Toronto, ON, Canada");
    assert_eq!(body["current_temperature"], "20.0°C");
    assert_eq!(body["wind_speed"], "12.0 km/h");
}

#[tokio::test]
async fn api_missing_location_is_bad_request() {
    let h = ok_harness();
    let response = h.server.post("/api/weather").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Please provide either a zipcode or city with state/country"
    );
    assert_eq!(h.geocoding.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn api_invalid_zipcode_is_bad_request() {
    let h = ok_harness();
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "ABCDE" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid location format: Invalid zipcode format: ABCDE"
    );
}

#[tokio::test]
async fn api_malformed_json_is_bad_request() {
    let h = ok_harness();
    let response = h
        .server
        .post("/api/weather")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
}

#[tokio::test]
async fn api_location_not_found_is_404() {
    let h = harness(
        Some(|| ApplicationError::LocationNotFound("Zipcode not found: 00000".into())),
        None,
    );
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "00000" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Location not found: Zipcode not found: 00000");
}

#[tokio::test]
async fn api_weather_unavailable_is_503() {
    let h = harness(
        None,
        Some(|| ApplicationError::WeatherDataUnavailable("Weather service error: 500".into())),
    );
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "90210" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn api_network_error_is_503() {
    let h = harness(Some(|| ApplicationError::Network("Request timed out".into())), None);
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "90210" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["error"], "Network error: Request timed out");
}

#[tokio::test]
async fn api_internal_error_is_500() {
    let h = harness(None, Some(|| ApplicationError::Internal("boom".into())));
    let response = h
        .server
        .post("/api/weather")
        .json(&json!({ "zipcode": "90210" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

// ============================================================================
// HTML interface
// ============================================================================

#[tokio::test]
async fn index_renders_form() {
    let h = ok_harness();
    let response = h.server.get("/").await;
    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("name=\"zipcode\""));
    assert!(!html.contains("class=\"flash\""));
}

#[tokio::test]
async fn index_shows_flash_message() {
    let h = ok_harness();
    let response = h
        .server
        .get("/")
        .add_query_param("error", "Network error: down")
        .await;
    response.assert_status_ok();
    assert!(response.text().contains("Network error: down"));
}

#[tokio::test]
async fn form_success_renders_results() {
    let h = ok_harness();
    let response = h
        .server
        .post("/weather")
        .form(&[("zipcode", "90210"), ("city", ""), ("state", ""), ("country", "")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Beverly Hills, California 90210"));
    assert!(html.contains("3-Day Forecast"));
}

#[tokio::test]
async fn form_fields_are_trimmed_before_lookup() {
    let h = ok_harness();
    let response = h
        .server
        .post("/weather")
        .form(&[("zipcode", " 90210 "), ("city", "  "), ("state", ""), ("country", "")])
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Beverly Hills, California 90210"));
    assert!(!html.contains("California  90210"));
    assert_eq!(h.geocoding.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn form_blank_city_redirects_without_lookup() {
    let h = ok_harness();
    let response = h
        .server
        .post("/weather")
        .form(&[("zipcode", "   "), ("city", " \t "), ("state", "CA")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/?error=Please+provide+either+a+zipcode+or+city+with+state%2Fcountry"
    );
    assert_eq!(h.geocoding.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_without_location_redirects_with_flash() {
    let h = ok_harness();
    let response = h
        .server
        .post("/weather")
        .form(&[("zipcode", ""), ("city", "Paris")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/?error=Please+provide+either+a+zipcode+or+city+with+state%2Fcountry"
    );
}

#[tokio::test]
async fn form_error_redirects_with_kind_prefix() {
    let h = harness(
        Some(|| ApplicationError::LocationNotFound("Zipcode not found: 00000".into())),
        None,
    );
    let response = h
        .server
        .post("/weather")
        .form(&[("zipcode", "00000")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(
        response.header("location"),
        "/?error=Location+not+found%3A+Zipcode+not+found%3A+00000"
    );
}

#[tokio::test]
async fn get_weather_page_redirects_home() {
    let h = ok_harness();
    let response = h.server.get("/weather").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/");
}

// ============================================================================
// Fallback
// ============================================================================

#[tokio::test]
async fn unknown_page_is_html_404() {
    let h = ok_harness();
    let response = h.server.get("/nowhere").await;
    response.assert_status_not_found();
    assert!(response.text().contains("Page not found"));
}

#[tokio::test]
async fn unknown_api_route_is_json_404() {
    let h = ok_harness();
    let response = h.server.get("/api/forecast").await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], "Not found: /api/forecast");
}
