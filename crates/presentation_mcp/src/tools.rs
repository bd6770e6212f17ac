//! Weather tools offered through `tools/list` and `tools/call`

use std::{fmt::Write, sync::Arc};

use application::{ApplicationError, ErrorKind, ForecastRequest, ForecastResponse, ForecastService};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const GET_WEATHER_BY_ZIPCODE: &str = "get_weather_by_zipcode";
pub const GET_WEATHER_BY_CITY: &str = "get_weather_by_city";
pub const GET_WEATHER_SUMMARY: &str = "get_weather_summary";

/// Failures that prevent a tool from running at all
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },
}

/// Tool entry in a `tools/list` result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Content block of a tool result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Result of a `tools/call`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
    pub is_error: bool,
}

impl ToolResult {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![ToolContent::Text { text }],
            is_error,
        }
    }

    /// Text of the first content block
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|ToolContent::Text { text }| text.as_str())
    }
}

/// Arguments of `get_weather_by_zipcode`
#[derive(Debug, Deserialize, JsonSchema)]
struct ZipcodeArgs {
    /// US zipcode (e.g., "90210" or "90210-1234")
    zipcode: String,
}

/// Arguments of `get_weather_by_city`
#[derive(Debug, Deserialize, JsonSchema)]
struct CityArgs {
    /// City name (e.g., "Los Angeles")
    city: String,
    /// State or province (e.g., "CA" or "Ontario")
    #[serde(default)]
    state: Option<String>,
    /// Country name or code (e.g., "USA", "Canada", "UK")
    #[serde(default)]
    country: Option<String>,
}

/// Arguments of `get_weather_summary`
#[derive(Debug, Deserialize, JsonSchema)]
struct SummaryArgs {
    /// Zipcode, "city, state", or "city, state, country"
    location_query: String,
}

fn input_schema<T: JsonSchema>() -> Value {
    schema_for!(T).to_value()
}

/// Descriptors for every tool, in a stable order
#[must_use]
pub fn tool_descriptors() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: GET_WEATHER_BY_ZIPCODE,
            description: "Get current weather and forecast by US zipcode",
            input_schema: input_schema::<ZipcodeArgs>(),
        },
        ToolDescriptor {
            name: GET_WEATHER_BY_CITY,
            description: "Get current weather and forecast by city, state, and country",
            input_schema: input_schema::<CityArgs>(),
        },
        ToolDescriptor {
            name: GET_WEATHER_SUMMARY,
            description: "Get a concise, human-readable weather summary for any location",
            input_schema: input_schema::<SummaryArgs>(),
        },
    ]
}

/// Turn a free-form query into a request
///
/// Parts are comma separated. A single part made of digits and hyphens is a
/// zipcode; any other single part is a bare city.
#[must_use]
pub fn parse_location_query(query: &str) -> ForecastRequest {
    let parts: Vec<&str> = query.split(',').map(str::trim).collect();
    let owned = |i: usize| parts.get(i).map(|p| (*p).to_string());

    match parts.as_slice() {
        [single] if looks_like_zipcode(single) => ForecastRequest {
            zipcode: Some((*single).to_string()),
            ..ForecastRequest::default()
        },
        [_] => ForecastRequest {
            city: owned(0),
            ..ForecastRequest::default()
        },
        [_, _] => ForecastRequest {
            city: owned(0),
            state: owned(1),
            ..ForecastRequest::default()
        },
        _ => ForecastRequest {
            zipcode: None,
            city: owned(0),
            state: owned(1),
            country: owned(2),
        },
    }
}

fn looks_like_zipcode(part: &str) -> bool {
    let mut digits = part.chars().filter(|c| *c != '-').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Error text for the city tool, prefixed with the failure kind
#[must_use]
pub fn location_error_message(error: &ApplicationError) -> String {
    error.user_message()
}

/// Error text for the zipcode tool
///
/// Validation and lookup failures name the zipcode; other kinds fall back
/// to the generic wording.
#[must_use]
pub fn zipcode_error_message(error: &ApplicationError) -> String {
    match error.kind() {
        ErrorKind::InvalidLocationFormat => format!("Invalid zipcode format: {error}"),
        ErrorKind::LocationNotFound => format!("Zipcode not found: {error}"),
        _ => error.user_message(),
    }
}

/// Structured tool payload for a forecast outcome
#[must_use]
pub fn structured_payload(
    outcome: &Result<ForecastResponse, ApplicationError>,
    error_message: fn(&ApplicationError) -> String,
) -> Value {
    match outcome {
        Ok(response) => json!({
            "status": "success",
            "location": response.location,
            "current": {
                "temperature": response.current_temperature,
                "feels_like": response.feels_like,
                "condition": response.condition,
                "description": response.description,
                "humidity": response.humidity,
                "pressure": response.pressure,
                "visibility": response.visibility,
                "wind_speed": response.wind_speed,
                "wind_direction": response.wind_direction,
                "timestamp": response.timestamp,
            },
            "forecast": response.daily_forecasts,
            "units": response.units,
        }),
        Err(e) => json!({
            "status": "error",
            "error": error_message(e),
        }),
    }
}

/// Multi-line summary of a forecast
#[must_use]
pub fn render_summary(response: &ForecastResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Weather for {}:", response.location);
    let _ = writeln!(
        out,
        "Current: {} ({})",
        response.current_temperature, response.description
    );
    let _ = writeln!(out, "Feels like: {}", response.feels_like);
    let _ = writeln!(out, "Humidity: {}%", response.humidity);
    let _ = writeln!(
        out,
        "Wind: {} {}",
        response.wind_speed, response.wind_direction
    );
    let _ = writeln!(out);

    if !response.daily_forecasts.is_empty() {
        let _ = writeln!(out, "{}-Day Forecast:", response.daily_forecasts.len());
        for day in &response.daily_forecasts {
            let _ = writeln!(
                out,
                "{}: {}/{} - {}",
                day.day_name, day.high_temperature, day.low_temperature, day.description
            );
        }
    }

    let _ = write!(
        out,
        "\nUnits: {}, {}, {}",
        response.units.temperature, response.units.speed, response.units.distance
    );
    let _ = write!(out, "\nLast updated: {}", response.timestamp);
    out
}

/// Dispatches tool calls to the forecast service
#[derive(Debug, Clone)]
pub struct WeatherTools {
    service: Arc<ForecastService>,
}

impl WeatherTools {
    #[must_use]
    pub fn new(service: Arc<ForecastService>) -> Self {
        Self { service }
    }

    /// Run a tool by name
    ///
    /// Forecast failures are reported inside the result with `is_error`
    /// set; only unknown tools and malformed arguments are errors here.
    #[instrument(skip(self, arguments))]
    pub async fn call(&self, name: &str, arguments: Value) -> Result<ToolResult, ToolCallError> {
        match name {
            GET_WEATHER_BY_ZIPCODE => {
                let args: ZipcodeArgs = parse_args(GET_WEATHER_BY_ZIPCODE, arguments)?;
                info!(zipcode = %args.zipcode, "Getting weather by zipcode");
                Ok(self
                    .structured(
                        &ForecastRequest {
                            zipcode: Some(args.zipcode),
                            ..ForecastRequest::default()
                        },
                        zipcode_error_message,
                    )
                    .await)
            },
            GET_WEATHER_BY_CITY => {
                let args: CityArgs = parse_args(GET_WEATHER_BY_CITY, arguments)?;
                info!(city = %args.city, state = ?args.state, country = ?args.country, "Getting weather by city");
                Ok(self
                    .structured(
                        &ForecastRequest {
                            zipcode: None,
                            city: Some(args.city),
                            state: args.state,
                            country: args.country,
                        },
                        location_error_message,
                    )
                    .await)
            },
            GET_WEATHER_SUMMARY => {
                let args: SummaryArgs = parse_args(GET_WEATHER_SUMMARY, arguments)?;
                info!(query = %args.location_query, "Getting weather summary");
                Ok(self.summary(&args.location_query).await)
            },
            other => Err(ToolCallError::UnknownTool(other.to_string())),
        }
    }

    async fn structured(
        &self,
        request: &ForecastRequest,
        error_message: fn(&ApplicationError) -> String,
    ) -> ToolResult {
        let outcome = self.service.get_forecast(request).await;
        if let Err(e) = &outcome {
            warn!(error = %e, kind = ?e.kind(), "Forecast tool failed");
        }
        let payload = structured_payload(&outcome, error_message);
        ToolResult::text(payload.to_string(), outcome.is_err())
    }

    async fn summary(&self, query: &str) -> ToolResult {
        let request = parse_location_query(query);
        match self.service.get_forecast(&request).await {
            Ok(response) => ToolResult::text(render_summary(&response), false),
            Err(e) => {
                warn!(error = %e, "Summary tool failed");
                ToolResult::text(format!("Error getting weather: {e}"), true)
            },
        }
    }
}

fn parse_args<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolCallError> {
    let arguments = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolCallError::InvalidArguments {
        tool,
        reason: e.to_string(),
    })
}
