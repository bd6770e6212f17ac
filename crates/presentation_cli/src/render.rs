//! Plain-text rendering of forecasts and errors

use std::fmt::Write;

use application::{ApplicationError, ForecastResponse};

const RULE_WIDTH: usize = 40;

/// Printed when the arguments name no usable location
pub const USAGE_HINT: &str = "❌ Error: Please provide either a zipcode or city with state/country
Examples:
  skycast-cli weather --zipcode 90210
  skycast-cli weather --city 'Los Angeles' --state 'CA'
  skycast-cli weather --city 'Toronto' --state 'ON' --country 'CA'";

/// Capitalize the first letter of every word
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// One-line error message, prefixed by the error kind
pub fn render_error(err: &ApplicationError) -> String {
    format!("❌ {}", err.user_message())
}

/// Full forecast report
pub fn render_forecast(response: &ForecastResponse) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "📍 Location: {}", response.location);
    let _ = writeln!(out, "🕐 Last updated: {}", response.timestamp);
    let _ = writeln!(out);

    let _ = writeln!(out, "🌡️  Current Weather");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Temperature: {}", response.current_temperature);
    let _ = writeln!(out, "Feels like: {}", response.feels_like);
    let _ = writeln!(out, "Condition: {}", title_case(&response.description));
    let _ = writeln!(out, "Humidity: {}%", response.humidity);
    let _ = writeln!(out, "Pressure: {} hPa", response.pressure);
    let _ = writeln!(out, "Visibility: {}", response.visibility);
    let _ = writeln!(
        out,
        "Wind: {} {}",
        response.wind_speed, response.wind_direction
    );
    let _ = writeln!(out);

    if !response.daily_forecasts.is_empty() {
        let _ = writeln!(out, "📅 {}-Day Forecast", response.daily_forecasts.len());
        let _ = writeln!(out, "{rule}");
        for day in &response.daily_forecasts {
            let _ = writeln!(
                out,
                "{:<10} {:<8} {:<8} {}",
                day.day_name,
                day.high_temperature,
                day.low_temperature,
                title_case(&day.description)
            );
            let _ = writeln!(
                out,
                "{:10} Humidity: {}% | Wind: {} | Rain: {}",
                "", day.humidity, day.wind_speed, day.precipitation_chance
            );
            let _ = writeln!(out);
        }
    }

    let _ = write!(
        out,
        "📏 Units: Temperature in {}, Speed in {}, Distance in {}",
        response.units.temperature, response.units.speed, response.units.distance
    );
    out
}
