//! Entities - weather readings and forecasts built from value objects

mod daily_forecast;
mod weather_forecast;
mod weather_observation;

pub use daily_forecast::DailyForecastEntry;
pub use weather_forecast::{MAX_FORECAST_DAYS, MIN_FORECAST_DAYS, WeatherForecast};
pub use weather_observation::{WIND_DIRECTION_UNAVAILABLE, WeatherObservation, compass_point};
