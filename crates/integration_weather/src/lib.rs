//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Forecast API (<https://open-meteo.com>).
//! Provides current conditions and a short daily outlook without requiring
//! an API key. Values are requested in Celsius, km/h and metres.

pub mod client;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, DailyForecast, Forecast, WmoCode};
