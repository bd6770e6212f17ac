//! Forecast service - resolve a location and present its weather

use std::{fmt, sync::Arc};

use domain::{
    DailyForecastEntry, Location, Temperature, TemperatureUnit, WeatherForecast,
    services::{UnitSystem, validate_city_state, validate_city_state_country, validate_zipcode},
};
use tracing::{debug, info, instrument};

use crate::{
    dto::{DailyForecastView, ForecastRequest, ForecastResponse, UnitsView},
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service that turns a location request into a display-ready forecast
pub struct ForecastService {
    geocoding: Arc<dyn GeocodingPort>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService").finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self { geocoding, weather }
    }

    /// Validate, resolve, fetch and normalize in one pass
    ///
    /// Geocoding and weather errors are returned unchanged. Invalid input
    /// fails before either port is called.
    #[instrument(skip(self, request), fields(
        zipcode = ?request.zipcode,
        city = ?request.city,
        state = ?request.state,
        country = ?request.country,
    ))]
    pub async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, ApplicationError> {
        if !request.has_location() {
            return Err(ApplicationError::InvalidLocationFormat(
                "Request must include either zipcode or city with state/country".to_string(),
            ));
        }

        let location = build_location(request)?;
        validate_location_format(&location)?;

        let resolved = self.geocoding.resolve(&location).await?;
        debug!(location = %resolved, lat = ?resolved.latitude(), lon = ?resolved.longitude(), "Location resolved");

        let forecast = self.weather.fetch(&resolved).await?;
        let response = present(&forecast);

        info!(location = %response.location, days = response.daily_forecasts.len(), "Forecast ready");
        Ok(response)
    }
}

fn build_location(request: &ForecastRequest) -> Result<Location, ApplicationError> {
    Location::new(
        request.city.clone().unwrap_or_default(),
        request.state.clone(),
        request.country.clone(),
        request.zipcode.clone(),
    )
    .map_err(|e| ApplicationError::InvalidLocationFormat(e.to_string()))
}

fn validate_location_format(location: &Location) -> Result<(), ApplicationError> {
    let city = location.city();
    let has_city = !city.is_empty();

    match (location.zipcode(), location.state(), location.country()) {
        (Some(zipcode), _, _) => {
            if !validate_zipcode(zipcode) {
                return Err(ApplicationError::InvalidLocationFormat(format!(
                    "Invalid zipcode format: {zipcode}"
                )));
            }
        },
        (None, Some(state), None) if has_city => {
            if !validate_city_state(city, state) {
                return Err(ApplicationError::InvalidLocationFormat(
                    "City and state cannot be empty".to_string(),
                ));
            }
        },
        (None, Some(state), Some(country)) if has_city => {
            if !validate_city_state_country(city, state, country) {
                return Err(ApplicationError::InvalidLocationFormat(
                    "City, state, and country cannot be empty".to_string(),
                ));
            }
        },
        _ => {
            return Err(ApplicationError::InvalidLocationFormat(
                "Invalid location format".to_string(),
            ));
        },
    }
    Ok(())
}

fn present(forecast: &WeatherForecast) -> ForecastResponse {
    let units = UnitSystem::for_location(forecast.location());
    let current = forecast.current();
    let show = |t: &Temperature| t.to_unit(units.temperature).to_string();

    ForecastResponse {
        location: forecast.location().display_name(),
        current_temperature: show(&current.temperature),
        feels_like: show(&current.feels_like),
        condition: current.condition.as_str().to_string(),
        description: current.description.clone(),
        humidity: current.humidity.value(),
        pressure: current.pressure,
        visibility: format!("{:.1} {}", current.visibility_km, units.distance),
        wind_speed: format!("{:.1} {}", current.wind_speed_kmh, units.speed),
        wind_direction: current.wind_direction_text().to_string(),
        timestamp: current.observed_at.format(TIMESTAMP_FORMAT).to_string(),
        daily_forecasts: forecast
            .daily()
            .iter()
            .map(|day| present_day(day, &units))
            .collect(),
        units: UnitsView {
            temperature: units.temperature.as_str().to_string(),
            speed: units.speed.as_str().to_string(),
            distance: units.distance.as_str().to_string(),
        },
    }
}

fn present_day(day: &DailyForecastEntry, units: &UnitSystem) -> DailyForecastView {
    let unit: TemperatureUnit = units.temperature;
    DailyForecastView {
        date: day.date.format(DATE_FORMAT).to_string(),
        day_name: day.day_name(),
        high_temperature: day.high.to_unit(unit).to_string(),
        low_temperature: day.low.to_unit(unit).to_string(),
        condition: day.condition.as_str().to_string(),
        description: day.description.clone(),
        humidity: day.humidity.value(),
        wind_speed: format!("{:.1} {}", day.wind_speed_kmh, units.speed),
        precipitation_chance: day.precipitation_chance.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockGeocodingPort, MockWeatherPort};
    use chrono::{Days, NaiveDate, Utc};
    use domain::{GeoLocation, Percentage, WeatherCondition, WeatherObservation};

    fn fixed_forecast(location: &Location) -> WeatherForecast {
        let day0 = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
        let current = WeatherObservation {
            location: location.clone(),
            temperature: Temperature::celsius(25.0),
            feels_like: Temperature::celsius(26.5),
            humidity: Percentage::clamped(45),
            pressure: 1013,
            visibility_km: 16.09,
            wind_speed_kmh: 11.26,
            wind_direction: Some(180),
            condition: WeatherCondition::Clear,
            description: "Clear sky".to_string(),
            observed_at: day0.and_hms_opt(14, 30, 0).expect("valid time"),
        };
        let daily = (0..3)
            .map(|offset| DailyForecastEntry {
                date: day0 + Days::new(offset),
                high: Temperature::celsius(30.0),
                low: Temperature::celsius(20.0),
                condition: WeatherCondition::Clouds,
                description: "Partly cloudy".to_string(),
                humidity: Percentage::clamped(50),
                wind_speed_kmh: 15.0,
                precipitation_chance: Percentage::clamped(10),
            })
            .collect();
        WeatherForecast::new(location.clone(), current, daily, Utc::now()).expect("valid forecast")
    }

    fn geocoder_returning(
        city: &'static str,
        state: &'static str,
        country: &'static str,
        lat: f64,
        lon: f64,
    ) -> MockGeocodingPort {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_resolve().times(1).returning(move |input| {
            let resolved = Location::new(
                city,
                Some(state.to_string()),
                Some(country.to_string()),
                input.zipcode().map(ToString::to_string),
            )?;
            Ok(resolved.with_coordinates(GeoLocation::new(lat, lon)?))
        });
        geocoding
    }

    fn weather_returning_fixed() -> MockWeatherPort {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_fetch()
            .times(1)
            .returning(|location| Ok(fixed_forecast(location)));
        weather
    }

    fn untouched_ports() -> ForecastService {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_resolve().never();
        let mut weather = MockWeatherPort::new();
        weather.expect_fetch().never();
        ForecastService::new(Arc::new(geocoding), Arc::new(weather))
    }

    #[tokio::test]
    async fn zipcode_request_uses_imperial_units() {
        let service = ForecastService::new(
            Arc::new(geocoder_returning("Beverly Hills", "California", "US", 34.09, -118.41)),
            Arc::new(weather_returning_fixed()),
        );

        let response = service
            .get_forecast(&ForecastRequest::zipcode("90210"))
            .await
            .expect("forecast");

        assert!(response.location.contains("90210"));
        assert_eq!(response.location, "Beverly Hills, California 90210");
        assert_eq!(response.units.temperature, "fahrenheit");
        assert_eq!(response.units.speed, "mph");
        assert_eq!(response.units.distance, "miles");
        assert_eq!(response.current_temperature, "77.0°F");
        assert_eq!(response.feels_like, "79.7°F");
    }

    #[tokio::test]
    async fn toronto_request_uses_metric_units() {
        let service = ForecastService::new(
            Arc::new(geocoder_returning("Toronto", "Ontario", "Canada", 43.65, -79.38)),
            Arc::new(weather_returning_fixed()),
        );

        let request = ForecastRequest::city("Toronto", Some("ON".into()), Some("Canada".into()));
        let response = service.get_forecast(&request).await.expect("forecast");

        assert_eq!(response.location, "Toronto, Ontario, Canada");
        assert_eq!(response.units.temperature, "celsius");
        assert_eq!(response.units.speed, "km/h");
        assert_eq!(response.units.distance, "km");
        assert_eq!(response.current_temperature, "25.0°C");
    }

    #[tokio::test]
    async fn empty_request_fails_without_calling_ports() {
        let service = untouched_ports();

        let err = service
            .get_forecast(&ForecastRequest::default())
            .await
            .expect_err("must fail");

        assert!(matches!(err, ApplicationError::InvalidLocationFormat(_)));
    }

    #[tokio::test]
    async fn geocoding_not_found_is_propagated() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_resolve()
            .times(1)
            .returning(|_| Err(ApplicationError::LocationNotFound("No results".into())));
        let mut weather = MockWeatherPort::new();
        weather.expect_fetch().never();
        let service = ForecastService::new(Arc::new(geocoding), Arc::new(weather));

        let request = ForecastRequest::city("Atlantis", Some("XX".into()), None);
        let err = service.get_forecast(&request).await.expect_err("must fail");

        match err {
            ApplicationError::LocationNotFound(msg) => assert_eq!(msg, "No results"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn weather_errors_are_propagated() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_fetch()
            .times(1)
            .returning(|_| Err(ApplicationError::Network("connection reset".into())));
        let service = ForecastService::new(
            Arc::new(geocoder_returning("Austin", "Texas", "United States", 30.27, -97.74)),
            Arc::new(weather),
        );

        let request = ForecastRequest::city("Austin", Some("TX".into()), None);
        let err = service.get_forecast(&request).await.expect_err("must fail");

        assert!(matches!(err, ApplicationError::Network(_)));
    }

    #[tokio::test]
    async fn malformed_zipcode_is_rejected() {
        let service = untouched_ports();

        let err = service
            .get_forecast(&ForecastRequest::zipcode("9021O"))
            .await
            .expect_err("must fail");

        assert_eq!(err.to_string(), "Invalid zipcode format: 9021O");
    }

    #[tokio::test]
    async fn blank_city_with_state_is_rejected() {
        let service = untouched_ports();

        let request = ForecastRequest::city("   ", Some("CA".into()), None);
        let err = service.get_forecast(&request).await.expect_err("must fail");

        assert_eq!(err.to_string(), "City and state cannot be empty");
    }

    #[tokio::test]
    async fn blank_country_is_rejected() {
        let service = untouched_ports();

        let request = ForecastRequest::city("Toronto", Some("ON".into()), Some("  ".into()));
        let err = service.get_forecast(&request).await.expect_err("must fail");

        assert_eq!(err.to_string(), "City, state, and country cannot be empty");
    }

    #[tokio::test]
    async fn city_with_country_but_no_state_is_rejected() {
        let service = untouched_ports();

        let request = ForecastRequest::city("Paris", None, Some("France".into()));
        let err = service.get_forecast(&request).await.expect_err("must fail");

        assert!(matches!(err, ApplicationError::InvalidLocationFormat(_)));
        assert_eq!(err.to_string(), "Invalid location format");
    }

    #[tokio::test]
    async fn response_formats_every_field() {
        let service = ForecastService::new(
            Arc::new(geocoder_returning("Toronto", "Ontario", "Canada", 43.65, -79.38)),
            Arc::new(weather_returning_fixed()),
        );

        let request = ForecastRequest::city("Toronto", Some("ON".into()), None);
        let response = service.get_forecast(&request).await.expect("forecast");

        assert_eq!(response.condition, "clear");
        assert_eq!(response.description, "Clear sky");
        assert_eq!(response.humidity, 45);
        assert_eq!(response.pressure, 1013);
        assert_eq!(response.visibility, "16.1 km");
        assert_eq!(response.wind_speed, "11.3 km/h");
        assert_eq!(response.wind_direction, "S");
        assert_eq!(response.timestamp, "2024-06-03 14:30:00");

        assert_eq!(response.daily_forecasts.len(), 3);
        let first = &response.daily_forecasts[0];
        assert_eq!(first.date, "2024-06-03");
        assert_eq!(first.day_name, "Monday");
        assert_eq!(first.high_temperature, "30.0°C");
        assert_eq!(first.low_temperature, "20.0°C");
        assert_eq!(first.condition, "clouds");
        assert_eq!(first.humidity, 50);
        assert_eq!(first.wind_speed, "15.0 km/h");
        assert_eq!(first.precipitation_chance, "10%");
        assert_eq!(response.daily_forecasts[2].day_name, "Wednesday");
    }

    #[tokio::test]
    async fn imperial_labels_keep_canonical_magnitudes() {
        let service = ForecastService::new(
            Arc::new(geocoder_returning("Beverly Hills", "California", "US", 34.09, -118.41)),
            Arc::new(weather_returning_fixed()),
        );

        let response = service
            .get_forecast(&ForecastRequest::zipcode("90210"))
            .await
            .expect("forecast");

        assert_eq!(response.wind_speed, "11.3 mph");
        assert_eq!(response.visibility, "16.1 miles");
        assert_eq!(response.daily_forecasts[0].high_temperature, "86.0°F");
    }
}
