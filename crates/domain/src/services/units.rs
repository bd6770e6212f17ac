//! Unit selection by location
//!
//! US locations are shown in Fahrenheit, mph and miles; everything else in
//! Celsius, km/h and km. Only temperatures are converted. Wind speed and
//! visibility keep their canonical km/h and km magnitudes and change label
//! only.

use serde::{Deserialize, Serialize};

use crate::value_objects::{DistanceUnit, Location, SpeedUnit, TemperatureUnit};

#[must_use]
pub fn temperature_unit(location: &Location) -> TemperatureUnit {
    if location.is_us_location() {
        TemperatureUnit::Fahrenheit
    } else {
        TemperatureUnit::Celsius
    }
}

#[must_use]
pub fn speed_unit(location: &Location) -> SpeedUnit {
    if location.is_us_location() {
        SpeedUnit::MilesPerHour
    } else {
        SpeedUnit::KilometersPerHour
    }
}

#[must_use]
pub fn distance_unit(location: &Location) -> DistanceUnit {
    if location.is_us_location() {
        DistanceUnit::Miles
    } else {
        DistanceUnit::Kilometers
    }
}

/// The unit triple used to present a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSystem {
    pub temperature: TemperatureUnit,
    pub speed: SpeedUnit,
    pub distance: DistanceUnit,
}

impl UnitSystem {
    #[must_use]
    pub fn for_location(location: &Location) -> Self {
        Self {
            temperature: temperature_unit(location),
            speed: speed_unit(location),
            distance: distance_unit(location),
        }
    }
}
