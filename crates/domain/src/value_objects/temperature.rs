//! Temperature value object with unit conversion

use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Lowercase unit name, as exposed in responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Degree glyph for display
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A temperature reading in a specific unit
///
/// # Examples
///
/// ```
/// use domain::value_objects::{Temperature, TemperatureUnit};
///
/// let t = Temperature::celsius(100.0);
/// assert!((t.to_fahrenheit() - 212.0).abs() < 1e-9);
/// assert_eq!(t.to_unit(TemperatureUnit::Fahrenheit).to_string(), "212.0°F");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    value: f64,
    unit: TemperatureUnit,
}

impl Temperature {
    #[must_use]
    pub const fn new(value: f64, unit: TemperatureUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    #[must_use]
    pub const fn fahrenheit(value: f64) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub const fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    /// Value in degrees Celsius
    #[must_use]
    pub fn to_celsius(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value,
            TemperatureUnit::Fahrenheit => (self.value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Value in degrees Fahrenheit
    #[must_use]
    pub fn to_fahrenheit(&self) -> f64 {
        match self.unit {
            TemperatureUnit::Celsius => self.value * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Fahrenheit => self.value,
        }
    }

    /// Convert into `unit`; returns an identical value when already in `unit`
    #[must_use]
    pub fn to_unit(&self, unit: TemperatureUnit) -> Self {
        if unit == self.unit {
            return *self;
        }
        match unit {
            TemperatureUnit::Celsius => Self::celsius(self.to_celsius()),
            TemperatureUnit::Fahrenheit => Self::fahrenheit(self.to_fahrenheit()),
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}{}", self.value, self.unit.symbol())
    }
}
