//! Closed weather condition classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse weather classification every provider code maps into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Snow,
    Thunderstorm,
    Drizzle,
    Mist,
    Haze,
    Fog,
    #[default]
    Unknown,
}

impl WeatherCondition {
    /// Lowercase tag used in responses
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Drizzle => "drizzle",
            Self::Mist => "mist",
            Self::Haze => "haze",
            Self::Fog => "fog",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
