//! Speed and distance display units

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit label for wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "km/h")]
    KilometersPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl SpeedUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit label for visibility distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    #[serde(rename = "km")]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "miles",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
