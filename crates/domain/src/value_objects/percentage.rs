//! Percentage value object
//!
//! Represents a validated whole percentage (0-100%), used for relative
//! humidity and precipitation probability.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Percentage;
//!
//! let p = Percentage::new(65).expect("valid percentage");
//! assert_eq!(p.value(), 65);
//! assert!(Percentage::new(101).is_err());
//! assert_eq!(Percentage::clamped(150).value(), 100);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Whole percentage in the range 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Maximum valid percentage
    pub const MAX: u8 = 100;

    /// Create a new validated percentage
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPercentage` if the value is greater than 100.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        if value > Self::MAX {
            Err(DomainError::InvalidPercentage(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Create a percentage, clamping to the valid range
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Create a percentage from a provider float, truncating and clamping
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_f64_clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.trunc().clamp(0.0, f64::from(Self::MAX)) as u8)
    }

    /// Get the value as a u8
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Percentage {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for u8 {
    fn from(p: Percentage) -> Self {
        p.0
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
