//! Temperature scales.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};

/// One of the three supported temperature scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scale {
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
    /// Kelvin.
    Kelvin,
}

impl Scale {
    /// All scales in display order.
    pub const ALL: [Scale; 3] = [Scale::Fahrenheit, Scale::Celsius, Scale::Kelvin];

    /// Get a human-readable name for this scale.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "Fahrenheit",
            Self::Celsius => "Celsius",
            Self::Kelvin => "Kelvin",
        }
    }

    /// Get the unit symbol for this scale.
    ///
    /// Kelvin is an absolute scale and carries no degree sign.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
            Self::Kelvin => "K",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = Error;

    /// Parse a scale from its name (case-insensitive) or unit symbol.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|scale| {
                scale.name().eq_ignore_ascii_case(trimmed) || scale.symbol() == trimmed
            })
            .ok_or_else(|| {
                debug!("No temperature scale named {:?}", s);
                Error::UnknownScale {
                    name: s.to_string(),
                }
            })
    }
}
