//! Three-scale temperature reading.

use std::fmt;

use crate::scale::Scale;

/// The same temperature expressed in Fahrenheit, Celsius and Kelvin.
///
/// A reading is built once per computation and never changes afterwards.
/// The Fahrenheit value is the caller-supplied base; Celsius and Kelvin are
/// derived from it under a single rounding policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureReading {
    fahrenheit: f64,
    celsius: f64,
    kelvin: f64,
}

impl TemperatureReading {
    /// Create a reading from values already expressed in each scale.
    pub const fn new(fahrenheit: f64, celsius: f64, kelvin: f64) -> Self {
        Self {
            fahrenheit,
            celsius,
            kelvin,
        }
    }

    /// Temperature in degrees Fahrenheit.
    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    /// Temperature in degrees Celsius.
    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    /// Temperature in Kelvin.
    pub fn kelvin(&self) -> f64 {
        self.kelvin
    }

    /// Temperature in the given scale.
    pub fn get(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Fahrenheit => self.fahrenheit,
            Scale::Celsius => self.celsius,
            Scale::Kelvin => self.kelvin,
        }
    }

    /// Iterate over `(scale, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Scale, f64)> + '_ {
        Scale::ALL.into_iter().map(move |scale| (scale, self.get(scale)))
    }
}

impl fmt::Display for TemperatureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} / {} {} / {} {}",
            self.fahrenheit,
            Scale::Fahrenheit.symbol(),
            self.celsius,
            Scale::Celsius.symbol(),
            self.kelvin,
            Scale::Kelvin.symbol()
        )
    }
}
