//! Conversion formula registry.
//!
//! The set of conversions is closed: each [`Formula`] variant indexes one row
//! of a static table holding its name, its source and target scales, and the
//! function that performs it. Every formula is a pure affine transform that
//! accepts any `f64`, including values below absolute zero and non-finite
//! values, which propagate through unchanged.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scale::Scale;

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit value of the freezing point of water.
pub const FAHRENHEIT_OFFSET: f64 = 32.0;

/// A named conversion between two temperature scales.
///
/// # Example
///
/// ```
/// use temp_converter::Formula;
///
/// let kelvin = Formula::CelsiusToKelvin.apply(-40.0);
/// assert!((kelvin - 233.15).abs() < 1e-9);
///
/// let formula: Formula = "FahrenheitToCelsius".parse().unwrap();
/// assert_eq!(formula, Formula::FahrenheitToCelsius);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Formula {
    /// `(f - 32) * 5/9`
    FahrenheitToCelsius = 0,
    /// `(f - 32) * 5/9 + 273.15`
    FahrenheitToKelvin = 1,
    /// `c + 273.15`
    CelsiusToKelvin = 2,
    /// `c * 9/5 + 32`
    CelsiusToFahrenheit = 3,
    /// `k - 273.15`
    KelvinToCelsius = 4,
    /// `(k - 273.15) * 9/5 + 32`
    KelvinToFahrenheit = 5,
}

struct FormulaEntry {
    name: &'static str,
    source: Scale,
    target: Scale,
    function: fn(f64) -> f64,
}

// Row order must match the enum discriminants.
static FORMULA_TABLE: [FormulaEntry; 6] = [
    FormulaEntry {
        name: "FahrenheitToCelsius",
        source: Scale::Fahrenheit,
        target: Scale::Celsius,
        function: fahrenheit_to_celsius,
    },
    FormulaEntry {
        name: "FahrenheitToKelvin",
        source: Scale::Fahrenheit,
        target: Scale::Kelvin,
        function: fahrenheit_to_kelvin,
    },
    FormulaEntry {
        name: "CelsiusToKelvin",
        source: Scale::Celsius,
        target: Scale::Kelvin,
        function: celsius_to_kelvin,
    },
    FormulaEntry {
        name: "CelsiusToFahrenheit",
        source: Scale::Celsius,
        target: Scale::Fahrenheit,
        function: celsius_to_fahrenheit,
    },
    FormulaEntry {
        name: "KelvinToCelsius",
        source: Scale::Kelvin,
        target: Scale::Celsius,
        function: kelvin_to_celsius,
    },
    FormulaEntry {
        name: "KelvinToFahrenheit",
        source: Scale::Kelvin,
        target: Scale::Fahrenheit,
        function: kelvin_to_fahrenheit,
    },
];

impl Formula {
    /// All formulas, in registry order.
    pub const ALL: [Formula; 6] = [
        Formula::FahrenheitToCelsius,
        Formula::FahrenheitToKelvin,
        Formula::CelsiusToKelvin,
        Formula::CelsiusToFahrenheit,
        Formula::KelvinToCelsius,
        Formula::KelvinToFahrenheit,
    ];

    fn entry(&self) -> &'static FormulaEntry {
        &FORMULA_TABLE[*self as usize]
    }

    /// Apply this formula to a value in the source scale.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        (self.entry().function)(value)
    }

    /// The registered name of this formula, e.g. `"FahrenheitToCelsius"`.
    pub fn name(&self) -> &'static str {
        self.entry().name
    }

    /// Scale of the input value.
    pub fn source(&self) -> Scale {
        self.entry().source
    }

    /// Scale of the output value.
    pub fn target(&self) -> Scale {
        self.entry().target
    }

    /// The formula converting in the opposite direction.
    pub fn inverse(&self) -> Formula {
        match self {
            Self::FahrenheitToCelsius => Self::CelsiusToFahrenheit,
            Self::FahrenheitToKelvin => Self::KelvinToFahrenheit,
            Self::CelsiusToKelvin => Self::KelvinToCelsius,
            Self::CelsiusToFahrenheit => Self::FahrenheitToCelsius,
            Self::KelvinToCelsius => Self::CelsiusToKelvin,
            Self::KelvinToFahrenheit => Self::FahrenheitToKelvin,
        }
    }

    /// Find the formula converting `from` into `to`.
    ///
    /// Returns `None` when both scales are the same.
    pub fn between(from: Scale, to: Scale) -> Option<Formula> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.source() == from && formula.target() == to)
    }

    /// Look up a formula by its registered name (ASCII case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFormula`] if no formula has that name.
    pub fn from_name(name: &str) -> Result<Formula> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| {
                debug!("No formula registered as {:?}", name);
                Error::UnknownFormula {
                    name: name.to_string(),
                }
            })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - FAHRENHEIT_OFFSET) * 5.0 / 9.0
}

fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    celsius_to_kelvin(fahrenheit_to_celsius(fahrenheit))
}

fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + FAHRENHEIT_OFFSET
}

fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    celsius_to_fahrenheit(kelvin_to_celsius(kelvin))
}
