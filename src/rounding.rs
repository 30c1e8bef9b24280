//! Decimal rounding policy.
//!
//! Converted values are optionally rounded to a number of decimal places.
//! Callers that speak in plain integers pass a "round by" count where
//! [`NO_ROUNDING`] (zero) means the value is left untouched, *not* rounded to
//! an integer. [`Precision`] makes that distinction explicit.
//!
//! Midpoints are resolved with round-half-to-even (banker's rounding):
//! `0.125` rounds to `0.12` and `0.375` rounds to `0.38` at two places.

/// Round-by value meaning "leave the result unrounded".
pub const NO_ROUNDING: u32 = 0;

/// Largest power of ten representable as a finite `f64`.
const MAX_DECIMAL_PLACES: u32 = 308;

/// Magnitude from which every `f64` has no fractional part.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// How a converted value should be rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Return the raw result.
    #[default]
    Unrounded,
    /// Round to this many decimal places. `DecimalPlaces(0)` rounds to an
    /// integer.
    DecimalPlaces(u32),
}

impl Precision {
    /// Create from a round-by count, treating [`NO_ROUNDING`] as unrounded.
    pub fn from_round_by(round_by: u32) -> Self {
        match round_by {
            NO_ROUNDING => Self::Unrounded,
            places => Self::DecimalPlaces(places),
        }
    }

    /// Convert back to a round-by count.
    ///
    /// `DecimalPlaces(0)` has no round-by equivalent and returns `None`.
    pub fn round_by(&self) -> Option<u32> {
        match self {
            Self::Unrounded => Some(NO_ROUNDING),
            Self::DecimalPlaces(0) => None,
            Self::DecimalPlaces(places) => Some(*places),
        }
    }

    /// Check if this precision rounds at all.
    pub fn is_rounded(&self) -> bool {
        matches!(self, Self::DecimalPlaces(_))
    }

    /// Apply this precision to a value.
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Unrounded => value,
            Self::DecimalPlaces(places) => round_to(value, *places),
        }
    }
}

/// Round `value` to `places` decimal places, ties to even.
///
/// Non-finite values are returned unchanged, as are values that already
/// carry no digits beyond `places` (their scaled form is an exact integer
/// or would overflow).
///
/// # Arguments
///
/// * `value` - The value to round
/// * `places` - Number of decimal places to keep
///
/// # Returns
///
/// The nearest value with at most `places` decimal places
///
/// # Example
///
/// ```
/// use temp_converter::round_to;
///
/// assert_eq!(round_to(36.666_666, 2), 36.67);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() || places > MAX_DECIMAL_PLACES {
        return value;
    }

    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    // Past 2^52 every f64 is already an integer
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return value;
    }

    scaled.round_ties_even() / factor
}
