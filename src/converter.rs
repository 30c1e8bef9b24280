//! Temperature converter.
//!
//! Applies a [`Formula`] with optional rounding and assembles full
//! [`TemperatureReading`]s from a Fahrenheit base value. The converter holds
//! no state; every call depends only on its arguments, so identical inputs
//! always produce bit-identical outputs.

use tracing::trace;

use crate::formula::Formula;
use crate::reading::TemperatureReading;
use crate::rounding::{Precision, NO_ROUNDING};

/// Number of decimal places used when a reading is built with rounding on.
pub const READING_ROUND_BY: u32 = 2;

/// Converts temperatures between scales.
///
/// Implementors only provide [`convert_with`](Self::convert_with); the
/// round-by and reading operations are built on top of it.
#[cfg_attr(test, mockall::automock)]
pub trait TemperatureConverter {
    /// Apply `formula` to `value` and round the result with `precision`.
    fn convert_with(&self, value: f64, formula: Formula, precision: Precision) -> f64;

    /// Apply `formula` to `value`, rounding to `round_by` decimal places.
    ///
    /// A `round_by` of [`NO_ROUNDING`] returns the raw result.
    fn convert(&self, value: f64, formula: Formula, round_by: u32) -> f64 {
        self.convert_with(value, formula, Precision::from_round_by(round_by))
    }

    /// Build a reading from a Fahrenheit base value.
    ///
    /// When `rounding_enabled` is set, Celsius and Kelvin are rounded to
    /// [`READING_ROUND_BY`] decimal places. Fahrenheit is never rounded.
    fn build_reading(&self, base_fahrenheit: f64, rounding_enabled: bool) -> TemperatureReading {
        build_reading_with(self, base_fahrenheit, rounding_enabled)
    }
}

/// The standard converter backed by the formula registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardConverter;

impl StandardConverter {
    /// Create a new converter.
    pub const fn new() -> Self {
        Self
    }
}

impl TemperatureConverter for StandardConverter {
    #[inline]
    fn convert_with(&self, value: f64, formula: Formula, precision: Precision) -> f64 {
        precision.apply(formula.apply(value))
    }
}

/// Build a reading using any converter.
///
/// Both derived scales go through `converter` with the same precision.
pub fn build_reading_with<C>(
    converter: &C,
    base_fahrenheit: f64,
    rounding_enabled: bool,
) -> TemperatureReading
where
    C: TemperatureConverter + ?Sized,
{
    let precision = Precision::from_round_by(if rounding_enabled {
        READING_ROUND_BY
    } else {
        NO_ROUNDING
    });

    let celsius = converter.convert_with(base_fahrenheit, Formula::FahrenheitToCelsius, precision);
    let kelvin = converter.convert_with(base_fahrenheit, Formula::FahrenheitToKelvin, precision);
    let reading = TemperatureReading::new(base_fahrenheit, celsius, kelvin);

    trace!(
        base_fahrenheit,
        rounding_enabled,
        celsius,
        kelvin,
        "Built temperature reading"
    );

    reading
}

/// Apply `formula` to `value` with the standard converter.
///
/// # Arguments
///
/// * `value` - Temperature in the formula's source scale
/// * `formula` - The conversion to apply
/// * `round_by` - Decimal places to round to, or [`NO_ROUNDING`]
///
/// # Returns
///
/// Temperature in the formula's target scale
///
/// # Example
///
/// ```
/// use temp_converter::{convert, Formula, NO_ROUNDING};
///
/// assert_eq!(convert(10.0, Formula::CelsiusToKelvin, 2), 283.15);
/// assert_eq!(convert(50.0, Formula::FahrenheitToCelsius, NO_ROUNDING), 10.0);
/// ```
pub fn convert(value: f64, formula: Formula, round_by: u32) -> f64 {
    StandardConverter.convert(value, formula, round_by)
}

/// Build a reading from a Fahrenheit base value with the standard converter.
///
/// # Arguments
///
/// * `base_fahrenheit` - Temperature in degrees Fahrenheit
/// * `rounding_enabled` - Round Celsius and Kelvin to [`READING_ROUND_BY`] places
///
/// # Returns
///
/// The same temperature in all three scales
///
/// # Example
///
/// ```
/// use temp_converter::build_reading;
///
/// let reading = build_reading(98.6, true);
/// assert_eq!(reading.celsius(), 37.0);
/// assert_eq!(reading.kelvin(), 310.15);
/// ```
pub fn build_reading(base_fahrenheit: f64, rounding_enabled: bool) -> TemperatureReading {
    StandardConverter.build_reading(base_fahrenheit, rounding_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::round_to;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_convert_unrounded() {
        let raw = Formula::FahrenheitToCelsius.apply(0.0);
        assert_eq!(convert(0.0, Formula::FahrenheitToCelsius, NO_ROUNDING), raw);
        assert_eq!(raw, -17.777_777_777_777_78);
    }

    #[test]
    fn test_convert_rounds_to_places() {
        assert_eq!(convert(0.0, Formula::FahrenheitToCelsius, 1), -17.8);
        assert_eq!(convert(0.0, Formula::FahrenheitToCelsius, 2), -17.78);
        assert_eq!(convert(0.0, Formula::FahrenheitToCelsius, 3), -17.778);
    }

    #[test]
    fn test_convert_matches_round_to() {
        for f in [-459.67, -40.0, 0.0, 32.0, 50.5, 98.6, 212.0, 451.0, 1.0e6] {
            let raw = convert(f, Formula::FahrenheitToCelsius, NO_ROUNDING);
            for round_by in 1..=3 {
                assert_eq!(
                    convert(f, Formula::FahrenheitToCelsius, round_by),
                    round_to(raw, round_by)
                );
            }
        }
    }

    #[test]
    fn test_celsius_to_kelvin_rounded() {
        let cases = [(0.0, 273.15), (10.0, 283.15), (-40.0, 233.15), (100.0, 373.15)];
        for (celsius, kelvin) in cases {
            assert_eq!(convert(celsius, Formula::CelsiusToKelvin, 2), kelvin);
        }
    }

    #[test]
    fn test_celsius_to_kelvin_table() {
        // Every whole degree from -140°C to 110°C lands on x.15 K
        for celsius in -140..=110 {
            let actual = convert(f64::from(celsius), Formula::CelsiusToKelvin, 2);
            let expected = f64::from(celsius * 100 + 27315) / 100.0;
            assert_eq!(actual, expected, "{celsius}°C");
        }
    }

    #[test]
    fn test_convert_non_finite() {
        for formula in Formula::ALL {
            for round_by in 0..4 {
                assert!(convert(f64::NAN, formula, round_by).is_nan());
            }
        }
        assert_eq!(
            convert(f64::INFINITY, Formula::FahrenheitToCelsius, 0),
            f64::INFINITY
        );
        assert_eq!(
            convert(f64::INFINITY, Formula::FahrenheitToCelsius, 2),
            f64::INFINITY
        );
    }

    #[test]
    fn test_build_reading_freezing() {
        let reading = build_reading(32.0, false);
        assert_eq!(reading.fahrenheit(), 32.0);
        assert_eq!(reading.celsius(), 0.0);
        assert!((reading.kelvin() - 273.15).abs() < TOLERANCE);
    }

    #[test]
    fn test_build_reading_boiling() {
        let reading = build_reading(212.0, false);
        assert_eq!(reading.fahrenheit(), 212.0);
        assert!((reading.celsius() - 100.0).abs() < TOLERANCE);
        assert!((reading.kelvin() - 373.15).abs() < TOLERANCE);
    }

    #[test]
    fn test_build_reading_rounded() {
        assert_eq!(
            build_reading(98.6, true),
            TemperatureReading::new(98.6, 37.0, 310.15)
        );
        assert_eq!(
            build_reading(0.0, true),
            TemperatureReading::new(0.0, -17.78, 255.37)
        );
    }

    #[test]
    fn test_build_reading_never_rounds_base() {
        let reading = build_reading(98.765_4, true);
        assert_eq!(reading.fahrenheit(), 98.765_4);
        assert_eq!(reading.celsius(), 37.09);
    }

    #[test]
    fn test_build_reading_is_idempotent() {
        for rounding_enabled in [false, true] {
            let first = build_reading(-12.34, rounding_enabled);
            let second = build_reading(-12.34, rounding_enabled);
            assert_eq!(first.celsius().to_bits(), second.celsius().to_bits());
            assert_eq!(first.kelvin().to_bits(), second.kelvin().to_bits());
        }
    }

    #[test]
    fn test_build_reading_dispatches_through_converter() {
        let mut converter = MockTemperatureConverter::new();
        converter
            .expect_convert_with()
            .with(
                eq(98.6),
                eq(Formula::FahrenheitToCelsius),
                eq(Precision::DecimalPlaces(READING_ROUND_BY)),
            )
            .times(1)
            .return_const(1.0);
        converter
            .expect_convert_with()
            .with(
                eq(98.6),
                eq(Formula::FahrenheitToKelvin),
                eq(Precision::DecimalPlaces(READING_ROUND_BY)),
            )
            .times(1)
            .return_const(2.0);

        let reading = build_reading_with(&converter, 98.6, true);
        assert_eq!(reading, TemperatureReading::new(98.6, 1.0, 2.0));
    }

    #[test]
    fn test_build_reading_unrounded_dispatch() {
        let mut converter = MockTemperatureConverter::new();
        converter
            .expect_convert_with()
            .withf(|_, _, precision| *precision == Precision::Unrounded)
            .times(2)
            .returning(|value, formula, _| formula.apply(value));

        let reading = build_reading_with(&converter, 50.0, false);
        assert_eq!(reading.celsius(), 10.0);
    }

    #[test]
    fn test_converter_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StandardConverter>();
        assert_send_sync::<TemperatureReading>();
        assert_send_sync::<Formula>();
        assert_send_sync::<Precision>();
    }
}
