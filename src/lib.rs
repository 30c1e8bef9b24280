//! # temp-converter
//!
//! Converts a base temperature in degrees Fahrenheit into Celsius and Kelvin,
//! optionally rounding the derived values, and bundles the three scales into
//! an immutable [`TemperatureReading`] for display.
//!
//! ## Features
//!
//! - **Formula Registry**: A closed set of named conversions between
//!   Fahrenheit, Celsius and Kelvin, looked up by variant or by name
//! - **Optional Rounding**: Round-half-to-even to any number of decimal
//!   places, with `0` reserved to mean "no rounding"
//! - **Readings**: One call turns a Fahrenheit value into all three scales
//!
//! All conversions are pure and total. Values below absolute zero are
//! accepted, and NaN or infinite inputs pass through unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use temp_converter::{build_reading, convert, Formula, Result};
//!
//! fn main() -> Result<()> {
//!     // Resolve formula names once, up front
//!     let celsius_to_kelvin: Formula = "CelsiusToKelvin".parse()?;
//!     assert_eq!(convert(-40.0, celsius_to_kelvin, 2), 233.15);
//!
//!     // Build all three scales from a Fahrenheit value
//!     let reading = build_reading(98.6, true);
//!     for (scale, value) in reading.iter() {
//!         println!("{}: {} {}", scale, value, scale.symbol());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod converter;
pub mod error;
pub mod formula;
pub mod reading;
pub mod rounding;
pub mod scale;

// Re-exports for convenience
pub use converter::{
    build_reading, build_reading_with, convert, StandardConverter, TemperatureConverter,
    READING_ROUND_BY,
};
pub use error::{Error, Result};
pub use formula::{Formula, FAHRENHEIT_OFFSET, KELVIN_OFFSET};
pub use reading::TemperatureReading;
pub use rounding::{round_to, Precision, NO_ROUNDING};
pub use scale::Scale;
