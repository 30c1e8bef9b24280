//! Error types for the temp-converter crate.

use thiserror::Error;

/// The main error type for this crate.
///
/// Conversions themselves never fail. The only failures are name lookups,
/// which indicate a wiring mistake in the caller rather than a runtime
/// condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No formula is registered under the given name.
    #[error("Unknown formula: {name}")]
    UnknownFormula {
        /// The name that was looked up.
        name: String,
    },

    /// No temperature scale matches the given name.
    #[error("Unknown temperature scale: {name}")]
    UnknownScale {
        /// The name that was looked up.
        name: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownFormula {
            name: "RankineToCelsius".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown formula: RankineToCelsius");

        let err = Error::UnknownScale {
            name: "Rankine".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown temperature scale: Rankine");
    }
}
