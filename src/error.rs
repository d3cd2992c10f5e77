//! Error types for the lesson-services crate.

use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A division was attempted with a zero divisor.
    #[error("Division by zero is not allowed")]
    DivisionByZero,

    /// The square root of a negative number was requested.
    #[error("Cannot calculate square root of negative number: {value}")]
    NegativeInput {
        /// The negative value that was provided.
        value: f64,
    },

    /// A temperature below -273.15°C was supplied.
    #[error("Temperature cannot be below absolute zero (-273.15°C), got {celsius}°C")]
    BelowAbsoluteZero {
        /// The Celsius equivalent of the rejected input.
        celsius: f64,
    },

    /// A negative Kelvin temperature was supplied.
    #[error("Kelvin temperature cannot be negative, got {kelvin}K")]
    NegativeKelvin {
        /// The rejected Kelvin value.
        kelvin: f64,
    },

    /// An aggregate was requested over an empty list.
    #[error("Cannot calculate average of empty array")]
    EmptyInput,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
