//! Basic arithmetic operations.
//!
//! Plain numeric helpers over `f64`. Only [`divide`] and [`square_root`]
//! can fail; everything else is a direct operator.

use tracing::debug;

use crate::error::{Error, Result};

/// Add two numbers.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `b` is zero (either sign).
///
/// # Example
///
/// ```
/// use lesson_services::{arithmetic::divide, Error};
///
/// assert_eq!(divide(10.0, 4.0), Ok(2.5));
/// assert_eq!(divide(10.0, 0.0), Err(Error::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        debug!(dividend = a, "Rejected division by zero");
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// Compute `percent` percent of `value`.
///
/// `percentage(200.0, 15.0)` is `30.0`.
#[inline]
pub fn percentage(value: f64, percent: f64) -> f64 {
    value * percent / 100.0
}

/// Raise `base` to `exponent`.
///
/// Fractional and negative exponents follow [`f64::powf`].
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Square root of `value`.
///
/// # Errors
///
/// Returns [`Error::NegativeInput`] when `value` is below zero.
pub fn square_root(value: f64) -> Result<f64> {
    if value < 0.0 {
        debug!(value, "Rejected square root of negative number");
        return Err(Error::NegativeInput { value });
    }
    Ok(value.sqrt())
}
