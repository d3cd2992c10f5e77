//! Temperature conversion and classification.
//!
//! Conversions between Celsius, Fahrenheit and Kelvin are validated against
//! absolute zero and rounded half away from zero. Each conversion comes in a
//! default form (rounded to [`DEFAULT_PRECISION`] decimals) and a
//! `_with_precision` form taking the number of decimals explicitly.

use tracing::debug;

use crate::data::TemperatureCategory;
use crate::error::{Error, Result};
use crate::utils::{round_to, DEFAULT_PRECISION};

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Offset between the Kelvin and Celsius scales.
const KELVIN_OFFSET: f64 = 273.15;

/// Lowest temperature (inclusive) considered comfortable, in Celsius.
pub const COMFORT_MIN_CELSIUS: f64 = 18.0;

/// Highest temperature (inclusive) considered comfortable, in Celsius.
pub const COMFORT_MAX_CELSIUS: f64 = 24.0;

fn check_celsius(celsius: f64) -> Result<f64> {
    if celsius < ABSOLUTE_ZERO_CELSIUS {
        debug!(celsius, "Temperature below absolute zero");
        return Err(Error::BelowAbsoluteZero { celsius });
    }
    Ok(celsius)
}

fn check_kelvin(kelvin: f64) -> Result<f64> {
    if kelvin < 0.0 {
        debug!(kelvin, "Negative Kelvin temperature");
        return Err(Error::NegativeKelvin { kelvin });
    }
    Ok(kelvin)
}

/// Convert Celsius to Fahrenheit, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::BelowAbsoluteZero`] for inputs below -273.15°C.
///
/// # Example
///
/// ```
/// use lesson_services::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(100.0), Ok(212.0));
/// assert_eq!(celsius_to_fahrenheit(-40.0), Ok(-40.0));
/// assert!(celsius_to_fahrenheit(-300.0).is_err());
/// ```
pub fn celsius_to_fahrenheit(celsius: f64) -> Result<f64> {
    celsius_to_fahrenheit_with_precision(celsius, DEFAULT_PRECISION)
}

/// Convert Celsius to Fahrenheit, rounded to `decimals` places.
pub fn celsius_to_fahrenheit_with_precision(celsius: f64, decimals: u32) -> Result<f64> {
    let celsius = check_celsius(celsius)?;
    Ok(round_to(celsius * 9.0 / 5.0 + 32.0, decimals))
}

/// Convert Fahrenheit to Celsius, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::BelowAbsoluteZero`] when the Celsius equivalent is below
/// -273.15°C.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> Result<f64> {
    fahrenheit_to_celsius_with_precision(fahrenheit, DEFAULT_PRECISION)
}

/// Convert Fahrenheit to Celsius, rounded to `decimals` places.
pub fn fahrenheit_to_celsius_with_precision(fahrenheit: f64, decimals: u32) -> Result<f64> {
    let celsius = check_celsius((fahrenheit - 32.0) * 5.0 / 9.0)?;
    Ok(round_to(celsius, decimals))
}

/// Convert Celsius to Kelvin, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::BelowAbsoluteZero`] for inputs below -273.15°C.
pub fn celsius_to_kelvin(celsius: f64) -> Result<f64> {
    celsius_to_kelvin_with_precision(celsius, DEFAULT_PRECISION)
}

/// Convert Celsius to Kelvin, rounded to `decimals` places.
pub fn celsius_to_kelvin_with_precision(celsius: f64, decimals: u32) -> Result<f64> {
    let celsius = check_celsius(celsius)?;
    Ok(round_to(celsius + KELVIN_OFFSET, decimals))
}

/// Convert Kelvin to Celsius, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::NegativeKelvin`] for negative inputs.
pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64> {
    kelvin_to_celsius_with_precision(kelvin, DEFAULT_PRECISION)
}

/// Convert Kelvin to Celsius, rounded to `decimals` places.
pub fn kelvin_to_celsius_with_precision(kelvin: f64, decimals: u32) -> Result<f64> {
    let kelvin = check_kelvin(kelvin)?;
    Ok(round_to(kelvin - KELVIN_OFFSET, decimals))
}

/// Convert Fahrenheit to Kelvin, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::BelowAbsoluteZero`] when the Celsius equivalent is below
/// -273.15°C.
pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> Result<f64> {
    fahrenheit_to_kelvin_with_precision(fahrenheit, DEFAULT_PRECISION)
}

/// Convert Fahrenheit to Kelvin, rounded to `decimals` places.
pub fn fahrenheit_to_kelvin_with_precision(fahrenheit: f64, decimals: u32) -> Result<f64> {
    let celsius = check_celsius((fahrenheit - 32.0) * 5.0 / 9.0)?;
    Ok(round_to(celsius + KELVIN_OFFSET, decimals))
}

/// Convert Kelvin to Fahrenheit, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::NegativeKelvin`] for negative inputs.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> Result<f64> {
    kelvin_to_fahrenheit_with_precision(kelvin, DEFAULT_PRECISION)
}

/// Convert Kelvin to Fahrenheit, rounded to `decimals` places.
pub fn kelvin_to_fahrenheit_with_precision(kelvin: f64, decimals: u32) -> Result<f64> {
    let kelvin = check_kelvin(kelvin)?;
    Ok(round_to((kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0, decimals))
}

/// Classify a Celsius temperature into a [`TemperatureCategory`].
#[inline]
pub fn temperature_category(celsius: f64) -> TemperatureCategory {
    TemperatureCategory::from_celsius(celsius)
}

/// Check whether a Celsius temperature is within 18°C to 24°C inclusive.
pub fn is_comfortable_temperature(celsius: f64) -> bool {
    (COMFORT_MIN_CELSIUS..=COMFORT_MAX_CELSIUS).contains(&celsius)
}

/// Arithmetic mean of a list of temperatures, rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for an empty slice.
///
/// # Example
///
/// ```
/// use lesson_services::{average_temperature, Error};
///
/// assert_eq!(average_temperature(&[20.0, 22.0, 25.0]), Ok(22.33));
/// assert_eq!(average_temperature(&[]), Err(Error::EmptyInput));
/// ```
pub fn average_temperature(temperatures: &[f64]) -> Result<f64> {
    if temperatures.is_empty() {
        debug!("Average requested over no temperatures");
        return Err(Error::EmptyInput);
    }
    let sum: f64 = temperatures.iter().sum();
    Ok(round_to(sum / temperatures.len() as f64, DEFAULT_PRECISION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), Ok(32.0));
        assert_eq!(celsius_to_fahrenheit(100.0), Ok(212.0));
        assert_eq!(celsius_to_fahrenheit(-40.0), Ok(-40.0));
        assert_eq!(celsius_to_fahrenheit(37.0), Ok(98.6));
    }

    #[test]
    fn test_celsius_to_fahrenheit_precision() {
        assert_eq!(celsius_to_fahrenheit_with_precision(36.6, 0), Ok(98.0));
        assert_eq!(celsius_to_fahrenheit_with_precision(21.123, 3), Ok(70.021));
    }

    #[test]
    fn test_celsius_to_fahrenheit_below_absolute_zero() {
        assert_eq!(
            celsius_to_fahrenheit(-274.0),
            Err(Error::BelowAbsoluteZero { celsius: -274.0 })
        );
        assert_eq!(celsius_to_fahrenheit(ABSOLUTE_ZERO_CELSIUS), Ok(-459.67));
    }

    #[test]
    fn test_fahrenheit_to_celsius() {
        assert_eq!(fahrenheit_to_celsius(32.0), Ok(0.0));
        assert_eq!(fahrenheit_to_celsius(212.0), Ok(100.0));
        assert_eq!(fahrenheit_to_celsius(-40.0), Ok(-40.0));
        assert_eq!(fahrenheit_to_celsius(98.6), Ok(37.0));
        assert_eq!(fahrenheit_to_celsius(50.0), Ok(10.0));
    }

    #[test]
    fn test_fahrenheit_to_celsius_below_absolute_zero() {
        assert!(matches!(
            fahrenheit_to_celsius(-500.0),
            Err(Error::BelowAbsoluteZero { .. })
        ));
    }

    #[test]
    fn test_celsius_to_kelvin() {
        assert_eq!(celsius_to_kelvin(0.0), Ok(273.15));
        assert_eq!(celsius_to_kelvin(100.0), Ok(373.15));
        assert_eq!(celsius_to_kelvin(ABSOLUTE_ZERO_CELSIUS), Ok(0.0));
        assert!(matches!(
            celsius_to_kelvin(-273.16),
            Err(Error::BelowAbsoluteZero { .. })
        ));
    }

    #[test]
    fn test_kelvin_to_celsius() {
        assert_eq!(kelvin_to_celsius(273.15), Ok(0.0));
        assert_eq!(kelvin_to_celsius(0.0), Ok(-273.15));
        assert_eq!(kelvin_to_celsius(300.0), Ok(26.85));
        assert_eq!(
            kelvin_to_celsius(-1.0),
            Err(Error::NegativeKelvin { kelvin: -1.0 })
        );
    }

    #[test]
    fn test_fahrenheit_and_kelvin() {
        assert_eq!(fahrenheit_to_kelvin(32.0), Ok(273.15));
        assert_eq!(fahrenheit_to_kelvin(212.0), Ok(373.15));
        assert_eq!(kelvin_to_fahrenheit(273.15), Ok(32.0));
        assert_eq!(kelvin_to_fahrenheit(373.15), Ok(212.0));
        assert!(matches!(
            kelvin_to_fahrenheit(-0.5),
            Err(Error::NegativeKelvin { .. })
        ));
        assert!(matches!(
            fahrenheit_to_kelvin(-460.0),
            Err(Error::BelowAbsoluteZero { .. })
        ));
    }

    #[test]
    fn test_temperature_category() {
        assert_eq!(temperature_category(-5.0), TemperatureCategory::Freezing);
        assert_eq!(temperature_category(10.0), TemperatureCategory::Cold);
        assert_eq!(temperature_category(20.0), TemperatureCategory::Moderate);
        assert_eq!(temperature_category(30.0), TemperatureCategory::Warm);
        assert_eq!(temperature_category(40.0), TemperatureCategory::Hot);
    }

    #[test]
    fn test_is_comfortable_temperature() {
        assert!(!is_comfortable_temperature(17.99));
        assert!(is_comfortable_temperature(18.0));
        assert!(is_comfortable_temperature(21.0));
        assert!(is_comfortable_temperature(24.0));
        assert!(!is_comfortable_temperature(24.01));
    }

    #[test]
    fn test_average_temperature() {
        assert_eq!(average_temperature(&[20.0]), Ok(20.0));
        assert_eq!(average_temperature(&[10.0, 20.0, 30.0]), Ok(20.0));
        assert_eq!(average_temperature(&[1.0, 2.0, 2.0]), Ok(1.67));
        assert_eq!(average_temperature(&[-10.0, 10.0]), Ok(0.0));
    }

    #[test]
    fn test_average_temperature_empty() {
        assert_eq!(average_temperature(&[]), Err(Error::EmptyInput));
    }
}
