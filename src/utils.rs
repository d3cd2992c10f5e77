//! Utility functions for the lesson-services crate.

/// Number of decimal places used when a caller does not pick one.
pub const DEFAULT_PRECISION: u32 = 2;

/// Round a value to a number of decimal places.
///
/// Ties are rounded half away from zero, so `2.5` at zero decimals becomes
/// `3.0` and `-2.5` becomes `-3.0`. Values are scaled by `10^decimals`
/// before rounding, which means inputs with no exact binary representation
/// (such as `1.005`) round according to their stored value.
///
/// # Arguments
///
/// * `value` - The value to round
/// * `decimals` - Number of digits to keep after the decimal point
///
/// # Example
///
/// ```
/// use lesson_services::round_to;
///
/// assert_eq!(round_to(98.5999, 2), 98.6);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_default_precision() {
        assert_eq!(round_to(3.14159, DEFAULT_PRECISION), 3.14);
        assert_eq!(round_to(2.675001, DEFAULT_PRECISION), 2.68);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_to(0.5, 0), 1.0);
        assert_eq!(round_to(-0.5, 0), -1.0);
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn test_round_zero_decimals() {
        assert_eq!(round_to(212.4, 0), 212.0);
        assert_eq!(round_to(-40.0, 0), -40.0);
    }
}
