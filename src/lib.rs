//! # lesson-services
//!
//! Stateless calculation services used as worked examples in a unit-testing
//! tutorial: arithmetic, discount pricing and temperature conversion.
//!
//! Every operation is a pure function. Fallible operations return
//! [`Result`] with a crate [`Error`]; nothing panics on bad input.
//!
//! ## Modules
//!
//! - [`arithmetic`]: add, subtract, multiply, divide, percentage, power, square root
//! - [`discount`]: percentage discounts, promo codes, progressive discount
//! - [`temperature`]: Celsius/Fahrenheit/Kelvin conversion, categories, averages
//!
//! ## Quick Start
//!
//! ```rust
//! use lesson_services::{
//!     apply_discount, arithmetic, celsius_to_fahrenheit, temperature_category,
//!     Error, Result, TemperatureCategory,
//! };
//!
//! fn main() -> Result<()> {
//!     assert_eq!(arithmetic::divide(9.0, 3.0)?, 3.0);
//!     assert_eq!(arithmetic::divide(1.0, 0.0), Err(Error::DivisionByZero));
//!
//!     assert_eq!(apply_discount(120.0, 25.0), 90.0);
//!
//!     let fahrenheit = celsius_to_fahrenheit(21.5)?;
//!     assert_eq!(fahrenheit, 70.7);
//!     assert_eq!(temperature_category(21.5), TemperatureCategory::Moderate);
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Rejected inputs are reported through [`tracing`] at `debug` level. The
//! crate never installs a subscriber.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for data types

// Public modules
pub mod arithmetic;
pub mod data;
pub mod discount;
pub mod error;
pub mod temperature;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};
pub use utils::{round_to, DEFAULT_PRECISION};

pub use data::{DiscountResult, PromoCodeConfig, TemperatureCategory};
pub use discount::{
    apply_discount, apply_progressive_discount, apply_promo_code, calculate_discount_details,
    can_apply_promo_code, is_valid_promo_code, progressive_discount, promo_code, promo_discount,
};
pub use temperature::{
    average_temperature, celsius_to_fahrenheit, celsius_to_fahrenheit_with_precision,
    celsius_to_kelvin, celsius_to_kelvin_with_precision, fahrenheit_to_celsius,
    fahrenheit_to_celsius_with_precision, fahrenheit_to_kelvin,
    fahrenheit_to_kelvin_with_precision, is_comfortable_temperature, kelvin_to_celsius,
    kelvin_to_celsius_with_precision, kelvin_to_fahrenheit, kelvin_to_fahrenheit_with_precision,
    temperature_category, ABSOLUTE_ZERO_CELSIUS,
};
