//! Data structures returned by the calculation services.
//!
//! All types here are transient values: computed once per call and never
//! stored by the crate.

pub mod climate;
pub mod pricing;

pub use climate::TemperatureCategory;
pub use pricing::{DiscountResult, PromoCodeConfig};
