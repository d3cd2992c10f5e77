//! Discount pricing.
//!
//! Percentage discounts, promo codes and the order-size based progressive
//! discount. None of these fail: invalid requests fall back to a neutral
//! result instead of raising an error.

use tracing::debug;

use crate::data::{DiscountResult, PromoCodeConfig};

/// Order amount at which the 5% progressive tier starts.
pub const PROGRESSIVE_TIER_1: f64 = 50.0;
/// Order amount at which the 10% progressive tier starts.
pub const PROGRESSIVE_TIER_2: f64 = 100.0;
/// Order amount at which the 15% progressive tier starts.
pub const PROGRESSIVE_TIER_3: f64 = 200.0;

/// Apply a percentage discount to a price.
///
/// - A negative price yields `0`.
/// - A percentage outside `0..=100` leaves the price unchanged.
///
/// # Example
///
/// ```
/// use lesson_services::apply_discount;
///
/// assert_eq!(apply_discount(100.0, 20.0), 80.0);
/// assert_eq!(apply_discount(100.0, 150.0), 100.0);
/// assert_eq!(apply_discount(-5.0, 20.0), 0.0);
/// ```
pub fn apply_discount(price: f64, percent: f64) -> f64 {
    if price < 0.0 {
        debug!(price, "Negative price, returning 0");
        return 0.0;
    }
    if !is_valid_percent(percent) {
        debug!(percent, "Discount percentage out of range, ignoring");
        return price;
    }
    price - price * percent / 100.0
}

/// Apply a discount and return the full breakdown.
///
/// `discount_percent` reports the percentage that was actually applied, so
/// an out-of-range request shows up as `0`.
pub fn calculate_discount_details(price: f64, percent: f64) -> DiscountResult {
    let final_price = apply_discount(price, percent);
    let applied = if price >= 0.0 && is_valid_percent(percent) {
        percent
    } else {
        0.0
    };

    DiscountResult {
        original_price: price,
        discount_percent: applied,
        discount_amount: price - final_price,
        final_price,
    }
}

/// Look up a promo code, ignoring case.
pub fn promo_code(code: &str) -> Option<PromoCodeConfig> {
    PromoCodeConfig::lookup(code)
}

/// Check whether a promo code exists.
pub fn is_valid_promo_code(code: &str) -> bool {
    promo_code(code).is_some()
}

/// Discount percentage for a promo code, or `0` when the code is unknown.
pub fn promo_discount(code: &str) -> f64 {
    promo_code(code).map_or(0.0, |config| config.discount)
}

/// Check whether a promo code can be used on an order.
///
/// The code must exist and `order_amount` must reach the code's minimum
/// (codes without a minimum accept any non-negative amount).
pub fn can_apply_promo_code(code: &str, order_amount: f64) -> bool {
    match promo_code(code) {
        Some(config) => {
            let ok = config.accepts(order_amount);
            if !ok {
                debug!(
                    code,
                    order_amount,
                    minimum = config.minimum(),
                    "Order below promo code minimum"
                );
            }
            ok
        }
        None => {
            debug!(code, "Unknown promo code");
            false
        }
    }
}

/// Apply a promo code to an order total.
///
/// Returns `price` unchanged when the code is unknown or the order does not
/// meet its minimum.
pub fn apply_promo_code(price: f64, code: &str) -> f64 {
    if !can_apply_promo_code(code, price) {
        return price;
    }
    apply_discount(price, promo_discount(code))
}

/// Progressive discount percentage for an order amount.
///
/// | Amount        | Discount |
/// |---------------|---------:|
/// | below 50      | 0%       |
/// | 50 up to 100  | 5%       |
/// | 100 up to 200 | 10%      |
/// | 200 and above | 15%      |
pub fn progressive_discount(amount: f64) -> f64 {
    if amount >= PROGRESSIVE_TIER_3 {
        15.0
    } else if amount >= PROGRESSIVE_TIER_2 {
        10.0
    } else if amount >= PROGRESSIVE_TIER_1 {
        5.0
    } else {
        0.0
    }
}

/// Apply the progressive discount for `amount` to `amount` itself.
pub fn apply_progressive_discount(amount: f64) -> f64 {
    apply_discount(amount, progressive_discount(amount))
}

fn is_valid_percent(percent: f64) -> bool {
    (0.0..=100.0).contains(&percent)
}
