//! Pricing data structures.
//!
//! Contains the discount breakdown returned by the discount service and the
//! fixed promo-code table.

/// Breakdown of a single discount calculation.
///
/// `final_price + discount_amount == original_price` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountResult {
    /// Price before the discount.
    pub original_price: f64,
    /// Percentage that was actually applied (0 when the request was ignored).
    pub discount_percent: f64,
    /// Amount taken off the original price.
    pub discount_amount: f64,
    /// Price after the discount.
    pub final_price: f64,
}

/// Settings attached to a promo code.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PromoCodeConfig {
    /// Discount percentage granted by the code.
    pub discount: f64,
    /// Smallest order amount the code may be used on, if any.
    pub min_order_amount: Option<f64>,
}

impl PromoCodeConfig {
    /// Every known promo code, keyed by its uppercase form.
    pub const TABLE: [(&'static str, PromoCodeConfig); 5] = [
        ("PROMO10", Self::new(10.0, None)),
        ("PROMO20", Self::new(20.0, Some(50.0))),
        ("SUMMER50", Self::new(50.0, Some(100.0))),
        ("VIP", Self::new(25.0, Some(200.0))),
        ("WELCOME", Self::new(15.0, None)),
    ];

    /// Create a new promo code configuration.
    pub const fn new(discount: f64, min_order_amount: Option<f64>) -> Self {
        Self {
            discount,
            min_order_amount,
        }
    }

    /// Look up a promo code, ignoring case.
    ///
    /// # Returns
    ///
    /// The code's configuration, or `None` for an unknown code.
    ///
    /// # Example
    ///
    /// ```
    /// use lesson_services::PromoCodeConfig;
    ///
    /// let config = PromoCodeConfig::lookup("summer50").unwrap();
    /// assert_eq!(config.discount, 50.0);
    /// assert!(PromoCodeConfig::lookup("NOPE").is_none());
    /// ```
    pub fn lookup(code: &str) -> Option<Self> {
        let normalized = code.to_uppercase();
        Self::TABLE
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, config)| *config)
    }

    /// Minimum order amount, treating "no minimum" as zero.
    pub fn minimum(&self) -> f64 {
        self.min_order_amount.unwrap_or(0.0)
    }

    /// Check whether an order of `order_amount` qualifies for this code.
    pub fn accepts(&self, order_amount: f64) -> bool {
        order_amount >= self.minimum()
    }
}
