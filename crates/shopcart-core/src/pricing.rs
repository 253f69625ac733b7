//! # Pricing Engine
//!
//! Turns a cart and an optional coupon into totals.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    compute_totals(cart, coupon)                         │
//! │                                                                         │
//! │  before = Σ unit_price × quantity                                      │
//! │      │                                                                  │
//! │      ├── no coupon ────────► after = before                            │
//! │      │                                                                  │
//! │      ├── Amount(v) ────────► after = max(0, before − v)                │
//! │      │                                                                  │
//! │      └── Percentage(p) ────► after = before × (100 − p) / 100          │
//! │                              rounded per policy (floor by default)     │
//! │                                                                         │
//! │  Always: 0 ≤ after ≤ before                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are derived on every read and never cached: the cart and the
//! selected coupon are the only sources of truth.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::money::Money;
use crate::types::{Coupon, DiscountType};
use crate::PERCENTAGE_COUPON_MINIMUM;

pub use crate::money::RoundingMode;

// =============================================================================
// Totals
// =============================================================================

/// Before/after-discount amounts for a cart and its selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub total_before_discount: Money,
    pub total_after_discount: Money,
}

impl CartTotals {
    /// Amount taken off by the coupon.
    pub fn discount(&self) -> Money {
        self.total_before_discount - self.total_after_discount
    }

    pub fn has_discount(&self) -> bool {
        self.discount().is_positive()
    }
}

// =============================================================================
// Pricing Policy
// =============================================================================

/// Business parameters of pricing and coupon eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingPolicy {
    /// Minimum no-coupon total for selecting a percentage coupon.
    pub percentage_minimum: Money,

    /// Rounding of fractional percentage discounts.
    pub rounding: RoundingMode,
}

impl Default for PricingPolicy {
    /// 10,000 minimum, floor rounding.
    fn default() -> Self {
        PricingPolicy {
            percentage_minimum: Money::from_minor(PERCENTAGE_COUPON_MINIMUM),
            rounding: RoundingMode::Floor,
        }
    }
}

impl PricingPolicy {
    /// Computes totals for `cart` with `coupon` applied.
    ///
    /// Pure: the same inputs always give the same totals.
    pub fn compute_totals(&self, cart: &Cart, coupon: Option<&Coupon>) -> CartTotals {
        let before: Money = cart.lines().iter().map(|l| l.line_total()).sum();

        let after = match coupon {
            None => before,
            Some(c) => match c.discount_type {
                DiscountType::Amount => {
                    before.saturating_sub_to_zero(Money::from_minor(c.discount_value.max(0)))
                }
                DiscountType::Percentage => {
                    before.apply_percentage_discount(c.discount_value, self.rounding)
                }
            },
        };

        CartTotals {
            total_before_discount: before,
            total_after_discount: after.clamp(Money::zero(), before.max(Money::zero())),
        }
    }

    /// Totals with no coupon applied; the base for eligibility checks.
    pub fn base_totals(&self, cart: &Cart) -> CartTotals {
        self.compute_totals(cart, None)
    }
}

/// Computes totals with the default policy.
///
/// ## Example
/// ```rust
/// use shopcart_core::{compute_totals, Cart, Coupon, DiscountType, Money, Product};
///
/// let mut cart = Cart::new();
/// cart.add_or_increment(&Product::new("p1", "Mug", Money::from_minor(5_000)), 2).unwrap();
///
/// let coupon = Coupon::new("AMOUNT2000", "2,000 off", DiscountType::Amount, 2_000);
/// let totals = compute_totals(&cart, Some(&coupon));
/// assert_eq!(totals.total_after_discount.amount(), 8_000);
/// assert_eq!(totals.discount().amount(), 2_000);
/// ```
pub fn compute_totals(cart: &Cart, coupon: Option<&Coupon>) -> CartTotals {
    PricingPolicy::default().compute_totals(cart, coupon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn cart_with(lines: &[(&str, i64, i64)]) -> Cart {
        let mut cart = Cart::new();
        for (id, price, qty) in lines {
            cart.add_or_increment(&Product::new(*id, *id, Money::from_minor(*price)), *qty)
                .unwrap();
        }
        cart
    }

    fn amount(value: i64) -> Coupon {
        Coupon::new("AMT", "amount", DiscountType::Amount, value)
    }

    fn percent(value: i64) -> Coupon {
        Coupon::new("PCT", "percent", DiscountType::Percentage, value)
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = compute_totals(&Cart::new(), Some(&amount(5_000)));
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn test_no_coupon_after_equals_before() {
        let cart = cart_with(&[("a", 10_000, 1), ("b", 20_000, 3)]);
        let totals = compute_totals(&cart, None);

        assert_eq!(totals.total_before_discount.amount(), 70_000);
        assert_eq!(totals.total_after_discount, totals.total_before_discount);
        assert!(!totals.has_discount());
    }

    #[test]
    fn test_reference_example() {
        let cart = cart_with(&[("p1", 5_000, 2)]);

        let with_amount = compute_totals(&cart, Some(&amount(2_000)));
        assert_eq!(with_amount.total_before_discount.amount(), 10_000);
        assert_eq!(with_amount.total_after_discount.amount(), 8_000);

        let with_percent = compute_totals(&cart, Some(&percent(10)));
        assert_eq!(with_percent.total_after_discount.amount(), 9_000);
    }

    #[test]
    fn test_amount_larger_than_total_stops_at_zero() {
        let cart = cart_with(&[("a", 3_000, 1)]);
        let totals = compute_totals(&cart, Some(&amount(5_000)));

        assert_eq!(totals.total_after_discount, Money::zero());
        assert_eq!(totals.discount().amount(), 3_000);
    }

    #[test]
    fn test_percentage_rounding_modes() {
        // 15,005 × 0.9 = 13,504.5
        let cart = cart_with(&[("a", 15_005, 1)]);

        let floor = PricingPolicy::default();
        assert_eq!(
            floor.compute_totals(&cart, Some(&percent(10))).total_after_discount.amount(),
            13_504
        );

        let half_up = PricingPolicy {
            rounding: RoundingMode::HalfUp,
            ..PricingPolicy::default()
        };
        assert_eq!(
            half_up.compute_totals(&cart, Some(&percent(10))).total_after_discount.amount(),
            13_505
        );
    }

    #[test]
    fn test_malformed_coupon_values_stay_in_bounds() {
        let cart = cart_with(&[("a", 10_000, 1)]);

        let negative_amount = compute_totals(&cart, Some(&amount(-500)));
        assert_eq!(negative_amount.total_after_discount.amount(), 10_000);

        let over_hundred = compute_totals(&cart, Some(&percent(250)));
        assert_eq!(over_hundred.total_after_discount, Money::zero());
    }

    #[test]
    fn test_bounds_hold_across_inputs() {
        let coupons = [
            None,
            Some(amount(0)),
            Some(amount(1)),
            Some(amount(9_999)),
            Some(amount(100_000)),
            Some(percent(0)),
            Some(percent(33)),
            Some(percent(100)),
        ];
        let carts = [
            Cart::new(),
            cart_with(&[("a", 1, 1)]),
            cart_with(&[("a", 999, 7), ("b", 1_234, 3)]),
            cart_with(&[("a", 0, 5)]),
        ];

        for cart in &carts {
            for coupon in &coupons {
                let totals = compute_totals(cart, coupon.as_ref());
                assert!(totals.total_after_discount >= Money::zero());
                assert!(totals.total_after_discount <= totals.total_before_discount);
            }
        }
    }

    #[test]
    fn test_compute_is_pure() {
        let cart = cart_with(&[("a", 7_777, 3)]);
        let snapshot = cart.clone();
        let coupon = percent(15);

        let first = compute_totals(&cart, Some(&coupon));
        let second = compute_totals(&cart, Some(&coupon));

        assert_eq!(first, second);
        assert_eq!(cart, snapshot);
    }
}
