//! # Order Finalizer
//!
//! Commits an order: issues an order number, snapshots the final totals,
//! and resets the cart and the coupon selection.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  complete_order()                                                       │
//! │       │                                                                 │
//! │       ├── cart empty? ──► EmptyCart (nothing changes)                  │
//! │       │                                                                 │
//! │       ├── totals = pricing(cart, selected coupon)                       │
//! │       ├── order_number = generator.next()                               │
//! │       ├── cart.clear()                                                  │
//! │       ├── selection.clear()                                             │
//! │       │                                                                 │
//! │       └── OrderCompleted { order_number, totals, lines, ... }          │
//! │                                                                         │
//! │  No payment is taken. Showing the order number is up to the caller.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLine};
use crate::coupon::{CouponRegistry, CouponSelection};
use crate::error::{CoreError, CoreResult};
use crate::pricing::{CartTotals, PricingPolicy};

/// Default prefix of order numbers.
pub const DEFAULT_ORDER_PREFIX: &str = "ORD";

// =============================================================================
// Order Number Generator
// =============================================================================

/// Issues process-unique order numbers of the form `ORD-<millis>`.
///
/// The numeric part is the current Unix time in milliseconds, bumped past the
/// last issued value when the clock has not advanced (or went backwards), so
/// numbers strictly increase even under bursts or from several threads.
#[derive(Debug)]
pub struct OrderNumberGenerator {
    prefix: String,
    last: AtomicI64,
}

impl OrderNumberGenerator {
    /// Creates a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        OrderNumberGenerator {
            prefix: prefix.into(),
            last: AtomicI64::new(0),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the next order number.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::OrderNumberGenerator;
    ///
    /// let generator = OrderNumberGenerator::default();
    /// let first = generator.next_number();
    /// let second = generator.next_number();
    ///
    /// assert!(first.starts_with("ORD-"));
    /// assert_ne!(first, second);
    /// ```
    pub fn next_number(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);

        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return format!("{}-{}", self.prefix, candidate),
                Err(actual) => last = actual,
            }
        }
    }
}

impl Default for OrderNumberGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_PREFIX)
    }
}

// =============================================================================
// Order Completed Event
// =============================================================================

/// Result of a completed checkout, handed back to the caller for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderCompleted {
    pub order_number: String,

    /// Totals at the moment of completion.
    pub totals: CartTotals,

    /// Lines as they were before the cart was cleared.
    pub lines: Vec<CartLine>,

    /// Coupon that was applied, if any.
    pub coupon_code: Option<String>,

    #[ts(as = "String")]
    pub completed_at: DateTime<Utc>,
}

/// Completes the order for `cart`.
///
/// ## Errors
/// `EmptyCart` if the cart has no lines. In that case neither the cart nor
/// the selection is touched and no order number is consumed.
pub fn complete_order(
    cart: &mut Cart,
    selection: &mut CouponSelection,
    registry: &CouponRegistry,
    policy: &PricingPolicy,
    generator: &OrderNumberGenerator,
) -> CoreResult<OrderCompleted> {
    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let coupon = selection.coupon(registry);
    let totals = policy.compute_totals(cart, coupon);
    let coupon_code = coupon.map(|c| c.code.clone());
    let lines = cart.lines().to_vec();

    let order_number = generator.next_number();

    cart.clear();
    selection.clear();

    Ok(OrderCompleted {
        order_number,
        totals,
        lines,
        coupon_code,
        completed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use crate::eligibility::select_coupon;
    use crate::money::Money;
    use crate::pricing::compute_totals;
    use crate::types::Product;

    fn checkout_fixture() -> (Cart, CouponSelection, CouponRegistry) {
        let registry = CouponRegistry::with_defaults();
        let mut cart = Cart::new();
        cart.add_or_increment(&Product::new("p1", "Mug", Money::from_minor(5_000)), 2)
            .unwrap();

        let mut selection = CouponSelection::new();
        select_coupon(
            &mut selection,
            &cart,
            &registry,
            Some("PERCENT10"),
            &PricingPolicy::default(),
        )
        .unwrap();

        (cart, selection, registry)
    }

    #[test]
    fn test_complete_resets_cart_and_selection() {
        let (mut cart, mut selection, registry) = checkout_fixture();
        let generator = OrderNumberGenerator::default();

        let order = complete_order(
            &mut cart,
            &mut selection,
            &registry,
            &PricingPolicy::default(),
            &generator,
        )
        .unwrap();

        assert!(order.order_number.starts_with("ORD-"));
        assert_eq!(order.totals.total_before_discount.amount(), 10_000);
        assert_eq!(order.totals.total_after_discount.amount(), 9_000);
        assert_eq!(order.coupon_code.as_deref(), Some("PERCENT10"));
        assert_eq!(order.lines.len(), 1);

        assert!(cart.is_empty());
        assert!(selection.is_empty());
        assert_eq!(compute_totals(&cart, selection.coupon(&registry)), CartTotals::default());
    }

    #[test]
    fn test_complete_empty_cart_changes_nothing() {
        let registry = CouponRegistry::with_defaults();
        let mut cart = Cart::new();
        let mut selection = CouponSelection::new();
        let (coupon, revision) = registry.find_revision("AMOUNT5000").unwrap();
        selection.set(coupon.code.clone(), revision);

        let err = complete_order(
            &mut cart,
            &mut selection,
            &registry,
            &PricingPolicy::default(),
            &OrderNumberGenerator::default(),
        )
        .unwrap_err();

        assert_eq!(err, CoreError::EmptyCart);
        assert_eq!(selection.code(), Some("AMOUNT5000"));
    }

    #[test]
    fn test_dangling_selection_is_not_applied() {
        let (mut cart, mut selection, mut registry) = checkout_fixture();
        registry.remove("PERCENT10");

        let order = complete_order(
            &mut cart,
            &mut selection,
            &registry,
            &PricingPolicy::default(),
            &OrderNumberGenerator::default(),
        )
        .unwrap();

        assert_eq!(order.coupon_code, None);
        assert_eq!(order.totals.total_after_discount.amount(), 10_000);
    }

    #[test]
    fn test_order_numbers_unique_in_bursts() {
        let generator = OrderNumberGenerator::new("TEST");
        let numbers: HashSet<_> = (0..5_000).map(|_| generator.next_number()).collect();
        assert_eq!(numbers.len(), 5_000);
    }

    #[test]
    fn test_order_numbers_unique_across_threads() {
        let generator = OrderNumberGenerator::default();

        let numbers: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..1_000)
                            .map(|_| generator.next_number())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = numbers.iter().collect();
        assert_eq!(unique.len(), 4_000);
    }
}
