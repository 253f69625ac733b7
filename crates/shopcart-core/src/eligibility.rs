//! # Coupon Eligibility
//!
//! Decides whether a coupon may be selected and updates the single-slot
//! selection.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  select_coupon(code)                                                    │
//! │       │                                                                 │
//! │       ├── None ─────────────────────► clear selection (always OK)      │
//! │       │                                                                 │
//! │       ├── cart empty? ──────────────► EmptyCart                        │
//! │       │                                                                 │
//! │       ├── not registered? ──────────► CouponNotFound                   │
//! │       │                                                                 │
//! │       ├── already selected? ────────► Unchanged                        │
//! │       │                                                                 │
//! │       ├── base total (NO coupon) below minimum for a percentage         │
//! │       │   coupon? ──────────────────► CouponNotEligible                │
//! │       │                                                                 │
//! │       └── OK ───────────────────────► replace selection                │
//! │                                                                         │
//! │  Any error leaves the previous selection in place.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::coupon::{CouponRegistry, CouponSelection};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::PricingPolicy;
use crate::types::{Coupon, DiscountType};

/// What a successful [`select_coupon`] call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionChange {
    /// A coupon is now selected; `previous` is the one it replaced.
    Selected {
        code: String,
        previous: Option<String>,
    },
    /// The requested coupon was already selected.
    Unchanged { code: String },
    /// The selection was cleared.
    Cleared { previous: Option<String> },
}

/// Checks the eligibility rule for `coupon`.
///
/// `base_total` must be the cart total with **no coupon applied**, so the
/// outcome never depends on whichever coupon happens to be selected.
///
/// ## Rules
/// - `Percentage`: `base_total >= policy.percentage_minimum`
/// - `Amount`: always eligible
///
/// ## Example
/// ```rust
/// use shopcart_core::{can_apply, Coupon, DiscountType, Money, PricingPolicy};
///
/// let coupon = Coupon::new("PERCENT10", "10% off", DiscountType::Percentage, 10);
/// let policy = PricingPolicy::default();
///
/// assert!(can_apply(&coupon, Money::from_minor(9_999), &policy).is_err());
/// assert!(can_apply(&coupon, Money::from_minor(10_000), &policy).is_ok());
/// ```
pub fn can_apply(coupon: &Coupon, base_total: Money, policy: &PricingPolicy) -> CoreResult<()> {
    match coupon.discount_type {
        DiscountType::Amount => Ok(()),
        DiscountType::Percentage if base_total >= policy.percentage_minimum => Ok(()),
        DiscountType::Percentage => Err(CoreError::CouponNotEligible {
            code: coupon.code.clone(),
            minimum: policy.percentage_minimum,
            total: base_total,
        }),
    }
}

/// Selects `code` for the cart, or clears the selection when `code` is `None`.
///
/// All-or-nothing: on error neither the selection nor the cart changes.
pub fn select_coupon(
    selection: &mut CouponSelection,
    cart: &Cart,
    registry: &CouponRegistry,
    code: Option<&str>,
    policy: &PricingPolicy,
) -> CoreResult<SelectionChange> {
    let Some(code) = code else {
        let previous = selection.code().map(str::to_string);
        selection.clear();
        return Ok(SelectionChange::Cleared { previous });
    };

    if cart.is_empty() {
        return Err(CoreError::EmptyCart);
    }

    let (coupon, revision) = registry
        .find_revision(code)
        .ok_or_else(|| CoreError::CouponNotFound(code.trim().to_string()))?;

    // A code deleted and registered again is a new coupon and must pass
    // the eligibility check like any other.
    if selection.coupon(registry).is_some_and(|c| c.code == coupon.code) {
        return Ok(SelectionChange::Unchanged {
            code: coupon.code.clone(),
        });
    }

    let base = policy.base_totals(cart);
    can_apply(coupon, base.total_before_discount, policy)?;

    let previous = selection.code().map(str::to_string);
    selection.set(coupon.code.clone(), revision);

    Ok(SelectionChange::Selected {
        code: coupon.code.clone(),
        previous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn cart_totaling(total: i64) -> Cart {
        let mut cart = Cart::new();
        cart.add_or_increment(&Product::new("p", "p", Money::from_minor(total)), 1)
            .unwrap();
        cart
    }

    fn select(
        selection: &mut CouponSelection,
        cart: &Cart,
        code: Option<&str>,
    ) -> CoreResult<SelectionChange> {
        select_coupon(
            selection,
            cart,
            &CouponRegistry::with_defaults(),
            code,
            &PricingPolicy::default(),
        )
    }

    #[test]
    fn test_percentage_threshold_boundary() {
        let mut selection = CouponSelection::new();

        let err = select(&mut selection, &cart_totaling(9_999), Some("PERCENT10")).unwrap_err();
        assert!(matches!(err, CoreError::CouponNotEligible { .. }));
        assert!(selection.is_empty());

        let change = select(&mut selection, &cart_totaling(10_000), Some("PERCENT10")).unwrap();
        assert_eq!(
            change,
            SelectionChange::Selected {
                code: "PERCENT10".to_string(),
                previous: None
            }
        );
    }

    #[test]
    fn test_amount_coupon_has_no_minimum() {
        let mut selection = CouponSelection::new();
        select(&mut selection, &cart_totaling(1), Some("AMOUNT5000")).unwrap();
        assert_eq!(selection.code(), Some("AMOUNT5000"));
    }

    #[test]
    fn test_rejection_keeps_previous_selection() {
        let cart = cart_totaling(9_000);
        let mut selection = CouponSelection::new();
        select(&mut selection, &cart, Some("AMOUNT5000")).unwrap();

        // Base total is checked without the selected amount coupon, but
        // 9,000 is still below the minimum
        assert!(select(&mut selection, &cart, Some("PERCENT10")).is_err());
        assert_eq!(selection.code(), Some("AMOUNT5000"));
    }

    #[test]
    fn test_eligibility_ignores_current_selection() {
        // 12,000 − 5,000 = 7,000 after the amount coupon, yet the
        // percentage coupon is judged on the 12,000 base
        let cart = cart_totaling(12_000);
        let mut selection = CouponSelection::new();
        select(&mut selection, &cart, Some("AMOUNT5000")).unwrap();

        let change = select(&mut selection, &cart, Some("PERCENT10")).unwrap();
        assert_eq!(
            change,
            SelectionChange::Selected {
                code: "PERCENT10".to_string(),
                previous: Some("AMOUNT5000".to_string())
            }
        );
        assert_eq!(selection.code(), Some("PERCENT10"));
    }

    #[test]
    fn test_reselecting_is_idempotent() {
        let cart = cart_totaling(20_000);
        let mut selection = CouponSelection::new();
        select(&mut selection, &cart, Some("PERCENT10")).unwrap();

        let change = select(&mut selection, &cart, Some("percent10")).unwrap();
        assert_eq!(
            change,
            SelectionChange::Unchanged {
                code: "PERCENT10".to_string()
            }
        );
        assert_eq!(selection.code(), Some("PERCENT10"));
    }

    #[test]
    fn test_unknown_code_is_not_found() {
        let mut selection = CouponSelection::new();
        let err = select(&mut selection, &cart_totaling(50_000), Some("NOPE")).unwrap_err();
        assert_eq!(err, CoreError::CouponNotFound("NOPE".to_string()));
    }

    #[test]
    fn test_empty_cart_cannot_select() {
        let mut selection = CouponSelection::new();
        let err = select(&mut selection, &Cart::new(), Some("AMOUNT5000")).unwrap_err();
        assert_eq!(err, CoreError::EmptyCart);
    }

    #[test]
    fn test_readded_code_is_checked_again() {
        let cart = cart_totaling(5_000);
        let policy = PricingPolicy::default();
        let mut registry = CouponRegistry::with_defaults();
        let mut selection = CouponSelection::new();
        select_coupon(&mut selection, &cart, &registry, Some("AMOUNT5000"), &policy).unwrap();

        registry.remove("AMOUNT5000");
        registry
            .add(Coupon::new("AMOUNT5000", "90% off", DiscountType::Percentage, 90))
            .unwrap();

        let err = select_coupon(&mut selection, &cart, &registry, Some("AMOUNT5000"), &policy)
            .unwrap_err();
        assert!(matches!(err, CoreError::CouponNotEligible { .. }));
        assert!(selection.coupon(&registry).is_none());
    }

    #[test]
    fn test_clearing_always_succeeds() {
        let mut selection = CouponSelection::new();
        assert_eq!(
            select(&mut selection, &Cart::new(), None).unwrap(),
            SelectionChange::Cleared { previous: None }
        );

        let cart = cart_totaling(20_000);
        select(&mut selection, &cart, Some("AMOUNT5000")).unwrap();
        assert_eq!(
            select(&mut selection, &cart, None).unwrap(),
            SelectionChange::Cleared {
                previous: Some("AMOUNT5000".to_string())
            }
        );
        assert!(selection.is_empty());
    }
}
