//! # Coupon Commands
//!
//! Shopper-side coupon selection plus the admin screen's coupon management.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopper picks a coupon from the dropdown                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  select_coupon(&mut session, Some("PERCENT10"))                         │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Look up the code in the shared registry                   │    │
//! │  │  2. Check eligibility against the no-coupon total             │    │
//! │  │     - Rejected: previous selection stays, NOT_ELIGIBLE        │    │
//! │  │     - Accepted: selection replaced                            │    │
//! │  │  3. Return the cart with recomputed totals                    │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopcart_core::{normalize_code, Coupon, CoreError, DiscountType, Money};
use tracing::{debug, info, warn};

use super::cart::CartResponse;
use crate::config::StorefrontConfig;
use crate::error::ApiError;
use crate::state::{ShopSession, Storefront};

/// A coupon with its display label ("5,000원 off", "10% off").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponView {
    pub coupon: Coupon,
    pub label: String,
}

impl CouponView {
    fn new(coupon: Coupon, config: &StorefrontConfig) -> Self {
        let label = match coupon.discount_type {
            DiscountType::Amount => format!(
                "{} off",
                config.format_currency(Money::from_minor(coupon.discount_value))
            ),
            DiscountType::Percentage => format!("{}% off", coupon.discount_value),
        };

        CouponView { coupon, label }
    }
}

/// Selects a coupon for the session's cart, or clears it with `None`.
///
/// ## Errors
/// - `NOT_FOUND`: unknown code
/// - `EMPTY_CART`: nothing to discount
/// - `NOT_ELIGIBLE`: percentage coupon below the minimum order
pub fn select_coupon(
    session: &mut ShopSession,
    code: Option<&str>,
) -> Result<CartResponse, ApiError> {
    debug!(session = %session.id(), code = ?code, "select_coupon command");

    match session.select_coupon(code) {
        Ok(change) => {
            debug!(change = ?change, "Coupon selection updated");
            Ok(CartResponse::from(session))
        }
        Err(err @ CoreError::CouponNotEligible { .. }) => {
            warn!(error = %err, "Coupon selection rejected");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Lists every registered coupon in insertion order.
pub fn list_coupons(store: &Storefront) -> Vec<CouponView> {
    debug!("list_coupons command");

    store
        .coupons()
        .list()
        .into_iter()
        .map(|coupon| CouponView::new(coupon, store.config()))
        .collect()
}

/// Registers a new coupon. The code is stored upper-cased.
///
/// ## Errors
/// - `VALIDATION_ERROR`: malformed code, name or discount value
/// - `DUPLICATE_CODE`: code already registered (registry unchanged)
pub fn add_coupon(store: &Storefront, coupon: Coupon) -> Result<CouponView, ApiError> {
    debug!(code = %coupon.code, discount_type = %coupon.discount_type, "add_coupon command");

    let coupon = Coupon {
        code: normalize_code(&coupon.code),
        ..coupon
    };
    store.coupons().add(coupon.clone())?;
    let view = CouponView::new(coupon, store.config());

    info!(code = %view.coupon.code, label = %view.label, "Coupon added");
    Ok(view)
}

/// Deletes a coupon. Sessions that had it selected drop the selection the
/// next time they read it.
pub fn delete_coupon(store: &Storefront, code: &str) -> Result<Coupon, ApiError> {
    debug!(code = %code, "delete_coupon command");

    let removed = store
        .coupons()
        .remove(code)
        .ok_or_else(|| ApiError::not_found("Coupon", code))?;

    info!(code = %removed.code, "Coupon deleted");
    Ok(removed)
}
