//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│  Coupon  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │ Selected │     │ Completed│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       complete_order                     │
//! │                   update_item       (order.rs)                         │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopcart_core::{CartLine, CartTotals, Coupon};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::ShopSession;

/// Cart response including lines, totals and the applied coupon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: Uuid,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub selected_coupon: Option<Coupon>,
}

impl From<&mut ShopSession> for CartResponse {
    fn from(session: &mut ShopSession) -> Self {
        let selected_coupon = session.selected_coupon();
        CartResponse {
            session_id: session.id(),
            lines: session.cart().lines().to_vec(),
            totals: session.totals(),
            selected_coupon,
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and freshly computed totals
pub fn get_cart(session: &mut ShopSession) -> CartResponse {
    debug!(session = %session.id(), "get_cart command");
    CartResponse::from(session)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as new line with the catalog price
///
/// ## Arguments
/// * `product_id` - Catalog product id
/// * `quantity` - Quantity to add (default: 1)
pub fn add_to_cart(
    session: &mut ShopSession,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    session.add_to_cart(product_id, quantity)?;
    Ok(CartResponse::from(session))
}

/// Updates the quantity of a line in the cart.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Quantity > max: returns error
pub fn update_cart_item(
    session: &mut ShopSession,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    session.update_quantity(product_id, quantity)?;
    Ok(CartResponse::from(session))
}

/// Removes a line from the cart. Unknown products are ignored.
pub fn remove_from_cart(session: &mut ShopSession, product_id: &str) -> CartResponse {
    let removed = session.remove_from_cart(product_id);
    debug!(product_id = %product_id, removed, "remove_from_cart command");

    CartResponse::from(session)
}

/// Clears all lines and the coupon selection.
pub fn clear_cart(session: &mut ShopSession) -> CartResponse {
    debug!(session = %session.id(), "clear_cart command");

    session.clear_cart();
    CartResponse::from(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::Storefront;

    #[test]
    fn test_add_defaults_to_one_and_increments() {
        let mut session = Storefront::default().open_session();

        add_to_cart(&mut session, "p1", None).unwrap();
        let response = add_to_cart(&mut session, "p1", Some(2)).unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 3);
        assert_eq!(response.totals.total_before_discount.amount(), 30_000);
    }

    #[test]
    fn test_invalid_quantity_is_validation_error() {
        let mut session = Storefront::default().open_session();

        let err = add_to_cart(&mut session, "p1", Some(0)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(get_cart(&mut session).lines.is_empty());
    }

    #[test]
    fn test_update_to_zero_removes_line() {
        let mut session = Storefront::default().open_session();
        add_to_cart(&mut session, "p2", Some(2)).unwrap();

        let response = update_cart_item(&mut session, "p2", 0).unwrap();
        assert!(response.lines.is_empty());
        assert_eq!(response.totals, CartTotals::default());
    }

    #[test]
    fn test_update_unknown_line_is_not_found() {
        let mut session = Storefront::default().open_session();

        let err = update_cart_item(&mut session, "p1", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_drops_coupon() {
        let mut session = Storefront::default().open_session();
        add_to_cart(&mut session, "p3", None).unwrap();
        session.select_coupon(Some("PERCENT10")).unwrap();

        let response = clear_cart(&mut session);
        assert!(response.lines.is_empty());
        assert!(response.selected_coupon.is_none());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let mut session = Storefront::default().open_session();
        add_to_cart(&mut session, "p1", None).unwrap();

        let json = serde_json::to_value(get_cart(&mut session)).unwrap();
        assert_eq!(json["totals"]["totalBeforeDiscount"], 10_000);
        assert_eq!(json["lines"][0]["product"]["id"], "p1");
        assert!(json["selectedCoupon"].is_null());
    }
}
