//! # Order Commands
//!
//! Checkout. There is no payment step: completing an order snapshots the
//! cart, issues an order number and resets the session.

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShopSession;
use shopcart_core::OrderCompleted;

/// Completes the order for the session's cart.
///
/// ## Behavior
/// - Final totals use the selected coupon, if it still exists
/// - On success the cart and selection are both empty
/// - On failure nothing changes
///
/// ## Errors
/// - `EMPTY_CART`: nothing to order
pub fn complete_order(session: &mut ShopSession) -> Result<OrderCompleted, ApiError> {
    debug!(session = %session.id(), lines = session.cart().line_count(), "complete_order command");

    let order = session.complete_order()?;

    info!(
        order_number = %order.order_number,
        total = %order.totals.total_after_discount,
        discount = %order.totals.discount(),
        coupon = ?order.coupon_code,
        "Order completed"
    );

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::{add_to_cart, get_cart};
    use crate::commands::coupon::select_coupon;
    use crate::error::ErrorCode;
    use crate::state::Storefront;
    use shopcart_core::CartTotals;

    #[test]
    fn test_completion_resets_session() {
        let mut session = Storefront::default().open_session();
        add_to_cart(&mut session, "p2", Some(2)).unwrap();
        select_coupon(&mut session, Some("PERCENT10")).unwrap();

        let order = complete_order(&mut session).unwrap();
        assert!(order.order_number.starts_with("ORD-"));
        assert_eq!(order.totals.total_after_discount.amount(), 36_000);
        assert_eq!(order.coupon_code.as_deref(), Some("PERCENT10"));
        assert_eq!(order.lines.len(), 1);

        let cart = get_cart(&mut session);
        assert!(cart.lines.is_empty());
        assert!(cart.selected_coupon.is_none());
        assert_eq!(cart.totals, CartTotals::default());
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut session = Storefront::default().open_session();

        let err = complete_order(&mut session).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_order_numbers_unique_across_sessions() {
        let store = Storefront::default();
        let mut numbers = Vec::new();

        for _ in 0..20 {
            let mut session = store.open_session();
            add_to_cart(&mut session, "p1", None).unwrap();
            numbers.push(complete_order(&mut session).unwrap().order_number);
        }

        let mut deduped = numbers.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), numbers.len());
    }
}
