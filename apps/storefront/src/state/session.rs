//! # Shopper Session
//!
//! One shopper's cart and coupon selection, plus handles to the shared
//! storefront state. A session is driven by a single actor, so its own
//! state needs no lock.
//!
//! ## Consistency Rules
//! - Emptying the cart (clear, remove, quantity to zero) clears the selection
//! - Completing an order clears both cart and selection
//! - A selection whose coupon was deleted by the admin is dropped on the
//!   next read, even if the same code has been registered again since

use std::sync::Arc;

use shopcart_core::{
    complete_order, select_coupon, Cart, CartTotals, CoreError, CoreResult, Coupon,
    CouponSelection, OrderCompleted, OrderNumberGenerator, PricingPolicy, ProductCatalog,
    SelectionChange,
};
use tracing::debug;
use uuid::Uuid;

use super::SharedCouponRegistry;

#[derive(Debug)]
pub struct ShopSession {
    id: Uuid,
    cart: Cart,
    selection: CouponSelection,
    catalog: Arc<ProductCatalog>,
    coupons: SharedCouponRegistry,
    orders: Arc<OrderNumberGenerator>,
    policy: PricingPolicy,
}

impl ShopSession {
    pub(crate) fn new(
        catalog: Arc<ProductCatalog>,
        coupons: SharedCouponRegistry,
        orders: Arc<OrderNumberGenerator>,
        policy: PricingPolicy,
    ) -> Self {
        ShopSession {
            id: Uuid::new_v4(),
            cart: Cart::new(),
            selection: CouponSelection::new(),
            catalog,
            coupons,
            orders,
            policy,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds `quantity` of a catalog product. Returns the line's new quantity.
    pub fn add_to_cart(&mut self, product_id: &str, quantity: i64) -> CoreResult<i64> {
        let product = self
            .catalog
            .find(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        self.cart.add_or_increment(product, quantity)
    }

    /// Sets a line's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        self.cart.set_quantity(product_id, quantity)?;
        self.clear_selection_if_cart_empty();
        Ok(())
    }

    /// Removes a line. Removing an absent product is not an error.
    pub fn remove_from_cart(&mut self, product_id: &str) -> bool {
        let removed = self.cart.remove(product_id);
        self.clear_selection_if_cart_empty();
        removed
    }

    /// Empties the cart and drops the selection.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.selection.clear();
    }

    fn clear_selection_if_cart_empty(&mut self) {
        if self.cart.is_empty() && !self.selection.is_empty() {
            debug!(session = %self.id, "Cart emptied, clearing coupon selection");
            self.selection.clear();
        }
    }

    // =========================================================================
    // Coupons & Totals
    // =========================================================================

    /// The selected coupon, dropping the selection if the coupon was deleted.
    pub fn selected_coupon(&mut self) -> Option<Coupon> {
        let selection = &mut self.selection;
        self.coupons
            .with_registry(|registry| selection.resolve(registry).cloned())
    }

    /// Current totals. Recomputed on every call.
    pub fn totals(&mut self) -> CartTotals {
        let coupon = self.selected_coupon();
        self.policy.compute_totals(&self.cart, coupon.as_ref())
    }

    /// Selects a coupon by code, or clears the selection with `None`.
    pub fn select_coupon(&mut self, code: Option<&str>) -> CoreResult<SelectionChange> {
        let (selection, cart, policy) = (&mut self.selection, &self.cart, &self.policy);
        self.coupons
            .with_registry(|registry| select_coupon(selection, cart, registry, code, policy))
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Completes the order and resets the session.
    pub fn complete_order(&mut self) -> CoreResult<OrderCompleted> {
        let (cart, selection, policy, orders) =
            (&mut self.cart, &mut self.selection, &self.policy, &self.orders);
        self.coupons.with_registry(|registry| {
            complete_order(cart, selection, registry, policy, orders)
        })
    }
}
