//! # Cart
//!
//! An ordered sequence of cart lines keyed by product id.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action                Cart Method               State Change        │
//! │  ─────────                ───────────               ────────────        │
//! │                                                                         │
//! │  Add to cart ───────────► add_or_increment() ─────► qty += n / push    │
//! │                                                                         │
//! │  Change quantity ───────► set_quantity() ─────────► qty = n / remove   │
//! │                                                                         │
//! │  Click remove ──────────► remove() ───────────────► retain             │
//! │                                                                         │
//! │  Checkout / reset ──────► clear() ────────────────► lines.clear()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product increases quantity)
//! - Every stored quantity is in `1..=MAX_ITEM_QUANTITY`
//! - At most `MAX_CART_LINES` lines
//! - A rejected operation leaves the cart untouched

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_cart_size, validate_price, validate_product_id, validate_quantity};

/// One product-quantity pairing in the cart.
///
/// The product is a snapshot taken when the line was created, so the line
/// keeps its price even if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product: Product,

    /// Always positive.
    pub quantity: i64,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        CartLine {
            product: product.clone(),
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart or increases the quantity if already present.
    ///
    /// `quantity` is added to an existing line, never replacing it. A negative
    /// `quantity` is accepted as long as the resulting quantity stays positive.
    ///
    /// ## Returns
    /// The line's quantity after the call.
    ///
    /// ## Errors
    /// `Validation` if the resulting quantity would be ≤ 0 or above the
    /// per-item maximum, if a new line would exceed the line limit, or if the
    /// product itself is malformed.
    pub fn add_or_increment(&mut self, product: &Product, quantity: i64) -> CoreResult<i64> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let new_qty = line.quantity.saturating_add(quantity);
            validate_quantity(new_qty)?;
            line.quantity = new_qty;
            return Ok(new_qty);
        }

        validate_product_id(&product.id)?;
        validate_price(product.price)?;
        validate_quantity(quantity)?;
        validate_cart_size(self.lines.len())?;

        self.lines.push(CartLine::new(product, quantity));
        Ok(quantity)
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (no-op if absent)
    /// - otherwise: sets the quantity exactly
    ///
    /// ## Errors
    /// `ProductNotFound` when a positive quantity targets a product that is
    /// not in the cart; `Validation` above the per-item maximum.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }

        validate_quantity(quantity)?;

        let line = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line by product id. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != initial_len
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE};

    fn test_product(id: &str, price: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_minor(price))
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::new();
        let qty = cart.add_or_increment(&test_product("1", 5_000), 2).unwrap();

        assert_eq!(qty, 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].line_total().amount(), 10_000);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add_or_increment(&product, 2).unwrap();
        cart.add_or_increment(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_negative_increment_keeps_positive_result() {
        let mut cart = Cart::new();
        let product = test_product("1", 100);
        cart.add_or_increment(&product, 3).unwrap();

        assert_eq!(cart.add_or_increment(&product, -2).unwrap(), 1);

        let err = cart.add_or_increment(&product, -1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert_eq!(cart.get("1").map(|l| l.quantity), Some(1));
    }

    #[test]
    fn test_add_rejects_non_positive_new_line() {
        let mut cart = Cart::new();
        assert!(cart.add_or_increment(&test_product("1", 100), 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_line_limit() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_or_increment(&test_product(&i.to_string(), 1), 1)
                .unwrap();
        }

        assert!(cart.add_or_increment(&test_product("extra", 1), 1).is_err());
        assert_eq!(cart.line_count(), MAX_CART_LINES);
    }

    #[test]
    fn test_add_rejects_price_above_maximum() {
        let mut cart = Cart::new();

        let err = cart
            .add_or_increment(&test_product("big", i64::MAX / 2), 3)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { max: MAX_UNIT_PRICE, .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_largest_cart_total_fits() {
        let mut cart = Cart::new();
        for i in 0..MAX_CART_LINES {
            cart.add_or_increment(&test_product(&i.to_string(), MAX_UNIT_PRICE), MAX_ITEM_QUANTITY)
                .unwrap();
        }

        let expected = MAX_UNIT_PRICE * MAX_ITEM_QUANTITY * MAX_CART_LINES as i64;
        let total: Money = cart.lines().iter().map(CartLine::line_total).sum();
        assert_eq!(total.amount(), expected);
    }

    #[test]
    fn test_add_keeps_price_snapshot() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 1_000);
        cart.add_or_increment(&product, 1).unwrap();

        product.price = Money::from_minor(9_999);
        cart.add_or_increment(&product, 1).unwrap();

        assert_eq!(cart.lines()[0].unit_price().amount(), 1_000);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add_or_increment(&test_product("1", 100), 5).unwrap();

        cart.set_quantity("1", 2).unwrap();
        assert_eq!(cart.get("1").map(|l| l.quantity), Some(2));

        // Same call twice is a no-op the second time
        cart.set_quantity("1", 2).unwrap();
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add_or_increment(&test_product("1", 100), 5).unwrap();
        cart.add_or_increment(&test_product("2", 100), 1).unwrap();

        cart.set_quantity("1", 0).unwrap();
        cart.set_quantity("2", -3).unwrap();
        assert!(cart.is_empty());

        // Removing an absent line is not an error
        cart.set_quantity("1", 0).unwrap();
    }

    #[test]
    fn test_set_quantity_missing_product() {
        let mut cart = Cart::new();
        let err = cart.set_quantity("ghost", 3).unwrap_err();
        assert_eq!(err, CoreError::ProductNotFound("ghost".to_string()));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_or_increment(&test_product("1", 100), 1).unwrap();
        cart.add_or_increment(&test_product("2", 100), 1).unwrap();

        assert!(cart.remove("1"));
        assert!(!cart.remove("1"));
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        for id in ["b", "a", "c"] {
            cart.add_or_increment(&test_product(id, 100), 1).unwrap();
        }
        cart.add_or_increment(&test_product("a", 100), 1).unwrap();

        let ids: Vec<_> = cart.lines().iter().map(CartLine::product_id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
