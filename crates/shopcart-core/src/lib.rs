//! # shopcart-core: Pricing & Coupon Engine
//!
//! This crate is the **heart** of the shopping cart. It turns a cart and an
//! optional coupon into order totals, decides which coupon may be selected,
//! and keeps cart/coupon state consistent through order completion.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopcart Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation layer (web UI)                    │   │
//! │  │    Product list ──► Cart ──► Coupon select ──► Checkout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront (sessions, commands)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopcart-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌───────┐  │   │
//! │  │   │  cart   │ │ coupon  │ │ pricing │ │eligibility│ │ order │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └───────────┘ └───────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, Coupon, DiscountType)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//! - [`catalog`] - Products available for sale
//! - [`cart`] - Cart lines and quantity rules
//! - [`coupon`] - Coupon registry and the single-slot selection
//! - [`pricing`] - Totals before/after discount
//! - [`eligibility`] - Which coupon may be selected
//! - [`order`] - Order completion and order numbers
//!
//! ## Example Usage
//!
//! ```rust
//! use shopcart_core::{compute_totals, Cart, Coupon, DiscountType, Money, Product};
//!
//! let mut cart = Cart::new();
//! let product = Product::new("p1", "Mug", Money::from_minor(5_000));
//! cart.add_or_increment(&product, 2).unwrap();
//!
//! let coupon = Coupon::new("PERCENT10", "10% off", DiscountType::Percentage, 10);
//! let totals = compute_totals(&cart, Some(&coupon));
//!
//! assert_eq!(totals.total_before_discount.amount(), 10_000);
//! assert_eq!(totals.total_after_discount.amount(), 9_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod coupon;
pub mod eligibility;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::ProductCatalog;
pub use coupon::{CouponRegistry, CouponSelection, SelectedCoupon};
pub use eligibility::{can_apply, select_coupon, SelectionChange};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{complete_order, OrderCompleted, OrderNumberGenerator};
pub use pricing::{compute_totals, CartTotals, PricingPolicy, RoundingMode};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single product in the cart.
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Largest unit price a product may carry, in minor units.
///
/// With `MAX_CART_LINES` and `MAX_ITEM_QUANTITY` this keeps every cart total
/// far below `i64::MAX`.
pub const MAX_UNIT_PRICE: i64 = 100_000_000;

/// Minimum pre-discount total for a percentage coupon, in minor units.
pub const PERCENTAGE_COUPON_MINIMUM: i64 = 10_000;

/// Largest discount an `amount` coupon may carry, in minor units.
pub const MAX_AMOUNT_DISCOUNT: i64 = 100_000;

/// Largest discount a `percentage` coupon may carry.
pub const MAX_PERCENTAGE_DISCOUNT: i64 = 100;
