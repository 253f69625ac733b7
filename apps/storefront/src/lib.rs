//! # Shopcart Storefront
//!
//! Session orchestration over `shopcart-core`: the layer a presentation
//! front end talks to.
//!
//! ## Module Organization
//! ```text
//! shopcart_storefront/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── config.rs       ◄─── storefront.toml + SHOPCART_* overrides
//! ├── error.rs        ◄─── API error type for commands
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Storefront (shared, process-wide)
//! │   ├── registry.rs ◄─── Shared coupon registry (Arc<RwLock>)
//! │   └── session.rs  ◄─── ShopSession (one shopper's cart)
//! └── commands/
//!     ├── mod.rs      ◄─── Command exports
//!     ├── product.rs  ◄─── Catalog search
//!     ├── cart.rs     ◄─── Cart manipulation
//!     ├── coupon.rs   ◄─── Coupon selection and admin
//!     └── order.rs    ◄─── Order completion
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront State                                     │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │   Storefront     │ │ SharedCoupon     │ │    ShopSession       │   │
//! │  │                  │ │ Registry         │ │                      │   │
//! │  │  • Config        │ │                  │ │  • Cart              │   │
//! │  │  • Catalog       │ │  • Coupons       │ │  • Coupon selection  │   │
//! │  │  • Order numbers │ │  • RwLock        │ │  • Owned, no lock    │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  One Storefront per process, one ShopSession per shopper.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use shopcart_storefront::commands::{cart, coupon, order};
//! use shopcart_storefront::state::Storefront;
//!
//! let store = Storefront::default();
//! let mut session = store.open_session();
//!
//! cart::add_to_cart(&mut session, "p2", Some(1)).unwrap();
//! let response = coupon::select_coupon(&mut session, Some("PERCENT10")).unwrap();
//! assert_eq!(response.totals.total_after_discount.amount(), 18_000);
//!
//! let completed = order::complete_order(&mut session).unwrap();
//! assert!(completed.order_number.starts_with("ORD-"));
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// Set via `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Verbose logging
/// - `RUST_LOG=info` - Normal logging
/// - `RUST_LOG=shopcart=trace` - Trace-level for shopcart crates only
///
/// Calling it twice is harmless: the second call leaves the first
/// subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopcart=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
