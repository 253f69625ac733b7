//! # State Module
//!
//! Explicit state owned by the storefront, passed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Storefront (one per process)                                   │   │
//! │  │  • config          • catalog (read-only)                        │   │
//! │  │  • coupons (SharedCouponRegistry)  • order number generator     │   │
//! │  └───────────────────────────┬─────────────────────────────────────┘   │
//! │                              │ open_session()                           │
//! │          ┌───────────────────┼───────────────────┐                     │
//! │          ▼                   ▼                   ▼                      │
//! │  ┌──────────────┐    ┌──────────────┐    ┌──────────────┐              │
//! │  │ ShopSession  │    │ ShopSession  │    │ ShopSession  │              │
//! │  │ cart         │    │ cart         │    │ cart         │              │
//! │  │ selection    │    │ selection    │    │ selection    │              │
//! │  └──────────────┘    └──────────────┘    └──────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Sessions are owned by a single shopper, no locking                  │
//! │  • The coupon registry is the only shared mutable state: RwLock        │
//! │  • Order numbers come from a lock-free atomic generator                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod registry;
mod session;
mod store;

pub use registry::SharedCouponRegistry;
pub use session::ShopSession;
pub use store::Storefront;
