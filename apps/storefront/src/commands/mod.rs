//! # Storefront Commands
//!
//! Every operation the shopper and admin screens can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog search
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── coupon.rs   ◄─── Coupon selection and admin
//! └── order.rs    ◄─── Order completion
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation layer                                                     │
//! │  ──────────────────                                                     │
//! │  select_coupon(&mut session, Some("PERCENT10"))                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Storefront command                                                     │
//! │  ──────────────────                                                     │
//! │  fn select_coupon(                                                      │
//! │      session: &mut ShopSession,  ◄── Cart + selection                  │
//! │      code: Option<&str>,         ◄── None clears                       │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Caller renders the response, or shows `ApiError.message`               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the shared storefront
//! fn search_products(store: &Storefront, query: &str)
//!
//! // Only needs the shopper's session
//! fn get_cart(session: &mut ShopSession)
//! ```

pub mod cart;
pub mod coupon;
pub mod order;
pub mod product;
