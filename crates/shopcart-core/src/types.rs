//! # Domain Types
//!
//! Core domain types shared by every module.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Coupon      │   │  DiscountType   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (unique)    │   │  code (unique)  │   │  Amount         │       │
//! │  │  name           │   │  name           │   │  Percentage     │       │
//! │  │  price          │   │  discount_type  │   └─────────────────┘       │
//! │  │  description?   │   │  discount_value │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in minor units.
    pub price: Money,

    /// Optional description, also matched by catalog search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Creates a product without a description.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// =============================================================================
// Discount Type
// =============================================================================

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// A fixed amount in minor units is taken off the total.
    Amount,
    /// A percentage (0–100) is taken off the total.
    Percentage,
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiscountType::Amount => write!(f, "amount"),
            DiscountType::Percentage => write!(f, "percentage"),
        }
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A discount coupon. The code is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    /// Unique code typed or picked by the shopper (stored upper case).
    pub code: String,

    /// Display name.
    pub name: String,

    /// Whether the value is an amount or a percentage.
    pub discount_type: DiscountType,

    /// Minor units for `Amount`, percent for `Percentage`.
    pub discount_value: i64,
}

impl Coupon {
    /// Creates a coupon, normalizing the code to upper case.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::{Coupon, DiscountType};
    ///
    /// let coupon = Coupon::new(" amount5000 ", "5,000 off", DiscountType::Amount, 5_000);
    /// assert_eq!(coupon.code, "AMOUNT5000");
    /// ```
    pub fn new(
        code: impl AsRef<str>,
        name: impl Into<String>,
        discount_type: DiscountType,
        discount_value: i64,
    ) -> Self {
        Coupon {
            code: normalize_code(code.as_ref()),
            name: name.into(),
            discount_type,
            discount_value,
        }
    }

    /// True for percentage coupons.
    #[inline]
    pub fn is_percentage(&self) -> bool {
        self.discount_type == DiscountType::Percentage
    }
}

/// Canonical form of a coupon code: trimmed and upper case.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
