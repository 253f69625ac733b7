//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Malformed input                                │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → user message           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is local and recoverable. A failed operation never leaves a
//! partial effect behind.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product is not in the catalog or not in the cart.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Coupon code is not in the registry.
    #[error("Coupon not found: {0}")]
    CouponNotFound(String),

    /// A coupon with this code is already registered.
    #[error("Coupon code '{0}' already exists")]
    DuplicateCouponCode(String),

    /// The coupon's eligibility rule rejected the selection.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart total (no coupon): 9,999
    ///      │
    ///      ▼
    /// Select PERCENT10
    ///      │
    ///      ▼
    /// CouponNotEligible { code: "PERCENT10", minimum: 10,000, total: 9,999 }
    ///      │
    ///      ▼
    /// UI shows: "percentage coupons require a minimum order of 10,000"
    /// ```
    #[error("Coupon {code} requires a minimum order of {minimum} (cart total is {total})")]
    CouponNotEligible {
        code: String,
        minimum: Money,
        total: Money,
    },

    /// Order completion was requested on an empty cart.
    #[error("Cannot complete an order with an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::CouponNotEligible {
            code: "PERCENT10".to_string(),
            minimum: Money::from_minor(10_000),
            total: Money::from_minor(9_999),
        };
        assert_eq!(
            err.to_string(),
            "Coupon PERCENT10 requires a minimum order of 10,000 (cart total is 9,999)"
        );

        let err = CoreError::DuplicateCouponCode("AMOUNT5000".to_string());
        assert_eq!(err.to_string(), "Coupon code 'AMOUNT5000' already exists");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 999,
        };
        assert_eq!(err.to_string(), "quantity must be between 1 and 999");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
