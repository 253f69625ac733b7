//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Presentation layer            Storefront                               │
//! │  ──────────────────            ──────────                               │
//! │                                                                         │
//! │  select_coupon("PERCENT10")                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command → Result<T, ApiError>                                   │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::CouponNotEligible ──► ApiError { NOT_ELIGIBLE, .. } │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  The caller shows `message` in its own notification banner             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never notify anyone themselves: they return data or an
//! `ApiError` with a machine-readable `code` and a user-facing `message`.

use serde::Serialize;
use shopcart_core::{CoreError, DiscountType};
use thiserror::Error;

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_ELIGIBLE",
///   "message": "percentage coupons require a minimum order of 10,000"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or coupon does not exist
    NotFound,

    /// Malformed input (quantity, coupon fields, ...)
    ValidationError,

    /// Coupon code already registered
    DuplicateCode,

    /// Coupon eligibility rule rejected the selection
    NotEligible,

    /// Operation needs a non-empty cart
    EmptyCart,

    /// Configuration could not be loaded
    ConfigError,

    /// Unexpected failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CouponNotFound(code) => ApiError::not_found("Coupon", &code),
            CoreError::DuplicateCouponCode(code) => ApiError::new(
                ErrorCode::DuplicateCode,
                format!("Coupon code '{}' already exists", code),
            ),
            CoreError::CouponNotEligible { minimum, .. } => ApiError::new(
                ErrorCode::NotEligible,
                format!(
                    "{} coupons require a minimum order of {}",
                    DiscountType::Percentage,
                    minimum
                ),
            ),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, "The cart is empty"),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Configuration Error
// =============================================================================

/// Failures while loading or validating `storefront.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
