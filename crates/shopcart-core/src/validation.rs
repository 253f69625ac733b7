//! # Validation Module
//!
//! Input validation for products, coupons and cart quantities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation layer                                           │
//! │  └── Form hints, immediate feedback                                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Field rules enforced before any state changes                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Registry / cart invariants                                   │
//! │  └── Unique codes, unique product ids, positive quantities             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Coupon, DiscountType, Product};
use crate::{
    MAX_AMOUNT_DISCOUNT, MAX_CART_LINES, MAX_ITEM_QUANTITY, MAX_PERCENTAGE_DISCOUNT, MAX_UNIT_PRICE,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product identifier (non-empty, at most 64 characters).
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    validate_required("product id", id, 64)
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Ceramic Mug").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, 200)
}

/// Validates a coupon code.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Letters, digits, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use shopcart_core::validation::validate_coupon_code;
///
/// assert!(validate_coupon_code("AMOUNT5000").is_ok());
/// assert!(validate_coupon_code("SUMMER SALE").is_err());
/// ```
pub fn validate_coupon_code(code: &str) -> ValidationResult<()> {
    validate_required("code", code, 50)?;

    if !code
        .trim()
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "code".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a coupon display name.
pub fn validate_coupon_name(name: &str) -> ValidationResult<()> {
    validate_required("coupon name", name, 100)
}

/// Validates a search query and returns it trimmed.
///
/// Empty queries are allowed and match every product.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items), anything above
/// MAX_UNIT_PRICE is not.
///
/// ## Example
/// ```rust
/// use shopcart_core::money::Money;
/// use shopcart_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_minor(10_000)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_minor(-1)).is_err());
/// assert!(validate_price(Money::from_minor(i64::MAX / 2)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price.amount() > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

/// Validates a discount value for its type.
///
/// ## Rules
/// - Never negative
/// - `Percentage`: at most 100
/// - `Amount`: at most MAX_AMOUNT_DISCOUNT (100,000)
pub fn validate_discount_value(discount_type: DiscountType, value: i64) -> ValidationResult<()> {
    let max = match discount_type {
        DiscountType::Percentage => MAX_PERCENTAGE_DISCOUNT,
        DiscountType::Amount => MAX_AMOUNT_DISCOUNT,
    };

    if !(0..=max).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "discount value".to_string(),
            min: 0,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Collection / Entity Validators
// =============================================================================

/// Validates that one more line fits in a cart holding `current_lines`.
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_price(product.price)
}

/// Validates every field of a coupon.
pub fn validate_coupon(coupon: &Coupon) -> ValidationResult<()> {
    validate_coupon_code(&coupon.code)?;
    validate_coupon_name(&coupon.name)?;
    validate_discount_value(coupon.discount_type, coupon.discount_value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coupon_code() {
        assert!(validate_coupon_code("AMOUNT5000").is_ok());
        assert!(validate_coupon_code("spring_10-off").is_ok());

        assert!(validate_coupon_code("").is_err());
        assert!(validate_coupon_code("   ").is_err());
        assert!(validate_coupon_code("has space").is_err());
        assert!(validate_coupon_code(&"A".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_discount_value() {
        assert!(validate_discount_value(DiscountType::Percentage, 0).is_ok());
        assert!(validate_discount_value(DiscountType::Percentage, 100).is_ok());
        assert!(validate_discount_value(DiscountType::Percentage, 101).is_err());

        assert!(validate_discount_value(DiscountType::Amount, 100_000).is_ok());
        assert!(validate_discount_value(DiscountType::Amount, 100_001).is_err());
        assert!(validate_discount_value(DiscountType::Amount, -1).is_err());
    }

    #[test]
    fn test_validate_search_query_trims() {
        assert_eq!(validate_search_query("  mug ").unwrap(), "mug");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"q".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_cart_size() {
        assert!(validate_cart_size(0).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES - 1).is_ok());
        assert!(validate_cart_size(MAX_CART_LINES).is_err());
    }

    #[test]
    fn test_validate_coupon() {
        let ok = Coupon::new("PERCENT10", "10% off", DiscountType::Percentage, 10);
        assert!(validate_coupon(&ok).is_ok());

        let unnamed = Coupon::new("PERCENT10", " ", DiscountType::Percentage, 10);
        assert!(matches!(
            validate_coupon(&unnamed),
            Err(ValidationError::Required { .. })
        ));
    }
}
