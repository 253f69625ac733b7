//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    15,000 × (1 - 0.07) = 13949.999999999998                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units + explicit rounding                  │
//! │    15,000 × 93 / 100 = 13,950 exactly                                  │
//! │    Fractions only appear in percentage discounts, and the rounding     │
//! │    mode for them is chosen explicitly (floor by default)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopcart_core::money::Money;
//!
//! let price = Money::from_minor(5_000);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.amount(), 10_000);
//! assert_eq!(line_total.to_string(), "10,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the currency's smallest unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic saturates at the bounds instead of
///   overflowing; the engine itself keeps every total non-negative
/// - **Single field tuple struct**: serializes as a plain number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let price = Money::from_minor(10_000);
    /// assert_eq!(price.amount(), 10_000);
    /// ```
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(2_990);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 8_970);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Subtracts `other`, stopping at zero.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::Money;
    ///
    /// let total = Money::from_minor(3_000);
    /// assert_eq!(total.saturating_sub_to_zero(Money::from_minor(5_000)), Money::zero());
    /// assert_eq!(total.saturating_sub_to_zero(Money::from_minor(1_000)).amount(), 2_000);
    /// ```
    pub fn saturating_sub_to_zero(&self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0).max(0))
    }

    /// Applies a percentage discount and returns the remaining amount.
    ///
    /// `percent` is clamped to `0..=100`, so the result always lies between
    /// zero and the original amount.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::money::{Money, RoundingMode};
    ///
    /// let subtotal = Money::from_minor(15_005);
    /// // 15,005 × 0.9 = 13,504.5
    /// assert_eq!(subtotal.apply_percentage_discount(10, RoundingMode::Floor).amount(), 13_504);
    /// assert_eq!(subtotal.apply_percentage_discount(10, RoundingMode::HalfUp).amount(), 13_505);
    /// ```
    pub fn apply_percentage_discount(&self, percent: i64, rounding: RoundingMode) -> Money {
        let kept = i128::from(100 - percent.clamp(0, 100));
        let scaled = i128::from(self.0) * kept;

        // Use i128 to prevent overflow on large amounts
        let remaining = match rounding {
            RoundingMode::Floor => scaled.div_euclid(100),
            RoundingMode::HalfUp => (scaled + 50).div_euclid(100),
        };

        // kept ≤ 100, so the result fits back into i64
        Money(remaining as i64)
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// How a fractional minor unit produced by a percentage discount is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Drop the fraction (13,504.5 → 13,504).
    #[default]
    Floor,
    /// Round halves up (13,504.5 → 13,505).
    HalfUp,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Floor => write!(f, "floor"),
            RoundingMode::HalfUp => write!(f, "half_up"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "floor" | "down" => Ok(RoundingMode::Floor),
            "half_up" | "half-up" | "round" => Ok(RoundingMode::HalfUp),
            other => Err(format!(
                "Unknown rounding mode: '{}'. Valid options: floor, half_up",
                other
            )),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Displays the amount with thousands separators, without a currency sign.
///
/// Currency symbols and suffixes are a presentation concern handled by the
/// storefront configuration.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}", sign, grouped)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
