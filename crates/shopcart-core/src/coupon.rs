//! # Coupons
//!
//! The coupon registry (unique codes, insertion order) and the single-slot
//! coupon selection of a shopping session.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Coupon Lifecycle                                     │
//! │                                                                         │
//! │  Admin add ──► CouponRegistry::add ──► listed in selector               │
//! │                       │                                                 │
//! │                       ▼                                                 │
//! │  Shopper picks ──► eligibility::select_coupon ──► CouponSelection      │
//! │                                                        │                │
//! │  Admin delete ──► CouponRegistry::remove               │                │
//! │                       │                                ▼                │
//! │                       └─────────► selection cleared (now or on the     │
//! │                                   next resolve)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{normalize_code, Coupon, DiscountType};
use crate::validation::validate_coupon;

// =============================================================================
// Coupon Registry
// =============================================================================

/// The set of valid coupons, unique by code.
///
/// Insertion order is kept for listing; it has no other meaning.
#[derive(Debug, Clone, Default)]
pub struct CouponRegistry {
    entries: Vec<Registered>,
    next_revision: u64,
}

#[derive(Debug, Clone)]
struct Registered {
    coupon: Coupon,
    revision: u64,
}

impl CouponRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the two reference coupons.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert(Coupon::new("AMOUNT5000", "5,000 off", DiscountType::Amount, 5_000));
        registry.insert(Coupon::new("PERCENT10", "10% off", DiscountType::Percentage, 10));
        registry
    }

    /// Adds a coupon.
    ///
    /// ## Errors
    /// - `Validation` if a field is malformed
    /// - `DuplicateCouponCode` if the code is taken; the existing coupon is
    ///   never overwritten
    pub fn add(&mut self, coupon: Coupon) -> CoreResult<()> {
        let coupon = Coupon {
            code: normalize_code(&coupon.code),
            ..coupon
        };
        validate_coupon(&coupon)?;

        if self.contains(&coupon.code) {
            return Err(CoreError::DuplicateCouponCode(coupon.code));
        }

        self.insert(coupon);
        Ok(())
    }

    fn insert(&mut self, coupon: Coupon) {
        let revision = self.next_revision;
        self.next_revision += 1;
        self.entries.push(Registered { coupon, revision });
    }

    /// Removes a coupon by code and returns it.
    ///
    /// Clearing a selection that points at the removed code is the caller's
    /// job (see [`CouponSelection::clear_if`]).
    pub fn remove(&mut self, code: &str) -> Option<Coupon> {
        let code = normalize_code(code);
        let index = self.entries.iter().position(|e| e.coupon.code == code)?;
        Some(self.entries.remove(index).coupon)
    }

    fn entry(&self, code: &str) -> Option<&Registered> {
        let code = normalize_code(code);
        self.entries.iter().find(|e| e.coupon.code == code)
    }

    /// Looks a coupon up by code (case-insensitive).
    pub fn find(&self, code: &str) -> Option<&Coupon> {
        self.entry(code).map(|e| &e.coupon)
    }

    /// Looks a coupon up together with the revision it was registered under.
    pub(crate) fn find_revision(&self, code: &str) -> Option<(&Coupon, u64)> {
        self.entry(code).map(|e| (&e.coupon, e.revision))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entry(code).is_some()
    }

    /// Coupons in insertion order.
    pub fn list(&self) -> impl Iterator<Item = &Coupon> + '_ {
        self.entries.iter().map(|e| &e.coupon)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Coupon Selection
// =============================================================================

/// The coupon currently chosen for a cart.
///
/// Only [`crate::eligibility::select_coupon`] fills the slot, pinning the
/// code to the registry revision it was checked against. A selection
/// therefore always names a coupon that was registered and eligible when it
/// was chosen, and it stops matching once that coupon is removed, even if
/// the code is registered again later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CouponSelection {
    selected: Option<SelectedCoupon>,
}

/// Code and registry revision of a selected coupon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCoupon {
    code: String,
    #[ts(type = "number")]
    revision: u64,
}

impl CouponSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(&mut self, code: String, revision: u64) {
        self.selected = Some(SelectedCoupon { code, revision });
    }

    /// Code of the selected coupon, if any.
    pub fn code(&self) -> Option<&str> {
        self.selected.as_ref().map(|s| s.code.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// True when `code` is the selected coupon.
    pub fn is_selected(&self, code: &str) -> bool {
        self.code() == Some(normalize_code(code).as_str())
    }

    /// Drops the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drops the selection if it points at `code`. Returns whether it did.
    pub fn clear_if(&mut self, code: &str) -> bool {
        if self.is_selected(code) {
            self.clear();
            true
        } else {
            false
        }
    }

    /// Looks up the selected coupon without touching the selection.
    ///
    /// `None` when the code is gone or was registered again since it was
    /// selected.
    pub fn coupon<'a>(&self, registry: &'a CouponRegistry) -> Option<&'a Coupon> {
        let selected = self.selected.as_ref()?;
        let (coupon, revision) = registry.find_revision(&selected.code)?;
        (revision == selected.revision).then_some(coupon)
    }

    /// Looks up the selected coupon, clearing the selection if the coupon
    /// it was made against is no longer registered.
    pub fn resolve<'a>(&mut self, registry: &'a CouponRegistry) -> Option<&'a Coupon> {
        let coupon = self.coupon(registry);
        if coupon.is_none() {
            self.selected = None;
        }
        coupon
    }
}
