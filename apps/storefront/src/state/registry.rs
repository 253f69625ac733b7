//! # Shared Coupon Registry
//!
//! The coupon registry is the only state shared between shopper sessions and
//! the admin screen. Every access goes through one `RwLock`, so `add` and
//! `remove` are atomic with respect to `find`.

use std::sync::{Arc, PoisonError, RwLock};

use shopcart_core::{CoreResult, Coupon, CouponRegistry};

/// Cloneable handle to the process-wide coupon registry.
#[derive(Debug, Clone, Default)]
pub struct SharedCouponRegistry {
    inner: Arc<RwLock<CouponRegistry>>,
}

impl SharedCouponRegistry {
    pub fn new(registry: CouponRegistry) -> Self {
        SharedCouponRegistry {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Executes a function with read access to the registry.
    ///
    /// A poisoned lock is recovered: registry mutations never panic halfway,
    /// so the data behind it is still consistent.
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CouponRegistry) -> R,
    {
        let registry = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&registry)
    }

    /// Executes a function with write access to the registry.
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CouponRegistry) -> R,
    {
        let mut registry = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut registry)
    }

    pub fn add(&self, coupon: Coupon) -> CoreResult<()> {
        self.with_registry_mut(|r| r.add(coupon))
    }

    pub fn remove(&self, code: &str) -> Option<Coupon> {
        self.with_registry_mut(|r| r.remove(code))
    }

    pub fn find(&self, code: &str) -> Option<Coupon> {
        self.with_registry(|r| r.find(code).cloned())
    }

    /// Snapshot of all coupons in insertion order.
    pub fn list(&self) -> Vec<Coupon> {
        self.with_registry(|r| r.list().cloned().collect())
    }
}
