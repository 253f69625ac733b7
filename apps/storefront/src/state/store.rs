//! # Storefront
//!
//! Process-wide context: configuration, the catalog, the shared coupon
//! registry and the order number generator. Sessions borrow these through
//! cheap `Arc` clones.

use std::sync::Arc;

use shopcart_core::{CouponRegistry, OrderNumberGenerator, PricingPolicy, ProductCatalog};
use tracing::info;

use super::{SharedCouponRegistry, ShopSession};
use crate::config::StorefrontConfig;

/// Shared state behind every shopper session.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    catalog: Arc<ProductCatalog>,
    coupons: SharedCouponRegistry,
    orders: Arc<OrderNumberGenerator>,
}

impl Storefront {
    /// Builds the storefront, seeding the reference products and coupons
    /// when `store.seed_defaults` is set.
    pub fn new(config: StorefrontConfig) -> Self {
        let (catalog, coupons) = if config.store.seed_defaults {
            (ProductCatalog::with_defaults(), CouponRegistry::with_defaults())
        } else {
            (ProductCatalog::new(), CouponRegistry::new())
        };

        Self::with_parts(config, catalog, coupons)
    }

    /// Builds the storefront from explicit parts.
    pub fn with_parts(
        config: StorefrontConfig,
        catalog: ProductCatalog,
        coupons: CouponRegistry,
    ) -> Self {
        info!(
            store = %config.store.name,
            products = catalog.len(),
            coupons = coupons.len(),
            "Storefront initialized"
        );

        Storefront {
            orders: Arc::new(OrderNumberGenerator::new(config.orders.prefix.clone())),
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            coupons: SharedCouponRegistry::new(coupons),
        }
    }

    /// Opens a new shopper session with an empty cart.
    pub fn open_session(&self) -> ShopSession {
        ShopSession::new(
            Arc::clone(&self.catalog),
            self.coupons.clone(),
            Arc::clone(&self.orders),
            self.pricing_policy(),
        )
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn coupons(&self) -> &SharedCouponRegistry {
        &self.coupons
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        self.config.pricing_policy()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
