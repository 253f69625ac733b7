//! # Storefront Configuration
//!
//! Typed configuration for the storefront and the pricing policy it hands to
//! the engine.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPCART_PERCENTAGE_MINIMUM=10000                                  │
//! │     SHOPCART_ROUNDING=floor                                            │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shopcart/storefront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.shopcart.shopcart/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Shopcart"
//! currency_code = "KRW"
//! currency_suffix = "원"
//! seed_defaults = true
//!
//! [pricing]
//! percentage_minimum = 10000
//! rounding = "floor"   # floor | half_up
//!
//! [orders]
//! prefix = "ORD"
//! ```

use serde::{Deserialize, Serialize};
use shopcart_core::order::DEFAULT_ORDER_PREFIX;
use shopcart_core::{Money, PricingPolicy, RoundingMode, PERCENTAGE_COUPON_MINIMUM};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Store identity and currency display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO 4217 code
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Printed before the amount (e.g. "$")
    #[serde(default)]
    pub currency_symbol: String,

    /// Printed after the amount (e.g. "원")
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Seed the reference products and coupons on startup
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

fn default_store_name() -> String {
    "Shopcart".to_string()
}

fn default_currency_code() -> String {
    "KRW".to_string()
}

fn default_currency_suffix() -> String {
    "원".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
            currency_code: default_currency_code(),
            currency_symbol: String::new(),
            currency_suffix: default_currency_suffix(),
            seed_defaults: true,
        }
    }
}

// =============================================================================
// Pricing Settings
// =============================================================================

/// Coupon eligibility and rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Minimum no-coupon total for percentage coupons (minor units).
    #[serde(default = "default_percentage_minimum")]
    pub percentage_minimum: i64,

    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_percentage_minimum() -> i64 {
    PERCENTAGE_COUPON_MINIMUM
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            percentage_minimum: default_percentage_minimum(),
            rounding: RoundingMode::default(),
        }
    }
}

// =============================================================================
// Order Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSettings {
    /// Order numbers look like `<prefix>-<millis>`.
    #[serde(default = "default_order_prefix")]
    pub prefix: String,
}

fn default_order_prefix() -> String {
    DEFAULT_ORDER_PREFIX.to_string()
}

impl Default for OrderSettings {
    fn default() -> Self {
        OrderSettings {
            prefix: default_order_prefix(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub pricing: PricingSettings,

    #[serde(default)]
    pub orders: OrderSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pricing.percentage_minimum < 0 {
            return Err(ConfigError::Invalid(
                "pricing.percentage_minimum must not be negative".into(),
            ));
        }

        let prefix = &self.orders.prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::Invalid(format!(
                "orders.prefix must be non-empty ASCII letters/digits, got: '{}'",
                prefix
            )));
        }

        let code = &self.store.currency_code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Invalid(format!(
                "store.currency_code must be a 3-letter ISO code, got: '{}'",
                code
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SHOPCART_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("SHOPCART_STORE_NAME") {
            self.store.name = name;
        }

        if let Some(code) = lookup("SHOPCART_CURRENCY_CODE") {
            self.store.currency_code = code.to_uppercase();
        }

        if let Some(minimum) = lookup("SHOPCART_PERCENTAGE_MINIMUM") {
            match minimum.parse::<i64>() {
                Ok(value) => {
                    debug!(value, "Overriding percentage minimum from environment");
                    self.pricing.percentage_minimum = value;
                }
                Err(_) => warn!(value = %minimum, "Ignoring non-numeric percentage minimum"),
            }
        }

        if let Some(rounding) = lookup("SHOPCART_ROUNDING") {
            match rounding.parse::<RoundingMode>() {
                Ok(mode) => self.pricing.rounding = mode,
                Err(e) => warn!("{}", e),
            }
        }

        if let Some(prefix) = lookup("SHOPCART_ORDER_PREFIX") {
            self.orders.prefix = prefix;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopcart", "shopcart")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// The policy handed to the pricing engine.
    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            percentage_minimum: Money::from_minor(self.pricing.percentage_minimum),
            rounding: self.pricing.rounding,
        }
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use shopcart_core::Money;
    /// use shopcart_storefront::config::StorefrontConfig;
    ///
    /// let config = StorefrontConfig::default();
    /// assert_eq!(config.format_currency(Money::from_minor(10_000)), "10,000원");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let digits = amount.to_string();
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits.as_str()),
        };

        format!(
            "{}{}{}{}",
            sign, self.store.currency_symbol, digits, self.store.currency_suffix
        )
    }
}
