//! # Store Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ZENTRO_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no lock is needed.

use serde::{Deserialize, Serialize};
use zentro_core::money::TaxRate;

/// Storefront configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Store name (displayed in the page header and order logs)
    pub store_name: String,

    /// Sales tax rate in basis points, applied at checkout
    /// e.g., 800 = 8%
    pub tax_rate_bps: u32,

    /// Simulated order-processing delay at checkout, in milliseconds.
    /// Tests run with 0.
    pub checkout_delay_ms: u64,
}

impl StoreConfig {
    /// Returns the checkout tax rate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ZENTRO_STORE_NAME`: Override store name
    /// - `ZENTRO_TAX_RATE`: Override tax rate as a percentage (e.g., "8.25")
    /// - `ZENTRO_CHECKOUT_DELAY_MS`: Override the simulated checkout delay
    pub fn from_env() -> Self {
        let mut config = StoreConfig::default();

        if let Ok(store_name) = std::env::var("ZENTRO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(tax_rate_str) = std::env::var("ZENTRO_TAX_RATE") {
            if let Ok(rate) = tax_rate_str.parse::<f64>() {
                config.tax_rate_bps = TaxRate::from_percentage(rate).bps();
            }
        }

        if let Ok(delay_str) = std::env::var("ZENTRO_CHECKOUT_DELAY_MS") {
            if let Ok(delay) = delay_str.parse::<u64>() {
                config.checkout_delay_ms = delay;
            }
        }

        config
    }
}

impl Default for StoreConfig {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Zentro"
    /// - Tax: 8% (flat rate applied at checkout)
    /// - Checkout delay: 2000 ms
    fn default() -> Self {
        StoreConfig {
            store_name: "Zentro".to_string(),
            tax_rate_bps: 800,
            checkout_delay_ms: 2000,
        }
    }
}
