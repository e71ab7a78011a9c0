//! # Domain Types
//!
//! Core domain types used throughout the Zentro storefront.
//!
//! ## Dual identity of a product
//! A product's `id` is an opaque string: seed data uses short numeric ids,
//! admin-created products get UUID v4. CartStore never interprets it beyond
//! equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// The cart treats this as an immutable value type: a line item holds the
/// product as it looked when it was added, so later catalog edits do not
/// retroactively change a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (opaque string).
    pub id: String,

    /// Display name shown in listings and the cart.
    pub name: String,

    /// Longer description for the product detail view.
    pub description: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URL.
    pub image: String,

    /// Category label used for listing filters.
    pub category: String,

    /// Whether the product can currently be added to a cart.
    pub in_stock: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a minimal in-stock product.
    ///
    /// Handy for tests and examples; catalog code builds products with the
    /// full field set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        let now = Utc::now();
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price_cents,
            image: String::new(),
            category: String::new(),
            in_stock: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks if the product can be sold right now.
    ///
    /// Stock gating happens at the caller layer; the cart itself never
    /// consults this.
    #[inline]
    pub fn can_sell(&self) -> bool {
        self.in_stock
    }
}

// =============================================================================
// Customer Info
// =============================================================================

/// Shipping details collected by the checkout form.
///
/// All fields are required; see [`crate::validation::validate_customer_info`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created but not yet processed.
    Pending,
    /// Order accepted at checkout.
    Confirmed,
    /// Order handed to the carrier.
    Shipped,
    /// Order arrived at the customer.
    Delivered,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Holds a snapshot of the cart lines at checkout time. Orders live only
/// as the checkout return value; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub lines: Vec<CartLine>,
    pub customer: CustomerInfo,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_price_as_money() {
        let product = Product::new("1", "Wireless Headphones", 19999);
        assert_eq!(product.price(), Money::from_cents(19999));
        assert!(product.can_sell());
    }

    #[test]
    fn test_out_of_stock_cannot_sell() {
        let mut product = Product::new("4", "Running Shoes", 12999);
        product.in_stock = false;
        assert!(!product.can_sell());
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }
}
