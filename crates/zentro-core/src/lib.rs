//! # zentro-core: Pure Domain Logic for the Zentro Storefront
//!
//! This crate is the heart of Zentro. It contains all business logic as
//! pure functions and value types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Zentro Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 Presentation (out of scope)               │  │
//! │  │   Listing ──► Product Detail ──► Cart ──► Checkout        │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │ command layer (apps/storefront) │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │               ★ zentro-core (THIS CRATE) ★                │  │
//! │  │                                                           │  │
//! │  │  ┌─────────┐ ┌────────┐ ┌───────────────┐ ┌────────────┐  │  │
//! │  │  │  types  │ │ money  │ │ cart / store  │ │ validation │  │  │
//! │  │  │ Product │ │ Money  │ │ Cart CartLine │ │   rules    │  │  │
//! │  │  │  Order  │ │TaxRate │ │   CartStore   │ │   checks   │  │  │
//! │  │  └─────────┘ └────────┘ └───────────────┘ └────────────┘  │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS      │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │             zentro-catalog (product data layer)           │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, CustomerInfo)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The session cart and its derived totals
//! - [`store`] - Observable cart store with change notification
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use zentro_core::cart::Cart;
//! use zentro_core::money::Money;
//! use zentro_core::types::Product;
//!
//! let product = Product::new("1", "Wireless Headphones", 19999);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&product);
//! cart.add_item(&product);
//!
//! assert_eq!(cart.distinct_count(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.subtotal(), Money::from_cents(39998));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use zentro_core::Money` instead of
// `use zentro_core::money::Money`.

pub use cart::{Cart, CartLine, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use store::{CartStore, SubscriptionId};
pub use types::*;
