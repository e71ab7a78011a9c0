//! # zentro-catalog: Product Data Layer for Zentro
//!
//! This crate provides product data access for the Zentro storefront. The
//! backing store is an in-memory collection guarded by a `RwLock`; the
//! catalog lives for the process lifetime and nothing survives a restart.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                       Zentro Data Flow                           │
//! │                                                                  │
//! │  Storefront command (list_products, create_product, ...)         │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  ┌────────────────────────────────────────────────────────────┐  │
//! │  │                 zentro-catalog (THIS CRATE)                │  │
//! │  │                                                            │  │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌────────────┐   │  │
//! │  │   │    Catalog    │   │  ProductDraft │   │  seed data │   │  │
//! │  │   │ (catalog.rs)  │◄──│  (input type) │   │ (seed.rs)  │   │  │
//! │  │   └───────────────┘   └───────────────┘   └────────────┘   │  │
//! │  └────────────────────────────────────────────────────────────┘  │
//! │       │                                                          │
//! │       ▼                                                          │
//! │  RwLock<Vec<Product>>  (memory-resident, discarded on exit)      │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - The `Catalog` collection and `ProductDraft` input type
//! - [`seed`] - Demo product data
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust
//! use zentro_catalog::Catalog;
//!
//! let catalog = Catalog::with_demo_products();
//!
//! let hits = catalog.search("headphones");
//! assert_eq!(hits.len(), 1);
//!
//! let product = catalog.get("1").expect("seeded product");
//! assert_eq!(product.name, "Wireless Headphones");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{Catalog, ProductDraft};
pub use error::{CatalogError, CatalogResult};
