//! # Storefront Commands Module
//!
//! The inbound surface a frontend would invoke. Each command takes the
//! state handles it needs, mutates or reads through them, and returns a
//! serializable DTO or a [`crate::error::StoreError`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Listing, search/filter, detail, categories
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── admin.rs     ◄─── Catalog CRUD (the admin panel)
//! └── checkout.rs  ◄─── Order placement
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_products(catalog: &Catalog, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &SessionCart)
//!
//! // Needs both
//! fn add_to_cart(catalog: &Catalog, cart: &SessionCart, ...)
//! ```

pub mod admin;
pub mod cart;
pub mod checkout;
pub mod product;
