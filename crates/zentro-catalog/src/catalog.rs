//! # Product Catalog
//!
//! In-memory product collection with listing, search, filtering, and the
//! admin mutations.
//!
//! ## Key Operations
//! - Substring search across name and description (case-insensitive)
//! - Category filtering and distinct category listing
//! - CRUD operations for the admin surface
//!
//! Products are kept in insertion order so listings stay stable. The
//! collection is guarded by a `RwLock` and shared by reference, the same
//! way the storefront shares its database-style handles.

use std::sync::RwLock;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};
use crate::seed;
use zentro_core::types::Product;

// =============================================================================
// Product Draft
// =============================================================================

/// Input for creating or updating a product (the admin form payload).
///
/// Identity and timestamps are assigned by the catalog, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

// =============================================================================
// Catalog
// =============================================================================

/// Thread-safe in-memory product collection.
///
/// ## Usage
/// ```rust
/// use zentro_catalog::Catalog;
///
/// let catalog = Catalog::with_demo_products();
/// assert_eq!(catalog.len(), 6);
/// assert!(catalog.get("1").is_some());
/// ```
#[derive(Debug)]
pub struct Catalog {
    products: RwLock<Vec<Product>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: RwLock::new(Vec::new()),
        }
    }

    /// Creates a catalog seeded with the demo products.
    pub fn with_demo_products() -> Self {
        Catalog {
            products: RwLock::new(seed::demo_products()),
        }
    }

    /// Lists all products in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.read().clone()
    }

    /// Searches products by substring match against name or description.
    ///
    /// Matching is case-insensitive. An empty (or all-whitespace) query
    /// returns the full listing.
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.trim();

        debug!(query = %query, "Searching catalog");

        if query.is_empty() {
            return self.list();
        }

        let needle = query.to_lowercase();
        self.read()
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Lists products in an exact category.
    pub fn in_category(&self, category: &str) -> Vec<Product> {
        self.read()
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Combined listing filter: optional search query, optional category.
    ///
    /// Mirrors the storefront listing page, where both filters compose.
    pub fn filter(&self, query: Option<&str>, category: Option<&str>) -> Vec<Product> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        self.read()
            .iter()
            .filter(|p| {
                if let Some(needle) = &needle {
                    if !p.name.to_lowercase().contains(needle)
                        && !p.description.to_lowercase().contains(needle)
                    {
                        return false;
                    }
                }
                if let Some(category) = category {
                    if p.category != category {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect()
    }

    /// Returns the distinct category labels in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for product in self.read().iter() {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }
        categories
    }

    /// Gets a product by its id.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Inserts a new product from a draft.
    ///
    /// Assigns a fresh UUID v4 id and creation timestamps; returns the
    /// stored product.
    pub fn insert(&self, draft: ProductDraft) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price_cents: draft.price_cents,
            image: draft.image,
            category: draft.category,
            in_stock: draft.in_stock,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %product.id, name = %product.name, "Inserting product");

        self.write().push(product.clone());
        product
    }

    /// Applies a draft to an existing product.
    ///
    /// Keeps id and `created_at`, bumps `updated_at`; returns the updated
    /// product or `NotFound` if the id does not exist.
    pub fn update(&self, id: &str, draft: ProductDraft) -> CatalogResult<Product> {
        debug!(id = %id, "Updating product");

        let mut products = self.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;

        product.name = draft.name;
        product.description = draft.description;
        product.price_cents = draft.price_cents;
        product.image = draft.image;
        product.category = draft.category;
        product.in_stock = draft.in_stock;
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    /// Removes a product by id.
    ///
    /// Returns the removed product, or `NotFound` if the id does not exist.
    pub fn remove(&self, id: &str) -> CatalogResult<Product> {
        debug!(id = %id, "Removing product");

        let mut products = self.write();
        let position = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CatalogError::not_found(id))?;

        Ok(products.remove(position))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().expect("Catalog lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().expect("Catalog lock poisoned")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price_cents: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            description: format!("{} description", name),
            price_cents,
            image: "https://images.example.com/p.jpg".to_string(),
            category: category.to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_demo_seed_listing_order() {
        let catalog = Catalog::with_demo_products();
        let names: Vec<String> = catalog.list().into_iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Wireless Headphones",
                "Smart Watch",
                "Coffee Maker",
                "Running Shoes",
                "Laptop Backpack",
                "Bluetooth Speaker",
            ]
        );
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let catalog = Catalog::with_demo_products();

        // Name match, case-insensitive
        let hits = catalog.search("HEADPHONES");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // Description match ("waterproof" only appears in the speaker text)
        let hits = catalog.search("waterproof");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "6");

        // Empty query returns everything
        assert_eq!(catalog.search("   ").len(), 6);

        // No match
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_category_filtering() {
        let catalog = Catalog::with_demo_products();

        assert_eq!(catalog.in_category("Electronics").len(), 3);
        assert_eq!(catalog.in_category("Sports").len(), 1);
        assert!(catalog.in_category("Garden").is_empty());

        assert_eq!(
            catalog.categories(),
            ["Electronics", "Home & Kitchen", "Sports", "Accessories"]
        );
    }

    #[test]
    fn test_combined_filter() {
        let catalog = Catalog::with_demo_products();

        // Query and category compose
        let hits = catalog.filter(Some("wireless"), Some("Electronics"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");

        // Category alone
        assert_eq!(catalog.filter(None, Some("Electronics")).len(), 3);

        // Query alone
        assert_eq!(catalog.filter(Some("coffee"), None).len(), 1);

        // Neither filter set returns the full listing
        assert_eq!(catalog.filter(None, None).len(), 6);

        // Composed filters can exclude everything
        assert!(catalog.filter(Some("coffee"), Some("Sports")).is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::with_demo_products();
        assert_eq!(catalog.get("3").map(|p| p.name), Some("Coffee Maker".to_string()));
        assert!(catalog.get("nope").is_none());
    }

    #[test]
    fn test_insert_assigns_identity() {
        let catalog = Catalog::new();
        let product = catalog.insert(draft("Desk Lamp", "Home & Kitchen", 2499));

        assert!(!product.id.is_empty());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&product.id).map(|p| p.name), Some("Desk Lamp".to_string()));
    }

    #[test]
    fn test_update_applies_draft_and_bumps_timestamp() {
        let catalog = Catalog::new();
        let product = catalog.insert(draft("Desk Lamp", "Home & Kitchen", 2499));

        let mut changed = draft("Desk Lamp Pro", "Home & Kitchen", 3499);
        changed.in_stock = false;
        let updated = catalog
            .update(&product.id, changed)
            .expect("product exists");

        assert_eq!(updated.id, product.id);
        assert_eq!(updated.name, "Desk Lamp Pro");
        assert_eq!(updated.price_cents, 3499);
        assert!(!updated.in_stock);
        assert_eq!(updated.created_at, product.created_at);
        assert!(updated.updated_at >= product.updated_at);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let catalog = Catalog::new();
        let err = catalog.update("missing", draft("X", "Y", 1)).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn test_remove() {
        let catalog = Catalog::with_demo_products();
        let removed = catalog.remove("4").expect("seeded product");
        assert_eq!(removed.name, "Running Shoes");
        assert_eq!(catalog.len(), 5);
        assert!(catalog.get("4").is_none());

        let err = catalog.remove("4").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }
}
