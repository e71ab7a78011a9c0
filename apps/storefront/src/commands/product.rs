//! # Product Commands
//!
//! Listing, filtering, and detail lookup for the storefront pages.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use zentro_catalog::Catalog;
use zentro_core::types::Product;
use zentro_core::CoreError;

/// Product DTO (Data Transfer Object) for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image: String,
    pub category: String,
    pub in_stock: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            description: p.description,
            price_cents: p.price_cents,
            image: p.image,
            category: p.category,
            in_stock: p.in_stock,
        }
    }
}

/// Lists products, optionally narrowed by a search query and a category.
///
/// ## Behavior
/// - `query`: case-insensitive substring match against name or description
/// - `category`: exact category label match
/// - both filters compose; both absent returns the full listing
pub fn list_products(
    catalog: &Catalog,
    query: Option<&str>,
    category: Option<&str>,
) -> Vec<ProductDto> {
    debug!(?query, ?category, "list_products command");

    catalog
        .filter(query, category)
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Gets a single product for the detail page.
///
/// ## Returns
/// `NOT_FOUND` for an unknown id.
pub fn get_product(catalog: &Catalog, product_id: &str) -> Result<ProductDto, StoreError> {
    debug!(product_id = %product_id, "get_product command");

    let product = catalog
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    Ok(ProductDto::from(product))
}

/// Lists the distinct category labels for the listing filter dropdown.
pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    debug!("list_categories command");
    catalog.categories()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_products_unfiltered() {
        let catalog = Catalog::with_demo_products();
        let products = list_products(&catalog, None, None);
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].name, "Wireless Headphones");
    }

    #[test]
    fn test_list_products_with_filters() {
        let catalog = Catalog::with_demo_products();

        let hits = list_products(&catalog, Some("watch"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");

        let hits = list_products(&catalog, None, Some("Electronics"));
        assert_eq!(hits.len(), 3);

        let hits = list_products(&catalog, Some("speaker"), Some("Sports"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_get_product() {
        let catalog = Catalog::with_demo_products();

        let product = get_product(&catalog, "3").expect("seeded product");
        assert_eq!(product.name, "Coffee Maker");
        assert_eq!(product.price_cents, 8999);

        let err = get_product(&catalog, "999").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_list_categories() {
        let catalog = Catalog::with_demo_products();
        assert_eq!(
            list_categories(&catalog),
            ["Electronics", "Home & Kitchen", "Sports", "Accessories"]
        );
    }
}
