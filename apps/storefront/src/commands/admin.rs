//! # Admin Commands
//!
//! Catalog CRUD for the admin panel.
//!
//! Every create/update validates the submitted draft before the catalog is
//! touched; a rejected form leaves the catalog exactly as it was. Mutations
//! affect only the in-memory catalog and are discarded when the process
//! exits.

use tracing::info;

use crate::commands::product::ProductDto;
use crate::error::StoreError;
use zentro_catalog::{Catalog, ProductDraft};
use zentro_core::validation::{
    validate_category, validate_description, validate_image_url, validate_price_cents,
    validate_product_name,
};

/// Validates an admin product form.
fn validate_draft(draft: &ProductDraft) -> Result<(), StoreError> {
    validate_product_name(&draft.name)?;
    validate_description(&draft.description)?;
    validate_price_cents(draft.price_cents)?;
    validate_category(&draft.category)?;
    validate_image_url(&draft.image)?;
    Ok(())
}

/// Creates a new product from the admin form.
///
/// ## Returns
/// The stored product, with its assigned id and timestamps.
pub fn create_product(catalog: &Catalog, draft: ProductDraft) -> Result<ProductDto, StoreError> {
    validate_draft(&draft)?;

    let product = catalog.insert(draft);
    info!(id = %product.id, name = %product.name, "Product created");

    Ok(ProductDto::from(product))
}

/// Applies the admin form to an existing product.
///
/// ## Returns
/// The updated product, or `NOT_FOUND` for an unknown id.
pub fn update_product(
    catalog: &Catalog,
    product_id: &str,
    draft: ProductDraft,
) -> Result<ProductDto, StoreError> {
    validate_draft(&draft)?;

    let product = catalog.update(product_id, draft)?;
    info!(id = %product.id, name = %product.name, "Product updated");

    Ok(ProductDto::from(product))
}

/// Deletes a product from the catalog.
///
/// ## Returns
/// `NOT_FOUND` for an unknown id.
pub fn delete_product(catalog: &Catalog, product_id: &str) -> Result<(), StoreError> {
    let removed = catalog.remove(product_id)?;
    info!(id = %removed.id, name = %removed.name, "Product deleted");

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
