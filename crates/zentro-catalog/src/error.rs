//! # Catalog Error Types
//!
//! Error types for catalog operations. With an in-memory backing store the
//! only failure a caller can hit is a missing product.

use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product exists for the given id.
    #[error("Product not found: {id}")]
    NotFound { id: String },
}

impl CatalogError {
    /// Creates a NotFound error for a product id.
    pub fn not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound { id: id.into() }
    }
}

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found("42");
        assert_eq!(err.to_string(), "Product not found: 42");
    }
}
