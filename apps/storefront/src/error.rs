//! # Store Error Type
//!
//! Unified error type for the storefront command layer.
//!
//! Every command returns `Result<T, StoreError>`. The error carries a
//! machine-readable `code` for programmatic handling plus a human-readable
//! `message`, and serializes to the shape a frontend would consume:
//!
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Product not found: 42"
//! }
//! ```

use serde::Serialize;
use zentro_catalog::CatalogError;
use zentro_core::{CoreError, ValidationError};

/// Error returned from storefront commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Product cannot be added to the cart right now
    OutOfStock,

    /// Checkout attempted with an empty cart
    EmptyCart,

    /// Internal error
    Internal,
}

impl StoreError {
    /// Creates a new store error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        StoreError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        StoreError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::new(ErrorCode::Internal, message)
    }
}

/// Converts catalog errors to store errors.
impl From<CatalogError> for StoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { id } => StoreError::not_found("Product", &id),
        }
    }
}

/// Converts core errors to store errors.
impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => StoreError::not_found("Product", &id),
            CoreError::OutOfStock { name } => StoreError::new(
                ErrorCode::OutOfStock,
                format!("{} is out of stock", name),
            ),
            CoreError::EmptyCart => {
                StoreError::new(ErrorCode::EmptyCart, "Cart is empty")
            }
            CoreError::Validation(e) => StoreError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors to store errors.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::validation(err.to_string())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_not_found_maps_to_not_found_code() {
        let err: StoreError = CatalogError::not_found("42").into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");
    }

    #[test]
    fn test_core_error_mapping() {
        let err: StoreError = CoreError::OutOfStock {
            name: "Running Shoes".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfStock);

        let err: StoreError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_serializes_with_screaming_snake_code() {
        let err = StoreError::not_found("Product", "42");
        let json = serde_json::to_value(&err).expect("serializable");
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Product not found: 42");
    }
}
