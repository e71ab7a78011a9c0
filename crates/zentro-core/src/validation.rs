//! # Validation Module
//!
//! Input validation for the admin product form and the checkout form.
//!
//! Validators run at the command layer before any state is mutated: a
//! rejected form leaves the catalog and cart untouched. Each validator
//! trims its input and reports the first violated rule.
//!
//! ## Usage
//! ```rust
//! use zentro_core::validation::{validate_product_name, validate_price_cents};
//!
//! assert!(validate_product_name("Wireless Headphones").is_ok());
//! assert!(validate_price_cents(19999).is_ok());
//! assert!(validate_price_cents(-100).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::CustomerInfo;

// =============================================================================
// Product Form Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 2000 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 2000,
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a category label.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
pub fn validate_category(category: &str) -> ValidationResult<()> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: 50,
        });
    }

    Ok(())
}

/// Validates an image URL.
///
/// ## Rules
/// - Must not be empty
/// - Must start with `http://` or `https://`
pub fn validate_image_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ValidationError::InvalidFormat {
            field: "image".to_string(),
            reason: "must be an http(s) URL".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Form Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain a single `@` with text on both sides
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates the full checkout form.
///
/// Every shipping field is required; email additionally has to look like
/// an address. Reports the first violated rule.
pub fn validate_customer_info(customer: &CustomerInfo) -> ValidationResult<()> {
    require_field("name", &customer.name)?;
    validate_email(&customer.email)?;
    require_field("address", &customer.address)?;
    require_field("city", &customer.city)?;
    require_field("postal code", &customer.postal_code)?;
    Ok(())
}

fn require_field(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Jordan Doe".to_string(),
            email: "jordan@example.com".to_string(),
            address: "123 Main Street".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Wireless Headphones").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert!(validate_description("Premium wireless headphones.").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description(&"A".repeat(3000)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(19999).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Electronics").is_ok());
        assert!(validate_category("Home & Kitchen").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category(&"A".repeat(60)).is_err());
    }

    #[test]
    fn test_validate_image_url() {
        assert!(validate_image_url("https://images.example.com/p.jpg").is_ok());
        assert!(validate_image_url("http://images.example.com/p.jpg").is_ok());
        assert!(validate_image_url("").is_err());
        assert!(validate_image_url("ftp://images.example.com/p.jpg").is_err());
        assert!(validate_image_url("not-a-url").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jordan@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("jordan").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("jordan@").is_err());
        assert!(validate_email("jordan@@example.com").is_err());
    }

    #[test]
    fn test_validate_customer_info() {
        assert!(validate_customer_info(&valid_customer()).is_ok());

        for blank_field in ["name", "email", "address", "city", "postal_code"] {
            let mut customer = valid_customer();
            match blank_field {
                "name" => customer.name.clear(),
                "email" => customer.email.clear(),
                "address" => customer.address.clear(),
                "city" => customer.city.clear(),
                _ => customer.postal_code.clear(),
            }
            assert!(
                validate_customer_info(&customer).is_err(),
                "expected blank {} to be rejected",
                blank_field
            );
        }
    }
}
