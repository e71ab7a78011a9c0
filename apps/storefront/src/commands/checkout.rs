//! # Checkout Command
//!
//! Order placement for the storefront session.
//!
//! ## Checkout Flow
//! ```text
//! snapshot cart ──► reject if empty ──► validate customer info
//!       │
//!       ▼
//! simulated processing delay (no retry, no backpressure)
//!       │
//!       ▼
//! compute tax + total ──► build Order ──► log it ──► clear cart
//! ```
//!
//! The delay is an artificial wait standing in for a payment processor;
//! nothing is persisted and no partial-failure handling exists. The cart
//! is cleared only after the order is built, so a validation failure
//! leaves the session cart intact.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Duration};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::StoreError;
use crate::state::{SessionCart, StoreConfig};
use zentro_core::types::{CustomerInfo, Order, OrderStatus};
use zentro_core::validation::validate_customer_info;
use zentro_core::CoreError;

/// What the confirmation page receives after a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    pub status: OrderStatus,
    pub item_count: i64,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

/// Places an order for the current cart contents.
///
/// ## Behavior
/// - Empty cart: rejected with `EMPTY_CART`
/// - Incomplete shipping form: rejected with `VALIDATION_ERROR`
/// - Success: order is confirmed, logged, and the cart is cleared
pub async fn place_order(
    cart: &SessionCart,
    config: &StoreConfig,
    customer: CustomerInfo,
) -> Result<OrderConfirmation, StoreError> {
    debug!("place_order command");

    let (lines, subtotal) = cart.with_store(|s| (s.cart().lines().to_vec(), s.cart().subtotal()));

    if lines.is_empty() {
        return Err(CoreError::EmptyCart.into());
    }

    validate_customer_info(&customer)?;

    // Simulated order processing
    if config.checkout_delay_ms > 0 {
        sleep(Duration::from_millis(config.checkout_delay_ms)).await;
    }

    let tax = subtotal.calculate_tax(config.tax_rate());
    let total = subtotal + tax;
    let item_count: i64 = lines.iter().map(|l| l.quantity).sum();

    let order = Order {
        id: Uuid::new_v4().to_string(),
        lines,
        customer,
        subtotal_cents: subtotal.cents(),
        tax_cents: tax.cents(),
        total_cents: total.cents(),
        status: OrderStatus::Confirmed,
        created_at: Utc::now(),
    };

    info!(
        order_id = %order.id,
        customer = %order.customer.name,
        items = item_count,
        total = %order.total(),
        "Order confirmed"
    );

    cart.with_store_mut(|s| s.clear());

    Ok(OrderConfirmation {
        order_id: order.id,
        status: order.status,
        item_count,
        subtotal_cents: order.subtotal_cents,
        tax_cents: order.tax_cents,
        total_cents: order.total_cents,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use zentro_catalog::Catalog;

    fn test_config() -> StoreConfig {
        StoreConfig {
            checkout_delay_ms: 0,
            ..StoreConfig::default()
        }
    }

    fn valid_customer() -> CustomerInfo {
        CustomerInfo {
            name: "Jordan Doe".to_string(),
            email: "jordan@example.com".to_string(),
            address: "123 Main Street".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let cart = SessionCart::new();

        let err = place_order(&cart, &test_config(), valid_customer())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[tokio::test]
    async fn test_incomplete_form_leaves_cart_intact() {
        let catalog = Catalog::with_demo_products();
        let cart = SessionCart::new();
        add_to_cart(&catalog, &cart, "1").expect("in stock");

        let mut customer = valid_customer();
        customer.email = "not-an-email".to_string();

        let err = place_order(&cart, &test_config(), customer)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // Cart untouched
        assert_eq!(cart.with_store(|s| s.cart().item_count()), 1);
    }

    #[tokio::test]
    async fn test_successful_checkout_totals_and_clears_cart() {
        let catalog = Catalog::with_demo_products();
        let cart = SessionCart::new();

        // $199.99 twice plus $89.99 once: subtotal $489.97
        add_to_cart(&catalog, &cart, "1").expect("in stock");
        add_to_cart(&catalog, &cart, "1").expect("in stock");
        add_to_cart(&catalog, &cart, "3").expect("in stock");

        let confirmation = place_order(&cart, &test_config(), valid_customer())
            .await
            .expect("checkout succeeds");

        assert_eq!(confirmation.status, OrderStatus::Confirmed);
        assert_eq!(confirmation.item_count, 3);
        assert_eq!(confirmation.subtotal_cents, 48997);
        // 8% of $489.97, rounded: $39.20
        assert_eq!(confirmation.tax_cents, 3920);
        assert_eq!(confirmation.total_cents, 52917);
        assert!(!confirmation.order_id.is_empty());

        // Cart cleared after confirmation
        assert!(cart.with_store(|s| s.cart().is_empty()));
    }

    #[tokio::test]
    async fn test_confirmation_serialization_shape() {
        let catalog = Catalog::with_demo_products();
        let cart = SessionCart::new();
        add_to_cart(&catalog, &cart, "3").expect("in stock");

        let confirmation = place_order(&cart, &test_config(), valid_customer())
            .await
            .expect("checkout succeeds");

        let json = serde_json::to_value(&confirmation).expect("serializable");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["subtotalCents"], 8999);
        assert_eq!(json["taxCents"], 720); // 8% of $89.99, rounded
        assert_eq!(json["totalCents"], 9719);
    }
}
