//! # Cart Commands
//!
//! Cart manipulation for the storefront session.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Cart Lifecycle                        │
//! │                                                         │
//! │  ┌──────────┐      ┌──────────┐      ┌──────────────┐   │
//! │  │  Empty   │─────►│ In Cart  │─────►│  Checkout    │   │
//! │  │  Cart    │      │          │      │ (checkout.rs)│   │
//! │  └──────────┘      └──────────┘      └──────────────┘   │
//! │                        │                                │
//! │                   add_to_cart                           │
//! │                   update_cart_item                      │
//! │                   remove_from_cart                      │
//! │                        │                                │
//! │                        ▼                                │
//! │                   clear_cart ───────► (back to empty)   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Stock gating lives here: `add_to_cart` refuses an out-of-stock product
//! before the cart store is touched. The store itself never checks stock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StoreError;
use crate::state::SessionCart;
use zentro_catalog::Catalog;
use zentro_core::cart::{Cart, CartLine, CartTotals};
use zentro_core::CoreError;

/// One cart line as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub product_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i64,
    pub line_total_cents: i64,
}

impl From<&CartLine> for CartLineDto {
    fn from(line: &CartLine) -> Self {
        CartLineDto {
            product_id: line.product.id.clone(),
            name: line.product.name.clone(),
            unit_price_cents: line.product.price_cents,
            quantity: line.quantity,
            line_total_cents: line.line_total_cents(),
        }
    }
}

/// Cart response including lines and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineDto>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().iter().map(CartLineDto::from).collect(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &SessionCart) -> CartResponse {
    debug!("get_cart command");
    cart.with_store(|s| CartResponse::from(s.cart()))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity increases by one
/// - Product not in cart: added as a new line
/// - Out-of-stock product: rejected here, the cart is never touched
///
/// ## Returns
/// Updated cart with all lines and totals
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &SessionCart,
    product_id: &str,
) -> Result<CartResponse, StoreError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog
        .get(product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

    if !product.can_sell() {
        return Err(CoreError::OutOfStock { name: product.name }.into());
    }

    Ok(cart.with_store_mut(|s| {
        s.add_item(&product);
        CartResponse::from(s.cart())
    }))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Product not in cart: silent no-op (the cart is returned unchanged)
pub fn update_cart_item(cart: &SessionCart, product_id: &str, quantity: i64) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    cart.with_store_mut(|s| {
        s.set_quantity(product_id, quantity);
        CartResponse::from(s.cart())
    })
}

/// Removes a line from the cart.
///
/// An absent product id is a no-op, not an error.
pub fn remove_from_cart(cart: &SessionCart, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    cart.with_store_mut(|s| {
        s.remove_item(product_id);
        CartResponse::from(s.cart())
    })
}

/// Clears all lines from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After checkout completes (checkout clears directly)
pub fn clear_cart(cart: &SessionCart) -> CartResponse {
    debug!("clear_cart command");

    cart.with_store_mut(|s| {
        s.clear();
        CartResponse::from(s.cart())
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
