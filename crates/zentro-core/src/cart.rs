//! # Session Cart
//!
//! The in-memory shopping cart for one storefront session.
//!
//! ## Invariants
//! - Lines are unique by product id: adding an already-present product
//!   increments its quantity instead of creating a duplicate line.
//! - Every line quantity is >= 1; setting a quantity to 0 or below removes
//!   the line.
//! - Iteration order is insertion order (display order stays stable).
//! - Derived totals always reflect the current lines; there is no cached
//!   state to go stale.
//!
//! Every mutation is a total function: out-of-range input is handled by a
//! defined no-op or removal rule, never by an error. Mutations report
//! whether they changed the cart so the observable [`crate::store::CartStore`]
//! can notify subscribers only on real state transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product-with-quantity entry in the cart.
///
/// Holds the full product value as it looked when first added, so the line
/// keeps displaying consistent data even if the catalog entry is edited
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLine {
    /// Product snapshot (price frozen at time of adding).
    pub product: Product,

    /// Quantity in cart, always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Calculates the line total in cents (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The session shopping cart.
///
/// Two meta-states only: empty and non-empty. Every operation maps the
/// current state to a fully consistent next state; no reader can observe a
/// partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order, unique by product id.
    lines: Vec<CartLine>,

    /// When the cart was created or last cleared.
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1.
    /// - Product not in cart: appended as a new line with quantity 1.
    ///
    /// Never fails. No stock check happens here: whether an out-of-stock
    /// product may be added is the caller's decision, made before invoking
    /// this operation.
    pub fn add_item(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product));
    }

    /// Removes the line for a product id.
    ///
    /// Returns `true` if a line was removed, `false` if no line existed.
    /// An absent id is a no-op, not an error.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        self.lines.len() != initial_len
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves as [`Cart::remove_item`].
    /// - Line present: quantity becomes exactly `quantity`.
    /// - Line absent: silent no-op returning `false`. The cart does not
    ///   auto-insert a line for an unknown id.
    ///
    /// Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id);
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Empties the cart. Idempotent.
    ///
    /// Returns `true` if any line was removed.
    pub fn clear(&mut self) -> bool {
        if self.lines.is_empty() {
            return false;
        }
        self.lines.clear();
        self.created_at = Utc::now();
        true
    }

    /// Returns the lines in insertion order.
    #[inline]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total quantity across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products in the cart.
    #[inline]
    pub fn distinct_count(&self) -> usize {
        self.lines.len()
    }

    /// Calculates the subtotal in cents (pre-tax).
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(|l| l.line_total_cents()).sum()
    }

    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_cents(self.subtotal_cents())
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived totals summary for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub item_count: i64,
    /// Number of distinct products.
    pub distinct_count: usize,
    /// Pre-tax subtotal in cents.
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            distinct_count: cart.distinct_count(),
            subtotal_cents: cart.subtotal_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
