//! # Cart Store
//!
//! Observable owner of the session cart.
//!
//! The store is the single source of truth for the active cart. Mutation is
//! synchronous: the state transition commits first, then every registered
//! subscriber is invoked exactly once with the fully committed cart.
//! Subscribers can therefore only ever observe consistent states, never a
//! partial update.
//!
//! No-op mutations (removing an absent id, setting a quantity on an absent
//! line, clearing an empty cart) commit no transition and do not notify.
//!
//! ## Ownership
//! The store has one logical owner and no interior locking. The application
//! composition root creates it, holds it for the session lifetime, and hands
//! it to whichever layer needs it; a multi-threaded runtime wraps it in its
//! own shared handle.
//!
//! ## Usage
//! ```rust
//! use zentro_core::store::CartStore;
//! use zentro_core::types::Product;
//!
//! let mut store = CartStore::new();
//! let sub = store.subscribe(|cart| {
//!     println!("cart now holds {} item(s)", cart.item_count());
//! });
//!
//! store.add_item(&Product::new("1", "Wireless Headphones", 19999));
//! store.unsubscribe(sub);
//! ```

use std::fmt;

use crate::cart::Cart;
use crate::types::Product;

// =============================================================================
// Subscription Id
// =============================================================================

/// Handle identifying one registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// =============================================================================
// Cart Store
// =============================================================================

type Callback = Box<dyn FnMut(&Cart) + Send>;

struct Subscriber {
    id: SubscriptionId,
    callback: Callback,
}

/// Owns the session cart and notifies subscribers of committed changes.
pub struct CartStore {
    cart: Cart,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl CartStore {
    /// Creates a store with an empty cart and no subscribers.
    pub fn new() -> Self {
        CartStore {
            cart: Cart::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Read access to the current cart state.
    #[inline]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Registers a callback invoked after every committed state change.
    ///
    /// The callback sees the cart only in fully consistent states. Returns
    /// a handle for [`CartStore::unsubscribe`].
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Cart) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Removes a subscriber.
    ///
    /// Returns `true` if the handle was registered. Unknown handles are a
    /// no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let initial_len = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != initial_len
    }

    /// Adds one unit of a product, then notifies subscribers.
    ///
    /// Never fails; see [`Cart::add_item`] for the increment-or-insert rule.
    pub fn add_item(&mut self, product: &Product) {
        self.cart.add_item(product);
        self.notify();
    }

    /// Removes the line for a product id, notifying only if a line existed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let changed = self.cart.remove_item(product_id);
        if changed {
            self.notify();
        }
        changed
    }

    /// Sets a line's quantity (non-positive removes), notifying on change.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        let changed = self.cart.set_quantity(product_id, quantity);
        if changed {
            self.notify();
        }
        changed
    }

    /// Empties the cart, notifying only if it held any lines.
    pub fn clear(&mut self) -> bool {
        let changed = self.cart.clear();
        if changed {
            self.notify();
        }
        changed
    }

    /// Invokes every subscriber once with the committed cart.
    fn notify(&mut self) {
        let cart = &self.cart;
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(cart);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        CartStore::new()
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartTotals;
    use crate::types::Product;
    use std::sync::{Arc, Mutex};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents)
    }

    /// Subscriber that records the totals of every state it observes.
    fn recording_subscriber(store: &mut CartStore) -> (SubscriptionId, Arc<Mutex<Vec<CartTotals>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |cart| {
            sink.lock().expect("test sink poisoned").push(CartTotals::from(cart));
        });
        (id, seen)
    }

    #[test]
    fn test_notifies_once_per_mutation() {
        let mut store = CartStore::new();
        let (_, seen) = recording_subscriber(&mut store);

        let product = test_product("1", 19999);
        store.add_item(&product);
        store.add_item(&product);
        store.set_quantity("1", 5);
        store.remove_item("1");

        let seen = seen.lock().expect("test sink poisoned");
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].item_count, 1);
        assert_eq!(seen[1].item_count, 2);
        assert_eq!(seen[2].item_count, 5);
        assert_eq!(seen[3].item_count, 0);
    }

    #[test]
    fn test_subscriber_observes_committed_state() {
        let mut store = CartStore::new();
        let (_, seen) = recording_subscriber(&mut store);

        store.add_item(&test_product("1", 19999));
        store.add_item(&test_product("2", 8999));

        // Each observed snapshot is internally consistent
        let seen = seen.lock().expect("test sink poisoned");
        assert_eq!(
            seen.as_slice(),
            [
                CartTotals {
                    item_count: 1,
                    distinct_count: 1,
                    subtotal_cents: 19999,
                },
                CartTotals {
                    item_count: 2,
                    distinct_count: 2,
                    subtotal_cents: 28998,
                },
            ]
        );
    }

    #[test]
    fn test_noop_mutations_do_not_notify() {
        let mut store = CartStore::new();
        let (_, seen) = recording_subscriber(&mut store);

        assert!(!store.remove_item("missing"));
        assert!(!store.set_quantity("missing", 3));
        assert!(!store.clear());

        assert!(seen.lock().expect("test sink poisoned").is_empty());
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut store = CartStore::new();
        let (id, seen) = recording_subscriber(&mut store);

        store.add_item(&test_product("1", 999));
        assert!(store.unsubscribe(id));
        store.add_item(&test_product("2", 1999));

        assert_eq!(seen.lock().expect("test sink poisoned").len(), 1);

        // Unknown handle is a no-op
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn test_multiple_subscribers_each_notified() {
        let mut store = CartStore::new();
        let (_, first) = recording_subscriber(&mut store);
        let (_, second) = recording_subscriber(&mut store);

        store.add_item(&test_product("1", 999));

        assert_eq!(first.lock().expect("test sink poisoned").len(), 1);
        assert_eq!(second.lock().expect("test sink poisoned").len(), 1);
    }

    #[test]
    fn test_derived_reads_via_store() {
        let mut store = CartStore::new();
        store.add_item(&test_product("1", 19999));
        store.add_item(&test_product("1", 19999));
        store.add_item(&test_product("2", 8999));

        assert_eq!(store.cart().distinct_count(), 2);
        assert_eq!(store.cart().item_count(), 3);
        assert_eq!(store.cart().subtotal_cents(), 48997);
    }
}
