//! # Session Cart State
//!
//! Shared handle around the cart store for the active session.
//!
//! ## Thread Safety
//! The store itself is single-owner with no interior locking; this handle
//! wraps it in `Arc<Mutex<T>>` so concurrently running commands still see
//! one logical session cart and only one of them mutates at a time.
//! Derived reads happen under the same lock, so a reader can never observe
//! a half-applied mutation.

use std::sync::{Arc, Mutex};

use zentro_core::store::CartStore;

/// Session-scoped cart handle passed to commands by the composition root.
#[derive(Debug, Clone)]
pub struct SessionCart {
    store: Arc<Mutex<CartStore>>,
}

impl SessionCart {
    /// Creates a session with an empty cart.
    pub fn new() -> Self {
        SessionCart {
            store: Arc::new(Mutex::new(CartStore::new())),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session.with_store(|s| CartTotals::from(s.cart()));
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let store = self.store.lock().expect("Cart mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_store_mut(|s| s.add_item(&product));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut store = self.store.lock().expect("Cart mutex poisoned");
        f(&mut store)
    }
}

impl Default for SessionCart {
    fn default() -> Self {
        SessionCart::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zentro_core::types::Product;

    #[test]
    fn test_clones_share_one_cart() {
        let session = SessionCart::new();
        let other = session.clone();

        session.with_store_mut(|s| s.add_item(&Product::new("1", "Headphones", 19999)));

        assert_eq!(other.with_store(|s| s.cart().item_count()), 1);
    }

    #[test]
    fn test_reads_see_committed_state() {
        let session = SessionCart::new();
        let product = Product::new("1", "Headphones", 19999);

        session.with_store_mut(|s| {
            s.add_item(&product);
            s.add_item(&product);
        });

        let (items, subtotal) = session.with_store(|s| {
            (s.cart().item_count(), s.cart().subtotal_cents())
        });
        assert_eq!(items, 2);
        assert_eq!(subtotal, 39998);
    }
}
