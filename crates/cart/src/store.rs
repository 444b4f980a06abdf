//! The session cart store.
//!
//! A [`CartStore`] owns one [`Cart`] and the [`CartStorage`] it persists to.
//! It is created once per browsing session by the layer that owns the
//! session, restores whatever was stored, and writes the cart back after
//! every mutation.
//!
//! # Failure model
//!
//! No operation returns an error. Storage failures are logged at `warn` and
//! otherwise ignored: the in-memory cart stays correct for the rest of the
//! session, it just may not survive a reload.

use tracing::{debug, info, instrument, warn};

use aavakaaram_core::{CurrencyCode, OrderDraft, Price, ProductId, UserId};

use crate::cart::Cart;
use crate::line::{CartItem, CartLine};
use crate::storage::CartStorage;
use crate::view::CartView;

/// Stateful cart for one session.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart from `storage`, or start empty.
    ///
    /// A missing, unreadable or invalid blob all yield an empty cart.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(cart)) => {
                info!(
                    lines = cart.len(),
                    items = cart.item_count(),
                    "Restored persisted cart"
                );
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Failed to restore cart, starting empty");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    /// Add `quantity` of a product, merging with any existing line.
    ///
    /// A quantity of 0 is ignored and nothing is written.
    #[instrument(skip(self, item), fields(product_id = %item.product_id))]
    pub fn add_item(&mut self, item: CartItem, quantity: u32) {
        if !self.cart.add_item(item, quantity) {
            debug!("Ignoring add with zero quantity");
            return;
        }
        self.persist();
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, item: CartItem) {
        self.add_item(item, 1);
    }

    /// Remove a product's line. Removing an absent product changes nothing.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) {
        if self.cart.remove_item(product_id).is_none() {
            debug!("Product not in cart");
        }
        self.persist();
    }

    /// Set a line's quantity; zero or less removes it. An absent product is
    /// left out of the cart.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if !self.cart.update_quantity(product_id, quantity) {
            debug!("Quantity update left cart unchanged");
        }
        self.persist();
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Sum of unit price times quantity, zero when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Sum of quantities, zero when empty.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    #[must_use]
    pub fn view(&self, currency: CurrencyCode) -> CartView {
        CartView::new(&self.cart, currency)
    }

    /// Snapshot the cart as a pending order for `user_id`.
    ///
    /// Returns `None` for an empty cart. The cart itself is left as is; the
    /// caller clears it once the order has been placed.
    #[must_use]
    pub fn checkout_draft(&self, user_id: UserId) -> Option<OrderDraft> {
        if self.cart.is_empty() {
            return None;
        }
        Some(OrderDraft::pending(user_id, self.cart.to_order_items()))
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store, returning the cart and its storage.
    #[must_use]
    pub fn into_parts(self) -> (Cart, S) {
        (self.cart, self.storage)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.cart) {
            warn!(
                error = %e,
                "Failed to persist cart; keeping in-memory state"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aavakaaram_core::OrderStatus;

    use super::*;
    use crate::storage::{MemoryStorage, PersistedCart};

    fn mango() -> CartItem {
        CartItem::new(ProductId::new("A"), "Mango Pickle", Price::whole(350), "/mango.jpg")
    }

    fn lemon() -> CartItem {
        CartItem::new(ProductId::new("B"), "Lemon Pickle", Price::whole(280), "/lemon.jpg")
    }

    fn stored_cart(storage: &MemoryStorage) -> Cart {
        PersistedCart::from_json(&storage.blob().unwrap())
            .unwrap()
            .into_cart()
    }

    #[test]
    fn test_open_empty_storage() {
        let store = CartStore::open(MemoryStorage::new());
        assert!(store.cart().is_empty());
        assert_eq!(store.total(), Price::ZERO);
        assert_eq!(store.item_count(), 0);
    }

    #[test]
    fn test_open_invalid_blob_starts_empty() {
        let store = CartStore::open(MemoryStorage::with_blob("not a cart"));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_open_unavailable_storage_starts_empty() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        let store = CartStore::open(storage);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_mutations_persist() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());

        store.add_item(mango(), 2);
        store.add_one(lemon());
        assert_eq!(storage.save_count(), 2);
        assert_eq!(&stored_cart(&storage), store.cart());

        store.update_quantity(&ProductId::new("B"), 5);
        store.remove_item(&ProductId::new("A"));
        assert_eq!(storage.save_count(), 4);
        assert_eq!(stored_cart(&storage).item_count(), 5);

        store.clear_cart();
        assert_eq!(storage.save_count(), 5);
        assert!(stored_cart(&storage).is_empty());
    }

    #[test]
    fn test_zero_quantity_add_is_not_persisted() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());

        store.add_item(mango(), 0);
        assert!(store.cart().is_empty());
        assert_eq!(storage.save_count(), 0);
    }

    #[test]
    fn test_reopen_restores_cart() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());
        store.add_item(mango(), 2);
        store.add_item(lemon(), 1);
        store.add_item(mango(), 1);
        let before = store.cart().clone();
        drop(store);

        let reopened = CartStore::open(storage);
        assert_eq!(reopened.cart(), &before);
        assert_eq!(reopened.total(), Price::whole(1330));
        assert_eq!(reopened.item_count(), 4);
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let storage = MemoryStorage::new();
        let mut store = CartStore::open(storage.clone());
        store.add_item(lemon(), 1);

        storage.set_unavailable(true);
        store.add_item(mango(), 3);
        assert_eq!(store.item_count(), 4);
        assert_eq!(store.total(), Price::whole(1330));

        storage.set_unavailable(false);
        assert_eq!(stored_cart(&storage).item_count(), 1);
    }

    #[test]
    fn test_checkout_draft() {
        let mut store = CartStore::open(MemoryStorage::new());
        assert!(store.checkout_draft(UserId::new("u1")).is_none());

        store.add_item(mango(), 3);
        store.add_item(lemon(), 1);

        let draft = store.checkout_draft(UserId::new("u1")).unwrap();
        assert_eq!(draft.user_id, UserId::new("u1"));
        assert_eq!(draft.items.len(), 2);
        assert_eq!(draft.total_amount, store.total());
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_view_uses_currency() {
        let mut store = CartStore::open(MemoryStorage::new());
        store.add_item(lemon(), 2);
        let view = store.view(CurrencyCode::INR);
        assert_eq!(view.subtotal, "₹560.00");
        assert_eq!(view.item_count, 2);
    }
}
