//! In-process cart storage.

use std::sync::{Arc, Mutex, MutexGuard};

use super::{CartStorage, PersistedCart, StorageError};
use crate::cart::Cart;

#[derive(Debug, Default)]
struct Inner {
    blob: Option<String>,
    unavailable: bool,
    saves: usize,
}

/// Keeps the serialized blob in memory.
///
/// Clones share the same blob, so a test can hand one clone to a
/// [`CartStore`](crate::CartStore) and inspect what was written through
/// another. The JSON text is stored, not the `Cart` value, and decoded on
/// every load.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage preloaded with a blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut inner) = storage.inner.lock() {
            inner.blob = Some(blob.into());
        }
        storage
    }

    /// Make every subsequent load and save fail, or restore normal operation.
    pub fn set_unavailable(&self, unavailable: bool) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.unavailable = unavailable;
        }
    }

    /// The currently stored blob, if any.
    #[must_use]
    pub fn blob(&self) -> Option<String> {
        self.inner.lock().ok().and_then(|inner| inner.blob.clone())
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.inner.lock().map(|inner| inner.saves).unwrap_or_default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StorageError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))?;
        if inner.unavailable {
            return Err(StorageError::Unavailable(
                "memory storage disabled".to_string(),
            ));
        }
        Ok(inner)
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        let inner = self.lock()?;
        inner
            .blob
            .as_deref()
            .map(|blob| PersistedCart::from_json(blob).map(PersistedCart::into_cart))
            .transpose()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        let blob = PersistedCart::new(cart.clone()).to_json()?;
        let mut inner = self.lock()?;
        inner.blob = Some(blob);
        inner.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use aavakaaram_core::{Price, ProductId};

    use super::*;
    use crate::line::CartItem;

    #[test]
    fn test_empty_load_is_none() {
        assert!(MemoryStorage::new().load().unwrap().is_none());
    }

    #[test]
    fn test_clones_share_blob() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        let mut cart = Cart::new();
        cart.add_item(
            CartItem::new(ProductId::new("A"), "Mango Pickle", Price::whole(350), ""),
            1,
        );
        storage.save(&cart).unwrap();

        assert_eq!(handle.save_count(), 1);
        assert_eq!(handle.load().unwrap(), Some(cart));
    }

    #[test]
    fn test_unavailable_fails_both_ways() {
        let storage = MemoryStorage::new();
        storage.set_unavailable(true);
        assert!(matches!(storage.load(), Err(StorageError::Unavailable(_))));
        assert!(matches!(
            storage.save(&Cart::new()),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(storage.save_count(), 0);

        storage.set_unavailable(false);
        storage.save(&Cart::new()).unwrap();
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn test_with_blob_invalid() {
        let storage = MemoryStorage::with_blob("garbage");
        assert!(matches!(
            storage.load(),
            Err(StorageError::Serialization(_))
        ));
    }
}
