//! Cart persistence.
//!
//! A cart is stored as a single named JSON blob:
//!
//! ```json
//! {
//!   "state": { "items": [ { "productId": "A", "productName": "Mango Pickle",
//!                           "price": "350", "image": "", "quantity": 3 } ] },
//!   "version": 0,
//!   "savedAt": "2026-10-14T09:30:00Z"
//! }
//! ```
//!
//! [`CartStorage`] is the seam the store writes through. Implementations:
//!
//! - [`MemoryStorage`] - in-process blob, used by tests and ephemeral sessions
//! - [`FileStorage`] - one file per namespace on local disk

mod file;
mod memory;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::cart::Cart;

/// Highest blob version this crate reads and the version it writes.
pub const STORAGE_VERSION: u32 = 0;

/// Errors from a persistence backend.
///
/// The store logs and discards these; they never reach cart callers.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing medium failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The blob is not a valid cart document.
    #[error("invalid cart blob: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The blob was written by a newer release.
    #[error("unsupported cart blob version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the blob.
        found: u32,
        /// Highest version this release reads.
        supported: u32,
    },

    /// The backend refuses reads or writes (quota exceeded, disabled, poisoned).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for a single cart.
pub trait CartStorage {
    /// Read the stored cart. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read or the blob is invalid.
    fn load(&self) -> Result<Option<Cart>, StorageError>;

    /// Replace the stored cart.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend rejects the write.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        (**self).save(cart)
    }
}

impl<T: CartStorage + ?Sized> CartStorage for Box<T> {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        (**self).save(cart)
    }
}

/// The persisted blob envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedCart {
    pub state: Cart,
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PersistedCart {
    /// Wrap a cart for writing, stamped with the current time.
    #[must_use]
    pub fn new(cart: Cart) -> Self {
        Self {
            state: cart,
            version: STORAGE_VERSION,
            saved_at: Some(Utc::now()),
        }
    }

    /// Serialize to the JSON blob format.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON blob, rejecting versions newer than [`STORAGE_VERSION`].
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed blobs and
    /// `StorageError::UnsupportedVersion` for blobs from a newer release.
    pub fn from_json(blob: &str) -> Result<Self, StorageError> {
        let persisted: Self = serde_json::from_str(blob)?;
        if persisted.version > STORAGE_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: persisted.version,
                supported: STORAGE_VERSION,
            });
        }
        Ok(persisted)
    }

    #[must_use]
    pub fn into_cart(self) -> Cart {
        self.state
    }
}
