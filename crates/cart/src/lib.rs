//! Aavakaaram Cart - the storefront's shopping cart store.
//!
//! The cart lives in the browsing session, not on a server-side account. It
//! is restored once when the session starts and rewritten to durable storage
//! after every change; a user's cart is only attached to their account when a
//! checkout draft is taken from it.
//!
//! # Architecture
//!
//! - [`Cart`] - the pure aggregate: one line per product, insertion ordered
//! - [`CartStorage`] - the persistence seam (`load`/`save`), with
//!   [`MemoryStorage`] and [`FileStorage`] implementations
//! - [`CartStore`] - the stateful object a session owns; applies each
//!   operation to the cart and persists best-effort
//! - [`CartView`] - display summary for the header badge and checkout pages
//! - [`CartConfig`] - environment-driven configuration
//!
//! # Example
//!
//! ```rust
//! use aavakaaram_cart::{CartItem, CartStore, MemoryStorage};
//! use aavakaaram_core::{Price, ProductId};
//!
//! let mut store = CartStore::open(MemoryStorage::new());
//! let pickle = CartItem::new(ProductId::new("A"), "Mango Pickle", Price::whole(350), "");
//!
//! store.add_item(pickle.clone(), 2);
//! store.add_one(pickle);
//!
//! assert_eq!(store.item_count(), 3);
//! assert_eq!(store.total(), Price::whole(1050));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod line;
pub mod storage;
pub mod store;
pub mod view;

pub use cart::Cart;
pub use config::{CartConfig, ConfigError};
pub use line::{CartItem, CartLine};
pub use storage::{CartStorage, FileStorage, MemoryStorage, PersistedCart, StorageError};
pub use store::CartStore;
pub use view::{CartLineView, CartView};
