//! Cart commands against the configured file storage.
//!
//! # Environment Variables
//!
//! - `CART_STORAGE_DIR` - Directory holding the cart file
//! - `CART_NAMESPACE` - Cart file name (without extension)
//! - `CART_CURRENCY` - Currency used to format prices

use std::str::FromStr;

use aavakaaram_cart::{CartConfig, CartItem, CartStore, CartView, FileStorage};
use aavakaaram_core::{Price, ProductId};
use rust_decimal::Decimal;
use tracing::info;

use super::CliError;

/// A unit price as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceArg(pub Price);

impl FromStr for PriceArg {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim())
            .map_err(|e| CliError::InvalidPrice(s.to_string(), e.to_string()))?;
        Price::new(amount)
            .map(Self)
            .map_err(|e| CliError::InvalidPrice(s.to_string(), e.to_string()))
    }
}

/// One CLI invocation's view of the persisted cart.
pub struct Session {
    config: CartConfig,
    store: CartStore<FileStorage>,
}

impl Session {
    /// Load configuration and restore the cart from disk.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Config` if the environment is misconfigured.
    pub fn open() -> Result<Self, CliError> {
        let config = CartConfig::from_env()?;
        let storage = config.file_storage();
        info!(path = %storage.path().display(), "Opening cart");
        Ok(Self::with_storage(config, storage))
    }

    fn with_storage(config: CartConfig, storage: FileStorage) -> Self {
        Self {
            config,
            store: CartStore::open(storage),
        }
    }

    pub fn add(
        &mut self,
        product_id: String,
        product_name: String,
        price: PriceArg,
        image: String,
        quantity: u32,
    ) {
        let item = CartItem::new(ProductId::new(product_id), product_name, price.0, image);
        self.store.add_item(item, quantity);
    }

    pub fn remove(&mut self, product_id: String) {
        self.store.remove_item(&ProductId::new(product_id));
    }

    pub fn update(&mut self, product_id: String, quantity: i64) {
        self.store.update_quantity(&ProductId::new(product_id), quantity);
    }

    pub fn clear(&mut self) {
        self.store.clear_cart();
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        self.store.view(self.config.currency)
    }

    /// Print the cart, as a table or JSON.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Output` if JSON encoding fails.
    #[allow(clippy::print_stdout)]
    pub fn print(&self, json: bool) -> Result<(), CliError> {
        let view = self.view();
        if json {
            println!("{}", serde_json::to_string_pretty(&view)?);
            return Ok(());
        }

        if view.is_empty() {
            println!("Cart is empty");
            return Ok(());
        }
        for item in &view.items {
            println!(
                "{:<16} {:<32} {:>5} x {:>12} = {:>12}",
                item.product_id, item.name, item.quantity, item.price, item.line_price
            );
        }
        println!("{} items, subtotal {}", view.item_count, view.subtotal);
        Ok(())
    }

    /// Print the formatted total.
    #[allow(clippy::print_stdout)]
    pub fn print_total(&self) {
        println!("{}", self.store.total().display(self.config.currency));
    }

    /// Print the item count.
    #[allow(clippy::print_stdout)]
    pub fn print_count(&self) {
        println!("{}", self.store.item_count());
    }
}
