//! The cart aggregate.
//!
//! A [`Cart`] is an insertion-ordered list of [`CartLine`]s with at most one
//! line per product and every quantity at one or more. Totals are folded over
//! the lines on each call and never cached.

use serde::{Deserialize, Serialize};

use aavakaaram_core::{OrderItem, Price, ProductId};

use crate::line::{CartItem, CartLine};

/// Selected products, one line per product in first-added order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredCart")]
pub struct Cart {
    items: Vec<CartLine>,
}

/// Wire shape of a cart; normalized through [`Cart::from_lines`] on load.
#[derive(Deserialize)]
struct StoredCart {
    #[serde(default)]
    items: Vec<CartLine>,
}

impl From<StoredCart> for Cart {
    fn from(stored: StoredCart) -> Self {
        Self::from_lines(stored.items)
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from previously stored lines.
    ///
    /// Lines are replayed as additions, so zero-quantity lines are dropped and
    /// repeated product ids fold into the first occurrence.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        let mut replayed = 0_usize;
        for line in lines {
            replayed += 1;
            let (item, quantity) = line.into_parts();
            cart.add_item(item, quantity);
        }
        if replayed != cart.items.len() {
            tracing::debug!(
                stored = replayed,
                kept = cart.items.len(),
                "normalized stored cart lines"
            );
        }
        cart
    }

    /// Add `quantity` of a product.
    ///
    /// An existing line for the same product has its quantity increased and
    /// keeps its original name, price and image. Otherwise a new line is
    /// appended. Returns `false` without changing anything if `quantity` is 0.
    pub fn add_item(&mut self, item: CartItem, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        match self.line_mut(&item.product_id) {
            Some(line) => line.increment(quantity),
            None => self.items.push(CartLine::new(item, quantity)),
        }
        true
    }

    /// Remove the line for a product, returning it if it was present.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Option<CartLine> {
        let index = self
            .items
            .iter()
            .position(|line| line.product_id() == product_id)?;
        Some(self.items.remove(index))
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// `u32::MAX` are clamped. A product that is not in the cart is left out;
    /// no line is created. Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id).is_some();
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.line_mut(product_id).is_some_and(|line| {
            line.set_quantity(quantity);
            true
        })
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items
            .iter()
            .find(|line| line.product_id() == product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot the lines as order items for checkout.
    #[must_use]
    pub fn to_order_items(&self) -> Vec<OrderItem> {
        self.items.iter().map(OrderItem::from).collect()
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.items
            .iter_mut()
            .find(|line| line.product_id() == product_id)
    }
}
