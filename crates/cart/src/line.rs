//! Cart line types.

use serde::{Deserialize, Serialize};

use aavakaaram_core::{OrderItem, Price, ProductId};

/// A product as handed to the cart by a listing or product-detail page.
///
/// The unit price is whatever the caller resolved at the time of adding,
/// with any active discount already applied. The cart never re-prices it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub image: String,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub fn new(
        product_id: ProductId,
        product_name: impl Into<String>,
        unit_price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id,
            product_name: product_name.into(),
            unit_price,
            image: image.into(),
        }
    }
}

/// One entry per distinct product in a [`Cart`](crate::Cart).
///
/// Lines are only created and modified by the cart, which keeps the quantity
/// at one or more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    item: CartItem,
    quantity: u32,
}

impl CartLine {
    pub(crate) const fn new(item: CartItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub(crate) const fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    pub(crate) const fn increment(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
    }

    pub(crate) fn into_parts(self) -> (CartItem, u32) {
        (self.item, self.quantity)
    }

    /// The product metadata captured when the line was first added.
    #[must_use]
    pub const fn item(&self) -> &CartItem {
        &self.item
    }

    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.item.product_id
    }

    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.item.product_name
    }

    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.item.unit_price
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.item.image
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.unit_price.times(self.quantity)
    }
}

impl From<&CartLine> for OrderItem {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.item.product_id.clone(),
            product_name: line.item.product_name.clone(),
            quantity: line.quantity,
            price: line.item.unit_price,
            image: line.item.image.clone(),
        }
    }
}
