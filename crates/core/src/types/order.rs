//! Checkout hand-off records.
//!
//! A cart is not tied to an account. At checkout the cart's lines are
//! snapshotted into an [`OrderDraft`] owned by the signed-in user, which the
//! order-placement surface persists.

use serde::{Deserialize, Serialize};

use crate::{OrderStatus, Price, ProductId, UserId};

/// One purchased product, with price and display metadata frozen at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub price: Price,
    pub image: String,
}

impl OrderItem {
    /// Price of this item times its quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// An order ready to be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: Price,
    pub status: OrderStatus,
}

impl OrderDraft {
    /// Build a pending draft whose total is the sum of its item totals.
    #[must_use]
    pub fn pending(user_id: UserId, items: Vec<OrderItem>) -> Self {
        let total_amount = items.iter().map(OrderItem::line_total).sum();
        Self {
            user_id,
            items,
            total_amount,
            status: OrderStatus::Pending,
        }
    }
}
