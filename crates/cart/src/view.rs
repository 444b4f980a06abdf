//! Display summaries of a cart.
//!
//! The header badge needs only the item count; the cart and checkout pages
//! need formatted prices per line. Both read from a [`CartView`].

use serde::Serialize;

use aavakaaram_core::CurrencyCode;

use crate::cart::Cart;
use crate::line::CartLine;

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub product_id: String,
    pub name: String,
    pub image: Option<String>,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            subtotal: aavakaaram_core::Price::ZERO.display(currency),
            item_count: 0,
        }
    }

    /// Summarize a cart, formatting prices in `currency`.
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartLineView::new(line, currency))
                .collect(),
            subtotal: cart.total().display(currency),
            item_count: cart.item_count(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartLineView {
    #[must_use]
    pub fn new(line: &CartLine, currency: CurrencyCode) -> Self {
        Self {
            product_id: line.product_id().to_string(),
            name: line.product_name().to_string(),
            image: if line.image().is_empty() {
                None
            } else {
                Some(line.image().to_string())
            },
            quantity: line.quantity(),
            price: line.unit_price().display(currency),
            line_price: line.line_total().display(currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use aavakaaram_core::{Price, ProductId};

    use super::*;
    use crate::line::CartItem;

    #[test]
    fn test_empty_view() {
        let view = CartView::empty(CurrencyCode::INR);
        assert!(view.is_empty());
        assert_eq!(view.subtotal, "₹0.00");
        assert_eq!(view, CartView::new(&Cart::new(), CurrencyCode::INR));
    }

    #[test]
    fn test_view_formats_lines() {
        let mut cart = Cart::new();
        cart.add_item(
            CartItem::new(ProductId::new("A"), "Mango Pickle", Price::whole(350), "/a.jpg"),
            3,
        );
        cart.add_item(
            CartItem::new(ProductId::new("B"), "Lemon Pickle", Price::whole(280), ""),
            1,
        );

        let view = CartView::new(&cart, CurrencyCode::INR);
        assert_eq!(view.subtotal, "₹1330.00");
        assert_eq!(view.item_count, 4);
        assert_eq!(view.items.len(), 2);

        let first = view.items.first().map(|item| (item.line_price.as_str(), item.image.as_deref()));
        assert_eq!(first, Some(("₹1050.00", Some("/a.jpg"))));
        let last = view.items.last().map(|item| item.image.clone());
        assert_eq!(last, Some(None));
    }
}
