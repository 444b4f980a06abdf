//! Integration tests for the Aavakaaram cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aavakaaram-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Checkout-flow scenarios against file-backed storage
//! - `cart_properties` - Randomized operation sequences checked against a model
//!
//! Shared fixtures live here so both suites build carts the same way.

use aavakaaram_cart::CartItem;
use aavakaaram_core::{Price, ProductId};

/// Mango pickle at ₹350.
#[must_use]
pub fn mango_pickle() -> CartItem {
    CartItem::new(
        ProductId::new("A"),
        "Mango Pickle",
        Price::whole(350),
        "/images/mango-pickle.jpg",
    )
}

/// Lemon pickle at ₹280.
#[must_use]
pub fn lemon_pickle() -> CartItem {
    CartItem::new(
        ProductId::new("B"),
        "Lemon Pickle",
        Price::whole(280),
        "/images/lemon-pickle.jpg",
    )
}
