//! Core types for Aavakaaram.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;
pub mod status;

pub use id::*;
pub use order::{OrderDraft, OrderItem};
pub use price::{CurrencyCode, CurrencyError, Price, PriceError};
pub use status::OrderStatus;
