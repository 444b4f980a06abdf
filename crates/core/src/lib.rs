//! Aavakaaram Core - Shared types library.
//!
//! This crate provides common types used across all Aavakaaram components:
//! - `cart` - Session-scoped cart store with pluggable persistence
//! - `cli` - Command-line driver for inspecting a persisted cart
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and order hand-off records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
