//! Burger Cart Core - Shared types library.
//!
//! This crate provides common types used across all Burger Cart components:
//! - `ordering` - Cart ledger, persistence, order messages and dispatch
//! - `cli` - Command-line front end for browsing the menu and ordering
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no messaging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, cart line items, delivery and payment options

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
