//! Core types for Burger Cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod line_item;
pub mod order;
pub mod price;

pub use line_item::LineItem;
pub use order::{CardType, DeliveryMethod, OrderOptionError, PaymentMethod};
pub use price::{CurrencyCode, Money};
