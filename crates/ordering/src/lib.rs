//! Burger Cart Ordering - cart ledger and order hand-off.
//!
//! The [`CartLedger`](ledger::CartLedger) owns the cart for the session. It
//! loads from a [`KeyValueStore`](storage::KeyValueStore), writes through on
//! every mutation, notifies [`CartObserver`](events::CartObserver)s so a
//! renderer can redraw, and on checkout hands the order message to an
//! [`OrderDispatcher`](dispatch::OrderDispatcher).
//!
//! # Modules
//!
//! - [`ledger`] - Cart state, totals and checkout
//! - [`message`] - Order message rendering
//! - [`storage`] - Durable key-value ports (memory and file backed)
//! - [`dispatch`] - Messaging deep links
//! - [`events`] - Observer port and cart snapshots
//! - [`catalog`] - Menu, search and product image galleries
//! - [`config`] - Environment configuration
//! - [`error`] - Error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod ledger;
pub mod message;
pub mod storage;

pub use config::OrderingConfig;
pub use error::{CheckoutError, OrderError};
pub use ledger::{CartLedger, LedgerSettings};
pub use message::OrderRequest;
