//! Integration tests for Burger Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p burger-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Ledger persistence across sessions over the file store
//! - `checkout_flow` - Order validation, WhatsApp hand-off and cart clearing

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::{Path, PathBuf};

use burger_cart_ordering::storage::FileStore;
use burger_cart_ordering::{CartLedger, LedgerSettings};

/// A unique data directory removed on drop.
pub struct TestDir {
    path: PathBuf,
}

impl TestDir {
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("burger-cart-it-{}", uuid::Uuid::new_v4()));
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a ledger over this directory, as a new process would.
    #[must_use]
    pub fn open_ledger(&self) -> CartLedger<FileStore> {
        CartLedger::load(FileStore::new(&self.path), LedgerSettings::default())
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
