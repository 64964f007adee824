//! CLI command implementations.

pub mod cart;
pub mod menu;
pub mod order;

use burger_cart_ordering::catalog::{CatalogError, Menu};
use burger_cart_ordering::events::LogObserver;
use burger_cart_ordering::storage::FileStore;
use burger_cart_ordering::{CartLedger, OrderingConfig};

/// Open the ledger over the configured data directory.
pub fn open_ledger(config: &OrderingConfig) -> CartLedger<FileStore> {
    let store = FileStore::new(&config.data_dir);
    let mut ledger = CartLedger::load(store, config.ledger_settings());
    ledger.add_observer(Box::new(LogObserver));
    ledger
}

/// The configured menu, or the built-in one.
pub fn load_menu(config: &OrderingConfig) -> Result<Menu, CatalogError> {
    config
        .menu_path
        .as_deref()
        .map_or_else(Menu::builtin, Menu::load)
}
