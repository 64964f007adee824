//! Durable key-value storage for the cart.
//!
//! The cart is stored under a single key ([`CART_KEY`]) as a JSON array of
//! line item records. Two backends are provided:
//!
//! - [`MemoryStore`] - process-local map, used by tests and embedders that
//!   persist elsewhere
//! - [`FileStore`] - one `<key>.json` file per key inside a data directory
//!
//! Reading the cart never fails: absent, unreadable or malformed content is
//! treated as an empty cart.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use burger_cart_core::LineItem;
use thiserror::Error;
use tracing::{debug, warn};

/// Key holding the serialized cart.
pub const CART_KEY: &str = "cart";

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A durable string-to-string store.
///
/// `set` overwrites any previous value and is atomic from the caller's side.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, e.g. to simulate data left by a previous session.
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: each key maps to `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling file that is then renamed over the
/// target, so readers see either the old or the new value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Load the cart from `store`.
///
/// Records sharing a name are merged: quantities are summed and the first
/// record's price and image are kept.
pub fn load_cart<S: KeyValueStore + ?Sized>(store: &S) -> Vec<LineItem> {
    let raw = match store.get(CART_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No stored cart, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "Failed to read stored cart, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<LineItem>>>(&raw) {
        Ok(items) => {
            let items = merge_duplicates(items.unwrap_or_default());
            debug!(items = items.len(), "Loaded stored cart");
            items
        }
        Err(e) => {
            warn!(error = %e, "Stored cart is malformed, starting empty");
            Vec::new()
        }
    }
}

/// Overwrite the stored cart with `items`.
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails.
pub fn save_cart<S: KeyValueStore + ?Sized>(
    store: &mut S,
    items: &[LineItem],
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(items)?;
    store.set(CART_KEY, &raw)
}

fn merge_duplicates(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(items.len());
    for item in items {
        match merged.iter_mut().find(|existing| existing.name() == item.name()) {
            Some(existing) => {
                if let Some(count) = std::num::NonZeroU32::new(item.quantity()) {
                    existing.add_quantity(count);
                }
            }
            None => merged.push(item),
        }
    }
    merged
}
