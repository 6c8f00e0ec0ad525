//! JSON file persistence for [`InventoryStore`].
//!
//! The file is a single object mapping item names to integer quantities.
//! Errors are returned to the caller untouched; nothing here retries or
//! falls back to an empty store.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stocktrack_core::{InventoryError, InventoryResult};

use crate::store::InventoryStore;

/// File used when the caller does not name one.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

impl InventoryStore {
    /// Read a store from `path`.
    pub fn load(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let text = {
            let file = File::open(path).map_err(|e| InventoryError::read(path, e))?;
            io::read_to_string(file).map_err(|e| InventoryError::read(path, e))?
        };
        let store: InventoryStore =
            serde_json::from_str(&text).map_err(|e| InventoryError::parse(path, e))?;

        tracing::debug!(path = %path.display(), items = store.len(), "inventory loaded");
        Ok(store)
    }

    /// Replace the whole store with the contents of `path`.
    ///
    /// On error the current contents are kept.
    pub fn load_data(&mut self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let loaded = Self::load(path)?;
        self.replace(loaded);
        Ok(())
    }

    /// Write the whole store to `path`, overwriting it.
    pub fn save_data(&self, path: impl AsRef<Path>) -> InventoryResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| InventoryError::write(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self).map_err(|e| InventoryError::encode(path, e))?;
        writer.flush().map_err(|e| InventoryError::write(path, e))?;

        tracing::debug!(path = %path.display(), items = self.len(), "inventory saved");
        Ok(())
    }
}
