//! Flat-file JSON persistence for the order registry.
//!
//! The whole order map is written on every save (full overwrite); the file is
//! a JSON object keyed by order number with one record per order. On load a
//! missing file means an empty registry, while a present-but-malformed file
//! is surfaced as an error rather than silently swallowed.

use crate::entities::Order;
use crate::errors::{Error, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the registry file on disk.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the given file path. The file need not
    /// exist yet; it is created on the first save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The file this store reads and writes.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all persisted orders. A missing file yields an empty map.
    pub fn load(&self) -> Result<BTreeMap<u32, Order>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no registry file, starting empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let orders: BTreeMap<u32, Order> = serde_json::from_str(&contents)?;
        debug!(path = %self.path.display(), count = orders.len(), "loaded registry");
        Ok(orders)
    }

    /// Writes the full order map, overwriting any previous contents.
    pub fn save(&self, orders: &BTreeMap<u32, Order>) -> Result<()> {
        let contents = serde_json::to_string_pretty(orders)?;
        std::fs::write(&self.path, contents)?;
        debug!(path = %self.path.display(), count = orders.len(), "saved registry");
        Ok(())
    }
}
