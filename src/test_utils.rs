//! Shared test utilities for `BiscottiPos`.
//!
//! Helpers for building item batches, the default test menu, and a café
//! registry backed by a temporary file.

use crate::config::Menu;
use crate::core::Cafe;
use crate::store::Store;
use tempfile::TempDir;

/// The default card (coffee 250, tea 50, ...), as tests expect it.
#[must_use]
pub fn test_menu() -> Menu {
    Menu::default()
}

/// Builds an item batch from `(name, quantity)` pairs.
#[must_use]
pub fn items(pairs: &[(&str, u32)]) -> Vec<(String, u32)> {
    pairs
        .iter()
        .map(|(name, quantity)| ((*name).to_string(), *quantity))
        .collect()
}

/// Creates an empty café registry persisted to a temp directory.
///
/// Returns the registry and the directory guard; drop the guard and the
/// backing file disappears.
#[must_use]
pub fn setup_cafe() -> (Cafe, TempDir) {
    #[allow(clippy::unwrap_used)]
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("orders.json"));
    #[allow(clippy::unwrap_used)]
    let cafe = Cafe::load(test_menu(), store).unwrap();
    (cafe, dir)
}
