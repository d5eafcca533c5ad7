//! File locations for the persistence and menu files.
//!
//! Both paths come from environment variables (loadable from a `.env` file)
//! and fall back to files in the working directory, so the binary runs with
//! no configuration at all.

use std::path::PathBuf;

/// Resolved file locations for this run.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the order registry is persisted (JSON).
    pub data_file: PathBuf,
    /// Where the menu card is read from (TOML, optional).
    pub menu_file: PathBuf,
}

impl Settings {
    /// Reads settings from `CAFE_DATA_FILE` and `CAFE_MENU_FILE`, falling
    /// back to `orders.json` and `menu.toml` when unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            data_file: std::env::var("CAFE_DATA_FILE")
                .unwrap_or_else(|_| "orders.json".to_string())
                .into(),
            menu_file: std::env::var("CAFE_MENU_FILE")
                .unwrap_or_else(|_| "menu.toml".to_string())
                .into(),
        }
    }
}
