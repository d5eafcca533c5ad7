//! Menu card loading from menu.toml
//!
//! The card maps item names (case-insensitive, stored lower-cased) to unit
//! prices in whole rupees, and carries the tax rates and the flat packaging
//! surcharge. The card is fixed for the lifetime of the process: it is loaded
//! once at startup and passed explicitly into the registry, never mutated.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

fn default_cgst_rate() -> f64 {
    0.09
}

fn default_sgst_rate() -> f64 {
    0.09
}

fn default_packaging_surcharge() -> i64 {
    20
}

/// The café's menu card plus billing constants.
#[derive(Debug, Clone, Deserialize)]
pub struct Menu {
    /// Item name (lower-cased) to unit price in Rs.
    items: BTreeMap<String, i64>,
    /// Central GST rate applied to the subtotal.
    #[serde(default = "default_cgst_rate")]
    pub cgst_rate: f64,
    /// State GST rate applied to the subtotal.
    #[serde(default = "default_sgst_rate")]
    pub sgst_rate: f64,
    /// Flat surcharge in Rs. for take-out packaging.
    #[serde(default = "default_packaging_surcharge")]
    pub packaging_surcharge: i64,
}

impl Default for Menu {
    /// The built-in card, used when no menu.toml is present.
    fn default() -> Self {
        let items = [
            ("coffee", 250),
            ("tea", 50),
            ("sandwich", 200),
            ("burger", 350),
            ("fries", 100),
            ("cake", 500),
        ]
        .into_iter()
        .map(|(name, price)| (name.to_string(), price))
        .collect();

        Self {
            items,
            cgst_rate: default_cgst_rate(),
            sgst_rate: default_sgst_rate(),
            packaging_surcharge: default_packaging_surcharge(),
        }
    }
}

impl Menu {
    /// Looks up the unit price for an item. `name` must already be
    /// lower-cased; stored keys always are.
    #[must_use]
    pub fn price(&self, name: &str) -> Option<i64> {
        self.items.get(name).copied()
    }

    /// Whether the card carries an item with this (lower-cased) name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Number of items on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the card is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Normalizes item keys to lower case and rejects non-positive prices.
    fn validate(mut self) -> Result<Self> {
        self.items = std::mem::take(&mut self.items)
            .into_iter()
            .map(|(name, price)| (name.to_lowercase(), price))
            .collect();

        if let Some((name, price)) = self.items.iter().find(|(_, price)| **price <= 0) {
            return Err(Error::Config {
                message: format!("menu item '{name}' has non-positive price {price}"),
            });
        }

        Ok(self)
    }
}

/// Loads the menu card from a TOML file.
///
/// A missing file is not an error: the built-in default card is used so the
/// system runs unconfigured. A present-but-malformed file aborts startup.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Menu> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "no menu file, using built-in card");
        return Ok(Menu::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read menu file {}: {e}", path.display()),
    })?;

    let menu: Menu = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path.display()),
    })?;

    menu.validate()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_default_card_has_expected_prices() {
        let menu = Menu::default();
        assert_eq!(menu.price("coffee"), Some(250));
        assert_eq!(menu.price("tea"), Some(50));
        assert_eq!(menu.price("cake"), Some(500));
        assert_eq!(menu.price("pizza"), None);
        assert_eq!(menu.len(), 6);
        assert_eq!(menu.cgst_rate, 0.09);
        assert_eq!(menu.sgst_rate, 0.09);
        assert_eq!(menu.packaging_surcharge, 20);
    }

    #[test]
    fn test_parse_menu_toml() {
        let toml_str = r#"
            cgst_rate = 0.05
            sgst_rate = 0.05
            packaging_surcharge = 10

            [items]
            Espresso = 180
            croissant = 120
        "#;

        let menu: Menu = toml::from_str(toml_str).unwrap();
        let menu = menu.validate().unwrap();
        assert_eq!(menu.price("espresso"), Some(180));
        assert_eq!(menu.price("croissant"), Some(120));
        assert_eq!(menu.cgst_rate, 0.05);
        assert_eq!(menu.packaging_surcharge, 10);
    }

    #[test]
    fn test_rates_default_when_omitted() {
        let toml_str = r"
            [items]
            coffee = 250
        ";

        let menu: Menu = toml::from_str(toml_str).unwrap();
        assert_eq!(menu.cgst_rate, 0.09);
        assert_eq!(menu.sgst_rate, 0.09);
        assert_eq!(menu.packaging_surcharge, 20);
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let toml_str = r"
            [items]
            coffee = 0
        ";

        let menu: Menu = toml::from_str(toml_str).unwrap();
        assert!(menu.validate().is_err());
    }

    #[test]
    fn test_load_menu_missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let menu = load_menu(dir.path().join("no-such-menu.toml")).unwrap();
        assert_eq!(menu.price("coffee"), Some(250));
    }

    #[test]
    fn test_load_menu_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();
        assert!(load_menu(&path).is_err());
    }
}
