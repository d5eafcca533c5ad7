//! Order entity - one table's in-progress or completed purchase.
//!
//! An order is created when a table is opened, accumulates line items while
//! active, and transitions exactly once to closed. Closed orders are never
//! deleted; they stay in the registry as historical records. Line-item keys
//! are always valid (lower-cased) menu names: unknown items are rejected at
//! entry and never stored.

use crate::config::Menu;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Timestamp format used for `order_time`, matching the registry file.
pub const ORDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single table's order record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Table this order belongs to (1-based)
    pub table_number: u32,
    /// Unique, monotonically assigned order number; immutable after creation
    pub order_number: u32,
    /// Line items: lower-cased menu name to quantity (always >= 1)
    pub items: BTreeMap<String, u32>,
    /// Whether the order is still open for additions
    pub is_active: bool,
    /// Whether the take-out packaging surcharge applies; fixed at close time
    pub include_packaging: bool,
    /// Creation time, formatted `YYYY-MM-DD HH:MM:SS`
    pub order_time: String,
}

/// Per-item outcome of an [`Order::add_items`] call.
///
/// Unknown menu items are a partial, non-fatal failure: they are skipped and
/// reported here while the rest of the batch still applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddItemsOutcome {
    /// Items merged into the order, with the quantity that was added.
    pub added: Vec<(String, u32)>,
    /// Requested names not on the menu card, skipped.
    pub unavailable: Vec<String>,
}

impl Order {
    /// Creates a new active order for a table, timestamped now.
    #[must_use]
    pub fn new(table_number: u32, order_number: u32) -> Self {
        Self {
            table_number,
            order_number,
            items: BTreeMap::new(),
            is_active: true,
            include_packaging: false,
            order_time: chrono::Local::now().format(ORDER_TIME_FORMAT).to_string(),
        }
    }

    /// Merges a batch of requested items into the order.
    ///
    /// Names are lower-cased before the menu lookup. Quantities for an item
    /// already on the order are added together. Names not on the card are
    /// skipped and reported in the outcome; they never abort the batch.
    ///
    /// Fails with [`Error::OrderClosed`] if the order is no longer active.
    pub fn add_items(&mut self, menu: &Menu, requested: &[(String, u32)]) -> Result<AddItemsOutcome> {
        if !self.is_active {
            return Err(Error::OrderClosed {
                order_number: self.order_number,
            });
        }

        let mut outcome = AddItemsOutcome::default();
        for (name, quantity) in requested {
            let name = name.to_lowercase();
            // Quantity >= 1 is an order invariant; zero entries are dropped.
            if *quantity == 0 {
                continue;
            }
            if menu.contains(&name) {
                *self.items.entry(name.clone()).or_insert(0) += quantity;
                outcome.added.push((name, *quantity));
            } else {
                outcome.unavailable.push(name);
            }
        }
        Ok(outcome)
    }

    /// Closes the order: fixes the packaging choice and deactivates it.
    ///
    /// This is a terminal, one-way transition. Closing an already-closed
    /// order fails with [`Error::OrderClosed`].
    pub fn close(&mut self, include_packaging: bool) -> Result<()> {
        if !self.is_active {
            return Err(Error::OrderClosed {
                order_number: self.order_number,
            });
        }
        self.include_packaging = include_packaging;
        self.is_active = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{items, test_menu};

    #[test]
    fn test_add_items_merges_quantities() {
        let menu = test_menu();
        let mut order = Order::new(1, 1);

        order.add_items(&menu, &items(&[("coffee", 2)])).unwrap();
        order.add_items(&menu, &items(&[("coffee", 3), ("tea", 1)])).unwrap();

        assert_eq!(order.items.get("coffee"), Some(&5));
        assert_eq!(order.items.get("tea"), Some(&1));
    }

    #[test]
    fn test_add_items_lowercases_names() {
        let menu = test_menu();
        let mut order = Order::new(1, 1);

        let outcome = order.add_items(&menu, &items(&[("Coffee", 2)])).unwrap();

        assert_eq!(outcome.added, vec![("coffee".to_string(), 2)]);
        assert_eq!(order.items.get("coffee"), Some(&2));
    }

    #[test]
    fn test_add_items_skips_unknown_but_applies_rest() {
        let menu = test_menu();
        let mut order = Order::new(1, 1);

        let outcome = order
            .add_items(&menu, &items(&[("pizza", 1), ("tea", 2)]))
            .unwrap();

        assert_eq!(outcome.unavailable, vec!["pizza".to_string()]);
        assert_eq!(outcome.added, vec![("tea".to_string(), 2)]);
        assert!(!order.items.contains_key("pizza"));
        assert_eq!(order.items.get("tea"), Some(&2));
    }

    #[test]
    fn test_add_items_drops_zero_quantities() {
        let menu = test_menu();
        let mut order = Order::new(1, 1);

        let outcome = order.add_items(&menu, &items(&[("coffee", 0)])).unwrap();

        assert!(outcome.added.is_empty());
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_close_is_one_way() {
        let menu = test_menu();
        let mut order = Order::new(1, 1);
        order.add_items(&menu, &items(&[("coffee", 1)])).unwrap();

        order.close(true).unwrap();
        assert!(!order.is_active);
        assert!(order.include_packaging);

        // Re-closing and further additions are both rejected.
        assert!(matches!(
            order.close(false),
            Err(Error::OrderClosed { order_number: 1 })
        ));
        assert!(matches!(
            order.add_items(&menu, &items(&[("tea", 1)])),
            Err(Error::OrderClosed { order_number: 1 })
        ));
        // The packaging choice is immutable after close.
        assert!(order.include_packaging);
    }

    #[test]
    fn test_order_time_format() {
        let order = Order::new(2, 7);
        assert!(
            chrono::NaiveDateTime::parse_from_str(&order.order_time, ORDER_TIME_FORMAT).is_ok()
        );
    }

    #[test]
    fn test_serde_field_names_match_registry_format() {
        let order = Order::new(3, 4);
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["table_number"], 3);
        assert_eq!(json["order_number"], 4);
        assert_eq!(json["is_active"], true);
        assert_eq!(json["include_packaging"], false);
        assert!(json["items"].is_object());
        assert!(json["order_time"].is_string());
    }
}
