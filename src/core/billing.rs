//! Pure billing arithmetic.
//!
//! Subtotals are whole rupees (prices and quantities are integers); the two
//! GST components are computed as flat percentages of the subtotal and may be
//! fractional, so taxes and the grand total are `f64`. No function here has
//! side effects.

use crate::config::Menu;
use crate::entities::Order;
use std::collections::BTreeMap;

/// The full cost breakdown for an order.
#[derive(Debug, Clone, PartialEq)]
pub struct Totals {
    /// Sum of unit price x quantity over all line items, in Rs.
    pub subtotal: i64,
    /// Central GST component.
    pub cgst: f64,
    /// State GST component.
    pub sgst: f64,
    /// Flat packaging surcharge, present only for take-out orders.
    pub packaging: Option<i64>,
    /// subtotal + cgst + sgst + packaging.
    pub total: f64,
}

/// Sums `unit price x quantity` over the line items.
///
/// Line-item keys are validated against the menu when items are added, so
/// every key resolves to a price here; a key the card no longer carries
/// contributes nothing.
#[must_use]
pub fn subtotal(items: &BTreeMap<String, u32>, menu: &Menu) -> i64 {
    items
        .iter()
        .filter_map(|(name, quantity)| Some(menu.price(name)? * i64::from(*quantity)))
        .sum()
}

/// Computes the two GST components on a subtotal.
///
/// CGST and SGST are independent flat rates applied to the same base, not a
/// single combined rate applied once.
#[must_use]
pub fn taxes(subtotal: i64, menu: &Menu) -> (f64, f64) {
    #[allow(clippy::cast_precision_loss)]
    let base = subtotal as f64;
    (base * menu.cgst_rate, base * menu.sgst_rate)
}

/// Computes the full cost breakdown for an order.
///
/// The packaging surcharge applies only when the order's packaging flag is
/// set (decided at close time).
#[must_use]
pub fn totals(order: &Order, menu: &Menu) -> Totals {
    let subtotal = subtotal(&order.items, menu);
    let (cgst, sgst) = taxes(subtotal, menu);
    let packaging = order.include_packaging.then_some(menu.packaging_surcharge);

    #[allow(clippy::cast_precision_loss)]
    let total = subtotal as f64 + cgst + sgst + packaging.unwrap_or(0) as f64;

    Totals {
        subtotal,
        cgst,
        sgst,
        packaging,
        total,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{items, test_menu};

    #[test]
    fn test_subtotal_sums_merged_quantities() {
        let menu = test_menu();
        let mut order = crate::entities::Order::new(1, 1);
        order.add_items(&menu, &items(&[("coffee", 2)])).unwrap();
        order.add_items(&menu, &items(&[("coffee", 1), ("fries", 2)])).unwrap();

        // 3 x 250 + 2 x 100
        assert_eq!(subtotal(&order.items, &menu), 950);
    }

    #[test]
    fn test_subtotal_empty_order_is_zero() {
        let menu = test_menu();
        assert_eq!(subtotal(&BTreeMap::new(), &menu), 0);
    }

    #[test]
    fn test_taxes_are_equal_nine_percent_components() {
        let menu = test_menu();
        let (cgst, sgst) = taxes(1000, &menu);
        assert_eq!(cgst, 90.0);
        assert_eq!(sgst, 90.0);
    }

    #[test]
    fn test_taxes_may_be_fractional() {
        let menu = test_menu();
        let (cgst, sgst) = taxes(250, &menu);
        assert_eq!(cgst, 22.5);
        assert_eq!(sgst, 22.5);
    }

    #[test]
    fn test_totals_without_packaging() {
        let menu = test_menu();
        let mut order = crate::entities::Order::new(1, 1);
        order
            .add_items(&menu, &items(&[("coffee", 1), ("tea", 1)]))
            .unwrap();

        let t = totals(&order, &menu);
        assert_eq!(t.subtotal, 300);
        assert_eq!(t.cgst, 27.0);
        assert_eq!(t.sgst, 27.0);
        assert_eq!(t.packaging, None);
        assert_eq!(t.total, 354.0);
    }

    #[test]
    fn test_totals_with_packaging() {
        let menu = test_menu();
        let mut order = crate::entities::Order::new(1, 1);
        order
            .add_items(&menu, &items(&[("coffee", 1), ("tea", 1)]))
            .unwrap();
        order.close(true).unwrap();

        let t = totals(&order, &menu);
        assert_eq!(t.packaging, Some(20));
        assert_eq!(t.total, 374.0);
    }
}
