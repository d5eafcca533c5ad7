//! Structured order reports.
//!
//! Report construction is pure: [`build_order_report`] turns an order and the
//! menu card into a value the caller can inspect or render. Terminal
//! formatting is a separate step so the business logic stays testable
//! without capturing output.

use crate::config::Menu;
use crate::core::billing::{self, Totals};
use crate::entities::Order;
use std::fmt::Write as _;

/// One rendered line item: name, quantity, unit price, extended price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    /// Menu item name (lower-cased, as stored on the order).
    pub name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Unit price in Rs.
    pub unit_price: i64,
    /// unit price x quantity, in Rs.
    pub line_total: i64,
}

/// The full bill for an order: header, line breakdown, and totals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReport {
    /// Order number.
    pub order_number: u32,
    /// Table the order was taken at.
    pub table_number: u32,
    /// Creation timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub order_time: String,
    /// One entry per line item, in stored (alphabetical) order.
    pub lines: Vec<ReportLine>,
    /// Subtotal, taxes, optional packaging, and grand total.
    pub totals: Totals,
}

/// Builds the bill for an order against the given menu card. Pure.
#[must_use]
pub fn build_order_report(order: &Order, menu: &Menu) -> OrderReport {
    let lines = order
        .items
        .iter()
        .filter_map(|(name, quantity)| {
            let unit_price = menu.price(name)?;
            Some(ReportLine {
                name: name.clone(),
                quantity: *quantity,
                unit_price,
                line_total: unit_price * i64::from(*quantity),
            })
        })
        .collect();

    OrderReport {
        order_number: order.order_number,
        table_number: order.table_number,
        order_time: order.order_time.clone(),
        lines,
        totals: billing::totals(order, menu),
    }
}

/// Upper-cases the first character, for display only.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders a report for the terminal.
#[must_use]
pub fn format_order_report(report: &OrderReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary for Order #{}:", report.order_number);
    let _ = writeln!(out, "Table: {}", report.table_number);
    let _ = writeln!(out, "Date & Time: {}", report.order_time);
    let _ = writeln!(
        out,
        "{:<12}{:<10}{:<18}{:<10}",
        "Item", "Quantity", "Unit Price (Rs.)", "Total (Rs.)"
    );
    let _ = writeln!(out, "{}", "-".repeat(50));
    for line in &report.lines {
        let _ = writeln!(
            out,
            "{:<12}{:<10}{:<18}{:<10}",
            capitalize(&line.name),
            line.quantity,
            line.unit_price,
            line.line_total
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = writeln!(out, "{:<35}{:<10}", "Subtotal (Rs.)", report.totals.subtotal);
    let _ = writeln!(out, "{:<35}{:<10}", "CGST (Rs.)", report.totals.cgst);
    let _ = writeln!(out, "{:<35}{:<10}", "SGST (Rs.)", report.totals.sgst);
    if let Some(packaging) = report.totals.packaging {
        let _ = writeln!(out, "{:<35}{:<10}", "Packaging Cost (Rs.)", packaging);
    }
    let _ = writeln!(out, "{}", "-".repeat(50));
    let _ = write!(out, "{:<35}{:<10}", "Net Total (Rs.)", report.totals.total);
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{items, test_menu};

    fn sample_report() -> OrderReport {
        let menu = test_menu();
        let mut order = crate::entities::Order::new(2, 5);
        order
            .add_items(&menu, &items(&[("coffee", 1), ("tea", 1)]))
            .unwrap();
        order.close(true).unwrap();
        build_order_report(&order, &menu)
    }

    #[test]
    fn test_build_report_lines_and_totals() {
        let report = sample_report();

        assert_eq!(report.order_number, 5);
        assert_eq!(report.table_number, 2);
        assert_eq!(report.lines.len(), 2);

        let coffee = &report.lines[0];
        assert_eq!(coffee.name, "coffee");
        assert_eq!(coffee.quantity, 1);
        assert_eq!(coffee.unit_price, 250);
        assert_eq!(coffee.line_total, 250);

        assert_eq!(report.totals.subtotal, 300);
        assert_eq!(report.totals.total, 374.0);
    }

    #[test]
    fn test_format_includes_lines_and_packaging() {
        let rendered = format_order_report(&sample_report());

        assert!(rendered.contains("Summary for Order #5"));
        assert!(rendered.contains("Table: 2"));
        assert!(rendered.contains("Coffee"));
        assert!(rendered.contains("Tea"));
        assert!(rendered.contains("Packaging Cost (Rs.)"));
        assert!(rendered.contains("Net Total (Rs.)"));
    }

    #[test]
    fn test_format_omits_packaging_line_for_dine_in() {
        let menu = test_menu();
        let mut order = crate::entities::Order::new(1, 1);
        order.add_items(&menu, &items(&[("cake", 1)])).unwrap();
        order.close(false).unwrap();

        let rendered = format_order_report(&build_order_report(&order, &menu));
        assert!(!rendered.contains("Packaging Cost"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("coffee"), "Coffee");
        assert_eq!(capitalize(""), "");
    }
}
