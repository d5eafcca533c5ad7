//! The café registry - tables, the order store, and every operator-facing
//! operation.
//!
//! The registry is the single long-lived owner of order data: the order map
//! (number -> [`Order`]) holds every order ever taken, active and closed,
//! while the table map holds only the *number* of each table's active order.
//! Keeping one copy and one key prevents the two views from drifting apart.
//! Invariant: a table maps to an order number iff that order is active and
//! its table number matches; at most one active order per table.

use crate::config::Menu;
use crate::core::report::{self, OrderReport};
use crate::entities::{AddItemsOutcome, Order};
use crate::errors::{Error, Result};
use crate::store::Store;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Number of tables on the floor.
pub const TABLE_COUNT: u32 = 6;

/// A closed order as listed by [`Cafe::past_orders`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastOrder {
    /// Order number.
    pub order_number: u32,
    /// Table the order was taken at.
    pub table_number: u32,
    /// Creation timestamp.
    pub order_time: String,
}

/// The café: table occupancy, the order store, and the sequential counter.
#[derive(Debug)]
pub struct Cafe {
    menu: Menu,
    store: Store,
    /// Table number -> active order number, `None` when the table is free.
    tables: BTreeMap<u32, Option<u32>>,
    /// Order number -> order record; the only owner of order data.
    orders: BTreeMap<u32, Order>,
    next_order_number: u32,
}

impl Cafe {
    /// Loads the registry from the store and rebuilds table occupancy from
    /// the active orders. The order-number counter is recomputed as
    /// `max(existing) + 1`, or 1 for an empty registry.
    pub fn load(menu: Menu, store: Store) -> Result<Self> {
        let orders = store.load()?;

        let mut tables: BTreeMap<u32, Option<u32>> =
            (1..=TABLE_COUNT).map(|table| (table, None)).collect();
        for order in orders.values().filter(|order| order.is_active) {
            let slot = tables
                .get_mut(&order.table_number)
                .ok_or_else(|| Error::Config {
                    message: format!(
                        "registry file references table {} outside 1..={TABLE_COUNT}",
                        order.table_number
                    ),
                })?;
            if let Some(existing) = slot {
                return Err(Error::Config {
                    message: format!(
                        "registry file has two active orders (#{existing}, #{}) for table {}",
                        order.order_number, order.table_number
                    ),
                });
            }
            *slot = Some(order.order_number);
        }

        let next_order_number = orders.keys().max().copied().unwrap_or(0) + 1;
        info!(
            orders = orders.len(),
            next_order_number, "registry loaded"
        );

        Ok(Self {
            menu,
            store,
            tables,
            orders,
            next_order_number,
        })
    }

    fn check_table(table: u32) -> Result<()> {
        if (1..=TABLE_COUNT).contains(&table) {
            Ok(())
        } else {
            Err(Error::InvalidTable {
                table,
                max: TABLE_COUNT,
            })
        }
    }

    /// The table's active order number, if any. Fails on an invalid table.
    pub fn active_order_number(&self, table: u32) -> Result<Option<u32>> {
        Self::check_table(table)?;
        Ok(self.tables.get(&table).copied().flatten())
    }

    /// Opens a new order for a free table and returns its order number.
    ///
    /// Fails on an invalid table and on a table that already has an active
    /// order; in both cases no order is created and nothing changes.
    pub fn open_order(&mut self, table: u32) -> Result<u32> {
        Self::check_table(table)?;
        if let Some(existing) = self.tables.get(&table).copied().flatten() {
            return Err(Error::TableOccupied {
                table,
                order_number: existing,
            });
        }

        let number = self.next_order_number;
        self.orders.insert(number, Order::new(table, number));
        self.tables.insert(table, Some(number));
        self.next_order_number += 1;
        self.store.save(&self.orders)?;

        info!(table, order_number = number, "opened order");
        Ok(number)
    }

    /// Adds a batch of items to the table's active order.
    ///
    /// Unknown menu items are skipped and reported in the outcome while the
    /// rest of the batch applies. Fails if the table is invalid or has no
    /// active order.
    pub fn add_items(
        &mut self,
        table: u32,
        requested: &[(String, u32)],
    ) -> Result<AddItemsOutcome> {
        let number = self
            .active_order_number(table)?
            .ok_or(Error::NoActiveOrder { table })?;
        // The table map only ever holds numbers present in the order map.
        let order = self
            .orders
            .get_mut(&number)
            .ok_or(Error::OrderNotFound {
                order_number: number,
            })?;
        let outcome = order.add_items(&self.menu, requested)?;

        for name in &outcome.unavailable {
            warn!(table, item = %name, "item not on the menu, skipped");
        }
        self.store.save(&self.orders)?;
        Ok(outcome)
    }

    /// Closes the table's active order with the given packaging choice,
    /// frees the table, and returns the final bill.
    pub fn close_order(&mut self, table: u32, include_packaging: bool) -> Result<OrderReport> {
        let number = self
            .active_order_number(table)?
            .ok_or(Error::NoActiveOrder { table })?;
        let order = self
            .orders
            .get_mut(&number)
            .ok_or(Error::OrderNotFound {
                order_number: number,
            })?;
        order.close(include_packaging)?;
        let report = report::build_order_report(order, &self.menu);

        self.tables.insert(table, None);
        self.store.save(&self.orders)?;

        info!(
            table,
            order_number = report.order_number,
            total = report.totals.total,
            "closed order"
        );
        Ok(report)
    }

    /// Lists all closed orders, order-number ascending.
    #[must_use]
    pub fn past_orders(&self) -> Vec<PastOrder> {
        self.orders
            .values()
            .filter(|order| !order.is_active)
            .map(|order| PastOrder {
                order_number: order.order_number,
                table_number: order.table_number,
                order_time: order.order_time.clone(),
            })
            .collect()
    }

    /// The bill for a closed order, by order number.
    ///
    /// Fails with [`Error::OrderNotFound`] for an unknown number and
    /// [`Error::OrderStillActive`] for an order that has not been closed yet.
    pub fn order_summary(&self, order_number: u32) -> Result<OrderReport> {
        let order = self
            .orders
            .get(&order_number)
            .ok_or(Error::OrderNotFound { order_number })?;
        if order.is_active {
            return Err(Error::OrderStillActive { order_number });
        }
        Ok(report::build_order_report(order, &self.menu))
    }

    /// An order record by number, active or closed.
    #[must_use]
    pub fn order(&self, order_number: u32) -> Option<&Order> {
        self.orders.get(&order_number)
    }

    /// The number the next opened order will receive.
    #[must_use]
    pub const fn next_order_number(&self) -> u32 {
        self.next_order_number
    }
}
