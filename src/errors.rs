//! Unified error type for the whole crate.
//!
//! Domain errors (invalid table, occupied table, closed order, ...) are all
//! recoverable: the shell reports them and keeps accepting commands. The only
//! fatal conditions are an unreadable persistence or menu file at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid table number {table}: expected a table between 1 and {max}")]
    InvalidTable { table: u32, max: u32 },

    #[error("Table {table} already has an active order (#{order_number})")]
    TableOccupied { table: u32, order_number: u32 },

    #[error("No active order for table {table}")]
    NoActiveOrder { table: u32 },

    #[error("Order #{order_number} not found")]
    OrderNotFound { order_number: u32 },

    #[error("Order #{order_number} is still active")]
    OrderStillActive { order_number: u32 },

    #[error("Order #{order_number} is already closed")]
    OrderClosed { order_number: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Persistence error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
