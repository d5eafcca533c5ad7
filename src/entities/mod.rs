//! Entity module - the order record and its lifecycle mutations.
//! The serde field names here are the on-disk format of the registry file.

pub mod order;

pub use order::{AddItemsOutcome, Order};
