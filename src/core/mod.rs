//! Core business logic - framework-agnostic billing, reporting, and the café
//! registry. Nothing in this module reads input or prints; the shell layer
//! owns all presentation.

/// Pure billing arithmetic - subtotal, split taxes, grand total
pub mod billing;
/// Structured order reports and their terminal formatting
pub mod report;
/// The café registry - tables, order store, and the operator-facing operations
pub mod registry;

pub use registry::Cafe;
