//! `BiscottiPos` - A point-of-sale system for a small café
//!
//! This crate provides per-table order tracking against a fixed menu card,
//! split-tax billing (CGST/SGST) with an optional packaging surcharge, and
//! flat-file persistence of the full order registry between runs.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
)]

/// Configuration - menu card loading and file locations
pub mod config;
/// Core business logic - billing, reporting, and the café registry
pub mod core;
/// Order entity definition and lifecycle mutations
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Interactive terminal shell - all operator input lives here
pub mod shell;
/// Flat-file JSON persistence for the order registry
pub mod store;

#[cfg(test)]
pub mod test_utils;
