//! tombola - Secret Santa draws with per-person exclusion lists
//!
//! This library computes gift-exchange assignments: every participant is
//! matched with exactly one other participant to give a gift to, nobody
//! draws themselves, and nobody draws a person on their exclusion list.
//! The draw engine is pure and synchronous; roster files and rendering
//! live in the outer modules.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod core;
pub mod output;
pub mod roster;
