//! tombola - Secret Santa draws with per-person exclusion lists
//!
//! Draws gift-exchange assignments from a TOML roster: everyone gives to
//! exactly one other person, nobody draws themselves, and nobody draws a
//! person on their exclusion list.

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

/// Main entry point for the tombola CLI
fn main() {
    if let Err(e) = tombola::cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
