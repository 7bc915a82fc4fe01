//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`draw`] - Compute assignments for a roster of participants
//! - [`verify`] - Audit a finished draw against its roster

pub mod draw;
pub mod verify;

pub use draw::{DrawError, assign};
pub use verify::{Violation, is_valid_draw, verify_draw};
