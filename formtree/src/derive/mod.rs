//! Derivations over a form tree.
//!
//! All three walkers are pure: they borrow the tree, never mutate it, and
//! return fresh values. Re-running them on the same input gives equal
//! output.
//!
//! - [`flatten`] - every field that can exist under a tree
//! - [`schema`] - validation shape of what is currently visible
//! - [`state`] - fully shaped initial state

/// Depth-first field extraction.
pub mod flatten;

/// Validation shape derivation.
pub mod schema;

/// Initial state derivation.
pub mod state;

pub use flatten::flatten;
pub use schema::{Schema, SchemaEntry, derive_schema};
pub use state::{State, derive_state};
