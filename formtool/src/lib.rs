//! # formtool
//!
//! Command-line inspection of `formtree` definitions.
//!
//! `formtool` loads a form definition (JSON or TOML) and prints what the
//! derivation engine makes of it: the flattened field list, the initial
//! state for a set of values, the validation schema for a given state, and
//! any keys that collide within one scope.
//!
//! ## Modules
//!
//! - [`ctx`] - Loaded definition and values files
//! - [`inspect`] - Subcommands and their handlers
//! - [`utils`] - Terminal output helpers

/// Loaded definition and values files.
pub mod ctx;

/// Inspection subcommands.
pub mod inspect;

/// Terminal output helpers.
pub mod utils;

#[macro_use]
extern crate log;
