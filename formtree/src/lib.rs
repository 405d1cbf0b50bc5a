//! # formtree
//!
//! Declarative form trees and the data derived from them.
//!
//! A form is described once as a tree of fields, rows, sections, variants
//! and columns. From that tree `formtree` derives:
//!
//! - the flat list of every field that can exist ([`Form::flatten`])
//! - a validation shape tracking what is currently visible ([`Form::schema`])
//! - a fully shaped initial state ([`Form::state`])
//!
//! ## Features
//!
//! - Sections nest state and schema under their name
//! - Variants flatten into the parent scope; only the active branch is
//!   validated, but every branch is initialised so switching loses nothing
//! - Rows and columns are pure layout and never affect the data shape
//! - Validation rules and widget references are opaque and passed through
//! - JSON and TOML definitions, JSON Schema export of the derived shape
//!
//! ## Quick Start
//!
//! ```rust
//! use formtree::builder::{FormBuilder, VariantOptions};
//! use formtree::data::Field;
//! use serde_json::json;
//!
//! let form = FormBuilder::new()
//!     .add_variant(VariantOptions::new("contact", "email"), |v| {
//!         v.branch("email", |b| {
//!             b.add_field(Field::new("email", "UInput").with_validation(json!({"format": "email"})));
//!         });
//!         v.branch("phone", |b| {
//!             b.add_field(Field::new("phone", "UInput").with_validation(json!({"minLength": 6})));
//!         });
//!     })
//!     .build();
//!
//! let state = form.state(None);
//! assert_eq!(state["contact"], "email");
//! assert_eq!(state["phone"], "");
//!
//! let schema = form.schema(Some(&state));
//! assert!(schema.contains_key("email"));
//! assert!(!schema.contains_key("phone"));
//! ```
//!
//! ## Modules
//!
//! - [`data`] - Form tree model and serialization
//! - [`classify`] - Node kind predicates
//! - [`derive`] - Flattening, schema and state derivation
//! - [`builder`] - Fluent tree construction
//! - [`wizard`] - Multi-step wizard definitions
//! - [`load`] - Reading definitions and values from JSON/TOML files
//! - [`validate`] - Rule evaluator seam
//! - [`lint`] - Key collision detection

/// Form tree model.
///
/// Node types, fields and opaque rules, plus the owned [`Form`] wrapper.
pub mod data;

/// Node kind predicates and per-scope grouping.
pub mod classify;

/// Pure derivations over a form tree.
pub mod derive;

/// Fluent builder for form trees.
pub mod builder;

/// Multi-step wizard definitions.
pub mod wizard;

/// Definition and value file loading.
pub mod load;

/// Bridge from derived schemas to an external rule evaluator.
pub mod validate;

/// Detection of keys written twice in one scope.
pub mod lint;

/// Error types.
pub mod error;

pub use data::{Field, Form, Node, Rule};
pub use derive::{Schema, SchemaEntry, State};
pub use error::{FormError, Result};
pub use serde_json::Value;
