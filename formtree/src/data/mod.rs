//! Form tree data model.
//!
//! A form is an ordered list of [`Node`]s. Nodes are either leaf
//! [`Field`]s or one of the containers:
//!
//! - [`Row`] - fields on one line, no nesting
//! - [`Columns`] - parallel sub-trees, no nesting
//! - [`Section`] - named group, nests state and schema under its name
//! - [`Variant`] - mutually exclusive branches flattened into the parent scope
//!
//! The serialized form is a JSON array of node objects. Containers carry a
//! `type` tag (`row`, `section`, `variant`, `columns`); fields do not.

/// Leaf fields and opaque validation rules.
pub mod field;

/// Owned form tree with derivation entry points.
pub mod form;

/// Node sum type and container nodes.
pub mod node;

pub use field::{Field, Rule};
pub use form::Form;
pub use node::{Columns, NODE_TAGS, Node, Row, Section, Span, Variant, VariantOption};
