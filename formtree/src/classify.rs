//! Node kind predicates and per-level grouping.
//!
//! Every walker in the crate asks these helpers what a node is instead of
//! matching on node shape itself. [`Level`] is the view the derivers work
//! on: the sections, variants and leaf fields that share one scope, with
//! rows and columns already expanded.

use std::fmt;

use crate::data::{Field, Node, Section, Variant};

/// Discriminator of a [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Field,
    Row,
    Section,
    Variant,
    Columns,
}

impl NodeKind {
    /// Wire tag of the kind; fields carry none.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            NodeKind::Field => None,
            NodeKind::Row => Some("row"),
            NodeKind::Section => Some("section"),
            NodeKind::Variant => Some("variant"),
            NodeKind::Columns => Some("columns"),
        }
    }

    /// Whether the kind is a pure layout container with no key of its own.
    pub fn is_transparent(self) -> bool {
        matches!(self, NodeKind::Row | NodeKind::Columns)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().unwrap_or("field"))
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Field(_) => NodeKind::Field,
            Node::Row(_) => NodeKind::Row,
            Node::Section(_) => NodeKind::Section,
            Node::Variant(_) => NodeKind::Variant,
            Node::Columns(_) => NodeKind::Columns,
        }
    }

    pub fn is_field(&self) -> bool {
        self.kind() == NodeKind::Field
    }

    pub fn is_row(&self) -> bool {
        self.kind() == NodeKind::Row
    }

    pub fn is_section(&self) -> bool {
        self.kind() == NodeKind::Section
    }

    pub fn is_variant(&self) -> bool {
        self.kind() == NodeKind::Variant
    }

    pub fn is_columns(&self) -> bool {
        self.kind() == NodeKind::Columns
    }

    /// Key the node occupies in derived state, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Field(field) => Some(&field.name),
            Node::Section(section) => Some(&section.name),
            Node::Variant(variant) => Some(&variant.name),
            Node::Row(_) | Node::Columns(_) => None,
        }
    }
}

/// Nodes sharing one scope, grouped by kind, declaration order kept.
#[derive(Debug, Default)]
pub struct Level<'a> {
    pub sections: Vec<&'a Section>,
    pub variants: Vec<&'a Variant>,
    pub fields: Vec<&'a Field>,
}

impl<'a> Level<'a> {
    /// Group `items`, descending through rows and columns.
    pub fn of(items: &'a [Node]) -> Self {
        let mut level = Level::default();
        level.collect(items);
        level
    }

    fn collect(&mut self, items: &'a [Node]) {
        for item in items {
            match item {
                Node::Field(field) => self.fields.push(field),
                Node::Row(row) => self.fields.extend(&row.fields),
                Node::Section(section) => self.sections.push(section),
                Node::Variant(variant) => self.variants.push(variant),
                Node::Columns(columns) => {
                    for column in &columns.columns {
                        self.collect(column);
                    }
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty() && self.variants.is_empty() && self.fields.is_empty()
    }
}
