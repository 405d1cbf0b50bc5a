//! Key collision detection.
//!
//! The derivers resolve duplicate keys in one scope silently (last writer
//! wins). [`collisions`] reports them so callers can reject such trees up
//! front.

use std::{collections::HashMap, fmt};

use crate::{
    classify::{Level, NodeKind},
    data::Node,
};

/// A key written more than once into the same state scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    /// Dotted section path of the scope, empty for the root.
    pub scope: String,
    pub key: String,
    /// Kinds of the writers, in write order.
    pub writers: Vec<NodeKind>,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds = self
            .writers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        if self.scope.is_empty() {
            write!(f, "`{}` written {} times ({kinds})", self.key, self.writers.len())
        } else {
            write!(
                f,
                "`{}.{}` written {} times ({kinds})",
                self.scope,
                self.key,
                self.writers.len()
            )
        }
    }
}

/// Find every key the state deriver would write more than once per scope.
pub fn collisions(items: &[Node]) -> Vec<Collision> {
    let mut out = Vec::new();
    check_scope(items, "", &mut out);
    out
}

fn check_scope(items: &[Node], scope: &str, out: &mut Vec<Collision>) {
    let mut writes: Vec<(&str, NodeKind)> = Vec::new();
    collect_writes(items, scope, &mut writes, out);

    let mut seen: HashMap<&str, Vec<NodeKind>> = HashMap::new();
    let mut order = Vec::new();
    for (key, kind) in writes {
        let writers = seen.entry(key).or_default();
        if writers.is_empty() {
            order.push(key);
        }
        writers.push(kind);
    }

    for key in order {
        let writers = &seen[key];
        if writers.len() > 1 {
            out.push(Collision {
                scope: scope.to_string(),
                key: key.to_string(),
                writers: writers.clone(),
            });
        }
    }
}

/// Keys written into the current scope, in the order the state deriver
/// writes them. Sections open a new scope which is checked on its own.
fn collect_writes<'a>(
    items: &'a [Node],
    scope: &str,
    writes: &mut Vec<(&'a str, NodeKind)>,
    out: &mut Vec<Collision>,
) {
    let level = Level::of(items);

    for &section in &level.sections {
        writes.push((section.name.as_str(), NodeKind::Section));
        let inner = if scope.is_empty() {
            section.name.clone()
        } else {
            format!("{scope}.{}", section.name)
        };
        check_scope(&section.items, &inner, out);
    }

    for &variant in &level.variants {
        writes.push((variant.name.as_str(), NodeKind::Variant));
        for branch in variant.variants.values() {
            collect_writes(branch, scope, writes, out);
        }
    }

    for &field in &level.fields {
        writes.push((field.name.as_str(), NodeKind::Field));
    }
}
