//! Fluent construction of form trees.
//!
//! ```rust
//! use formtree::builder::{FormBuilder, SectionOptions, VariantOptions};
//! use formtree::data::Field;
//!
//! let form = FormBuilder::new()
//!     .add_field(Field::new("name", "UInput").with_label("Name"))
//!     .add_section(SectionOptions::new("address", "Address"), |b| {
//!         b.add_row(vec![Field::new("zip", "UInput"), Field::new("city", "UInput")]);
//!     })
//!     .add_variant(
//!         VariantOptions::new("delivery", "post").option("post", "Post"),
//!         |v| {
//!             v.branch("post", |b| {
//!                 b.add_field(Field::new("street", "UInput"));
//!             });
//!         },
//!     )
//!     .build();
//!
//! assert_eq!(form.flatten().len(), 4);
//! ```
//!
//! Each nested scope (section body, variant branch, column) is filled by a
//! fresh [`FormBuilder`] that owns its own node list.

use indexmap::IndexMap;

use crate::data::{
    Columns, Field, Form, Node, Row, Section, Span, Variant, VariantOption,
};

/// Accumulates nodes in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    items: Vec<Node>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing node list, e.g. a decoded definition.
    pub fn from_json(items: Vec<Node>) -> Self {
        Self { items }
    }

    /// Nodes collected so far.
    pub fn to_json(&self) -> &[Node] {
        &self.items
    }

    pub fn add_field(&mut self, field: Field) -> &mut Self {
        self.items.push(Node::Field(field));
        self
    }

    pub fn add_row(&mut self, fields: Vec<Field>) -> &mut Self {
        self.items.push(Node::Row(Row { fields }));
        self
    }

    /// Add side-by-side columns, one per span.
    ///
    /// The callback receives one empty builder per span.
    pub fn add_columns<S, F>(&mut self, spans: impl IntoIterator<Item = S>, fill: F) -> &mut Self
    where
        S: Into<Span>,
        F: FnOnce(&mut [FormBuilder]),
    {
        let spans: Vec<Span> = spans.into_iter().map(Into::into).collect();
        let mut builders = vec![FormBuilder::new(); spans.len()];
        fill(&mut builders);

        self.items.push(Node::Columns(Columns {
            spans,
            columns: builders.into_iter().map(|b| b.items).collect(),
        }));
        self
    }

    pub fn add_section<F>(&mut self, options: SectionOptions, fill: F) -> &mut Self
    where
        F: FnOnce(&mut FormBuilder),
    {
        let mut inner = FormBuilder::new();
        fill(&mut inner);

        self.items.push(Node::Section(Section {
            name: options.name,
            label: options.label,
            description: options.description,
            collapsible: options.collapsible,
            default_open: options.default_open,
            items: inner.items,
        }));
        self
    }

    /// Add a variant; branches are declared on the [`VariantBuilder`].
    pub fn add_variant<F>(&mut self, options: VariantOptions, fill: F) -> &mut Self
    where
        F: FnOnce(&mut VariantBuilder),
    {
        let mut branches = VariantBuilder::default();
        fill(&mut branches);

        self.items.push(Node::Variant(Variant {
            name: options.name,
            label: options.label,
            default_value: options.default_value,
            options: options.options,
            variants: branches.variants,
        }));
        self
    }

    /// Snapshot the collected nodes as a [`Form`].
    pub fn build(&self) -> Form {
        Form::new(self.items.clone())
    }
}

/// Collects the branches of one variant.
#[derive(Debug, Default)]
pub struct VariantBuilder {
    variants: IndexMap<String, Vec<Node>>,
}

impl VariantBuilder {
    /// Declare the branch shown when `value` is selected.
    ///
    /// Declaring the same value twice replaces the earlier branch in place.
    pub fn branch<F>(&mut self, value: impl Into<String>, fill: F) -> &mut Self
    where
        F: FnOnce(&mut FormBuilder),
    {
        let mut inner = FormBuilder::new();
        fill(&mut inner);
        self.variants.insert(value.into(), inner.items);
        self
    }
}

/// Section settings.
#[derive(Debug, Clone)]
pub struct SectionOptions {
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub collapsible: bool,
    pub default_open: bool,
}

impl SectionOptions {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
            description: None,
            collapsible: false,
            default_open: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }
}

/// Variant settings; branches are added separately.
#[derive(Debug, Clone)]
pub struct VariantOptions {
    pub name: String,
    pub label: Option<String>,
    pub default_value: String,
    pub options: Vec<VariantOption>,
}

impl VariantOptions {
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            default_value: default_value.into(),
            options: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a selectable option.
    pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.push(VariantOption::new(value, label));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_defaults() {
        let form = FormBuilder::new()
            .add_section(SectionOptions::new("s", "S"), |_| {})
            .build();

        let Node::Section(section) = &form.items()[0] else {
            panic!("expected section");
        };
        assert!(!section.collapsible);
        assert!(section.default_open);
        assert_eq!(section.label.as_deref(), Some("S"));
    }

    #[test]
    fn test_sibling_branches_do_not_share_nodes() {
        let form = FormBuilder::new()
            .add_variant(VariantOptions::new("v", "x"), |v| {
                v.branch("x", |b| {
                    b.add_field(Field::new("a", "UInput"));
                    b.add_field(Field::new("b", "UInput"));
                });
                v.branch("y", |b| {
                    b.add_field(Field::new("c", "UInput"));
                });
            })
            .build();

        let Node::Variant(variant) = &form.items()[0] else {
            panic!("expected variant");
        };
        assert_eq!(variant.branch("x").map(<[Node]>::len), Some(2));
        assert_eq!(variant.branch("y").map(<[Node]>::len), Some(1));
    }

    #[test]
    fn test_columns_get_one_builder_per_span() {
        let form = FormBuilder::new()
            .add_columns([Span::Units(8), Span::Css("auto".into())], |cols| {
                assert_eq!(cols.len(), 2);
                cols[0].add_field(Field::new("a", "UInput"));
            })
            .build();

        let Node::Columns(columns) = &form.items()[0] else {
            panic!("expected columns");
        };
        assert_eq!(columns.columns[0].len(), 1);
        assert!(columns.columns[1].is_empty());
    }

    #[test]
    fn test_from_json_continues_existing_list() {
        let mut builder = FormBuilder::from_json(vec![Node::Field(Field::new("a", "UInput"))]);
        builder.add_field(Field::new("b", "UInput"));
        assert_eq!(builder.to_json().len(), 2);
    }

    #[test]
    fn test_variant_options_are_kept() {
        let form = FormBuilder::new()
            .add_variant(
                VariantOptions::new("v", "x")
                    .with_label("Kind")
                    .option("x", "X")
                    .option("y", "Y"),
                |_| {},
            )
            .build();

        let Node::Variant(variant) = &form.items()[0] else {
            panic!("expected variant");
        };
        assert_eq!(variant.options.len(), 2);
        assert!(variant.variants.is_empty());
    }
}
