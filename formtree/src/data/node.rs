use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::Error as _,
};
use serde_json::{Map, Value};

use crate::data::field::Field;

/// Values of the `type` tag that mark a container node.
///
/// A node object whose `type` is anything else (or missing) is a [`Field`].
pub const NODE_TAGS: [&str; 4] = ["row", "section", "variant", "columns"];

/// One element of a form tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Field(Field),
    Row(Row),
    Section(Section),
    Variant(Variant),
    Columns(Columns),
}

/// Fields laid out on one line. Contributes no nesting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    pub fields: Vec<Field>,
}

/// Named group of nodes. Its name becomes a nesting key in state and schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default = "default_open")]
    pub default_open: bool,
    #[serde(default)]
    pub items: Vec<Node>,
}

fn default_open() -> bool {
    true
}

/// Selectable option of a [`Variant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantOption {
    pub value: String,
    pub label: String,
}

impl VariantOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Mutually exclusive alternatives keyed by option value.
///
/// The variant stores the selected option under its own `name`; fields of
/// every branch live next to it in the enclosing scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub default_value: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
    /// Branches in declaration order.
    #[serde(default)]
    pub variants: IndexMap<String, Vec<Node>>,
}

impl Variant {
    /// Branch for `value`, if one is declared.
    pub fn branch(&self, value: &str) -> Option<&[Node]> {
        self.variants.get(value).map(Vec::as_slice)
    }

    /// Option value selected by `state`, falling back to the default.
    ///
    /// A `null` or missing entry counts as unset. Non-string scalars are
    /// matched by their textual form.
    pub fn selected(&self, state: Option<&Map<String, Value>>) -> String {
        match state.and_then(|s| s.get(&self.name)) {
            None | Some(Value::Null) => self.default_value.clone(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Width of one column: a grid unit count or a raw CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Span {
    Units(u32),
    Css(String),
}

impl From<u32> for Span {
    fn from(value: u32) -> Self {
        Span::Units(value)
    }
}

impl From<&str> for Span {
    fn from(value: &str) -> Self {
        Span::Css(value.to_string())
    }
}

/// Parallel sub-trees rendered side by side. Contributes no nesting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Columns {
    pub spans: Vec<Span>,
    pub columns: Vec<Vec<Node>>,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedRef<'a> {
    Row(&'a Row),
    Section(&'a Section),
    Variant(&'a Variant),
    Columns(&'a Columns),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Tagged {
    Row(Row),
    Section(Section),
    Variant(Variant),
    Columns(Columns),
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Field(field) => {
                let reserved = field
                    .input_type
                    .as_deref()
                    .filter(|hint| NODE_TAGS.contains(hint));
                if let Some(hint) = reserved {
                    return Err(S::Error::custom(format!(
                        "field `{}` uses reserved type `{hint}`",
                        field.name
                    )));
                }
                field.serialize(serializer)
            }
            Node::Row(row) => TaggedRef::Row(row).serialize(serializer),
            Node::Section(section) => TaggedRef::Section(section).serialize(serializer),
            Node::Variant(variant) => TaggedRef::Variant(variant).serialize(serializer),
            Node::Columns(columns) => TaggedRef::Columns(columns).serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let is_container = value
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|tag| NODE_TAGS.contains(&tag));

        if !is_container {
            return Field::deserialize(value)
                .map(Node::Field)
                .map_err(D::Error::custom);
        }

        let node = match Tagged::deserialize(value).map_err(D::Error::custom)? {
            Tagged::Row(row) => Node::Row(row),
            Tagged::Section(section) => Node::Section(section),
            Tagged::Variant(variant) => Node::Variant(variant),
            Tagged::Columns(columns) => Node::Columns(columns),
        };
        Ok(node)
    }
}

impl From<Field> for Node {
    fn from(value: Field) -> Self {
        Node::Field(value)
    }
}

impl From<Row> for Node {
    fn from(value: Row) -> Self {
        Node::Row(value)
    }
}

impl From<Section> for Node {
    fn from(value: Section) -> Self {
        Node::Section(value)
    }
}

impl From<Variant> for Node {
    fn from(value: Variant) -> Self {
        Node::Variant(value)
    }
}

impl From<Columns> for Node {
    fn from(value: Columns) -> Self {
        Node::Columns(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untagged_object_is_field() {
        let node: Node = serde_json::from_value(json!({
            "component": "UInput",
            "name": "email",
            "type": "email"
        }))
        .unwrap();

        match node {
            Node::Field(f) => assert_eq!(f.input_type.as_deref(), Some("email")),
            other => panic!("expected field, got {other:?}"),
        }
    }

    #[test]
    fn test_field_named_fields_is_still_a_field() {
        let node: Node =
            serde_json::from_value(json!({"component": "UInput", "name": "fields"})).unwrap();
        assert!(matches!(node, Node::Field(_)));
    }

    #[test]
    fn test_section_defaults() {
        let node: Node = serde_json::from_value(json!({
            "type": "section",
            "name": "address",
            "items": []
        }))
        .unwrap();

        let Node::Section(section) = node else {
            panic!("expected section");
        };
        assert!(!section.collapsible);
        assert!(section.default_open);
    }

    #[test]
    fn test_container_serializes_type_tag() {
        let node = Node::Row(Row {
            fields: vec![Field::new("a", "UInput")],
        });
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "row", "fields": [{"component": "UInput", "name": "a"}]})
        );
    }

    #[test]
    fn test_variant_branch_order_survives_decode() {
        let node: Node = serde_json::from_value(json!({
            "type": "variant",
            "name": "kind",
            "defaultValue": "z",
            "options": [],
            "variants": {"z": [], "a": [], "m": []}
        }))
        .unwrap();

        let Node::Variant(variant) = node else {
            panic!("expected variant");
        };
        let keys: Vec<_> = variant.variants.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_field_with_reserved_type_refuses_to_serialize() {
        let node = Node::Field(Field::new("billing", "UInput").with_type("section"));
        let err = serde_json::to_value(&node).unwrap_err();
        assert!(err.to_string().contains("billing"));

        let node = Node::Field(Field::new("billing", "UInput").with_type("email"));
        assert_eq!(serde_json::to_value(&node).unwrap()["type"], "email");
    }

    #[test]
    fn test_columns_mixed_spans() {
        let node: Node = serde_json::from_value(json!({
            "type": "columns",
            "spans": [4, "1fr"],
            "columns": [[], []]
        }))
        .unwrap();

        let Node::Columns(columns) = node else {
            panic!("expected columns");
        };
        assert_eq!(columns.spans, vec![Span::Units(4), Span::Css("1fr".into())]);
    }

    #[test]
    fn test_selected_option() {
        let variant = Variant {
            name: "kind".into(),
            label: None,
            default_value: "x".into(),
            options: vec![],
            variants: IndexMap::new(),
        };

        assert_eq!(variant.selected(None), "x");

        let state = json!({"kind": null});
        assert_eq!(variant.selected(state.as_object()), "x");

        let state = json!({"kind": "y"});
        assert_eq!(variant.selected(state.as_object()), "y");

        let state = json!({"kind": 3});
        assert_eq!(variant.selected(state.as_object()), "3");
    }
}
