use indexmap::IndexMap;
use log::{debug, trace};
use schemars::json_schema;
use serde_json::{Map, Value};

use crate::{
    classify::Level,
    data::{Node, Rule},
};

/// One slot of a derived [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaEntry {
    /// A variant's own key: must hold the selected option as a string.
    Selector,
    /// A field's rule, forwarded untouched.
    Rule { rule: Rule, required: bool },
    /// A section's sub-schema.
    Object(Schema),
}

/// Validation shape derived from a form tree.
///
/// Nesting mirrors sections only. Variant branches are folded into the
/// scope that holds the variant, and only the active branch contributes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    shape: IndexMap<String, SchemaEntry>,
}

impl Schema {
    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.shape.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.shape.contains_key(key)
    }

    /// Follow a dotted path through nested sections.
    pub fn get_path(&self, path: &str) -> Option<&SchemaEntry> {
        let mut parts = path.split('.');
        let mut entry = self.shape.get(parts.next()?)?;
        for part in parts {
            match entry {
                SchemaEntry::Object(inner) => entry = inner.shape.get(part)?,
                _ => return None,
            }
        }
        Some(entry)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shape.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SchemaEntry)> {
        self.shape.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.shape.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    fn insert(&mut self, key: &str, entry: SchemaEntry) {
        self.shape.insert(key.to_string(), entry);
    }

    /// Plain JSON view of the shape.
    ///
    /// Sections become objects, selectors the string `"string"`, and rules
    /// their payload.
    pub fn as_json(&self) -> Value {
        let map = self
            .shape
            .iter()
            .map(|(key, entry)| {
                let value = match entry {
                    SchemaEntry::Selector => Value::String("string".into()),
                    SchemaEntry::Rule { rule, .. } => rule.as_json().clone(),
                    SchemaEntry::Object(inner) => inner.as_json(),
                };
                (key.clone(), value)
            })
            .collect::<Map<_, _>>();
        Value::Object(map)
    }

    /// Render the shape as a JSON Schema (draft 2020-12) document.
    pub fn to_json_schema(&self) -> schemars::Schema {
        let mut schema = self.object_schema();
        schema.insert(
            "$schema".into(),
            "https://json-schema.org/draft/2020-12/schema".into(),
        );
        schema
    }

    fn object_schema(&self) -> schemars::Schema {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (key, entry) in &self.shape {
            let property = match entry {
                SchemaEntry::Selector => {
                    required.push(Value::String(key.clone()));
                    json_schema!({ "type": "string" }).to_value()
                }
                SchemaEntry::Rule { rule, required: r } => {
                    if *r {
                        required.push(Value::String(key.clone()));
                    }
                    rule.as_json().clone()
                }
                SchemaEntry::Object(inner) => {
                    required.push(Value::String(key.clone()));
                    inner.object_schema().to_value()
                }
            };
            properties.insert(key.clone(), property);
        }

        json_schema!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Derive the validation shape of `items` against `state`.
///
/// With no state every variant uses its default branch. Sections without a
/// single validated key are left out.
pub fn derive_schema(items: &[Node], state: Option<&Map<String, Value>>) -> Schema {
    let level = Level::of(items);
    let mut schema = Schema::default();

    for section in &level.sections {
        let section_state = state
            .and_then(|s| s.get(&section.name))
            .and_then(Value::as_object);
        let inner = derive_schema(&section.items, section_state);

        if inner.is_empty() {
            trace!("section `{}` has no validated keys", section.name);
        } else {
            schema.insert(&section.name, SchemaEntry::Object(inner));
        }
    }

    for variant in &level.variants {
        schema.insert(&variant.name, SchemaEntry::Selector);

        let selected = variant.selected(state);
        match variant.branch(&selected) {
            Some(branch) => {
                let inner = derive_schema(branch, state);
                schema.shape.extend(inner.shape);
            }
            None => debug!(
                "variant `{}` selects unknown option `{selected}`, no branch validated",
                variant.name
            ),
        }
    }

    for field in &level.fields {
        if let Some(rule) = &field.validation {
            schema.insert(
                &field.name,
                SchemaEntry::Rule {
                    rule: rule.clone(),
                    required: field.required,
                },
            );
        }
    }

    schema
}
