use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    data::{Field, Node},
    derive::{self, Schema, State},
    error::{FormError, Result},
};

/// An owned form tree.
///
/// Serializes as the bare node array, so a definition written by
/// [`Form::to_json`] reads back with [`Form::from_json`] unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Form {
    items: Vec<Node>,
}

impl Form {
    pub fn new(items: Vec<Node>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }

    /// Every field that can exist under the form, in display order.
    pub fn flatten(&self) -> Vec<&Field> {
        derive::flatten(&self.items)
    }

    /// Validation shape for the current state.
    ///
    /// Pass `None` before any state exists to use every variant's default.
    pub fn schema(&self, state: Option<&Map<String, Value>>) -> Schema {
        derive::derive_schema(&self.items, state)
    }

    /// Fully shaped initial state seeded from `initial`.
    pub fn state(&self, initial: Option<&Map<String, Value>>) -> State {
        match initial {
            Some(initial) => derive::derive_state(&self.items, initial),
            None => derive::derive_state(&self.items, &Map::new()),
        }
    }

    /// Serialize to a JSON array of nodes.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    /// Parse a JSON array of nodes.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// The node array as a JSON value.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(&self.items)?)
    }

    /// Build a form from a node array, or from an object holding one under
    /// `items`.
    pub fn from_value(value: Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(FormError::InvalidDefinition(
                        "expected an `items` array".to_string(),
                    ));
                }
            },
            other => {
                return Err(FormError::InvalidDefinition(format!(
                    "expected an array of nodes, found {other}"
                )));
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                serde_json::from_value(item)
                    .map_err(|e| FormError::InvalidDefinition(format!("node {idx}: {e}")))
            })
            .collect::<Result<Vec<Node>>>()
            .map(Self::new)
    }
}

impl From<Vec<Node>> for Form {
    fn from(items: Vec<Node>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::FormBuilder;
    use serde_json::json;

    #[test]
    fn test_reserved_field_type_is_not_written() {
        let form = FormBuilder::new()
            .add_field(Field::new("billing", "UInput").with_type("section"))
            .build();

        assert!(matches!(form.to_json(), Err(FormError::Json(_))));
        assert!(matches!(form.to_value(), Err(FormError::Json(_))));
    }

    #[test]
    fn test_to_value_matches_to_json() {
        let form = FormBuilder::new()
            .add_field(Field::new("email", "UInput").with_type("email"))
            .build();

        let value = form.to_value().unwrap();
        assert_eq!(value, json!([{"component": "UInput", "name": "email", "type": "email"}]));
        assert_eq!(Form::from_value(value).unwrap(), form);
        assert_eq!(Form::from_json(&form.to_json().unwrap()).unwrap(), form);
    }

    #[test]
    fn test_from_value_accepts_items_object() {
        let form = Form::from_value(json!({
            "items": [{"component": "UInput", "name": "a"}]
        }))
        .unwrap();
        assert_eq!(form.items().len(), 1);
    }

    #[test]
    fn test_from_value_reports_bad_node() {
        let err = Form::from_value(json!([
            {"component": "UInput", "name": "a"},
            {"type": "section"}
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("node 1"), "{err}");
    }

    #[test]
    fn test_from_value_rejects_scalar() {
        assert!(matches!(
            Form::from_value(json!(3)),
            Err(FormError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_state_without_initial_values() {
        let form = Form::from_value(json!([{"component": "UInput", "name": "a"}])).unwrap();
        assert_eq!(Value::Object(form.state(None)), json!({"a": ""}));
    }
}
