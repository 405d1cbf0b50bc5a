use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque validation rule attached to a field.
///
/// The engine never looks inside a rule. It only positions rules into the
/// derived [`Schema`](crate::derive::schema::Schema) and hands them to a
/// [`RuleEvaluator`](crate::validate::RuleEvaluator) on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(Value);

impl Rule {
    /// Wrap an arbitrary rule payload.
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }

    /// The raw rule payload.
    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Consume the rule and return its payload.
    pub fn into_json(self) -> Value {
        self.0
    }
}

impl From<Value> for Rule {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Leaf input descriptor.
///
/// `name` is the key the field occupies in derived state and schema.
/// `component`, `props` and `attrs` are passed through to the renderer
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Widget key resolved by the rendering layer (e.g. `"UInput"`).
    pub component: String,
    /// State and schema key.
    pub name: String,
    /// Input type hint such as `"email"` or `"password"`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Widget props, forwarded verbatim.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub props: Map<String, Value>,
    /// Extra DOM attributes, forwarded verbatim.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Rule>,
}

impl Field {
    /// Create a field rendered by `component` and stored under `name`.
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            name: name.into(),
            input_type: None,
            label: None,
            description: None,
            placeholder: None,
            required: false,
            props: Map::new(),
            attrs: Map::new(),
            validation: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the input type hint.
    ///
    /// The values `row`, `section`, `variant` and `columns` are reserved
    /// as node tags. A field carrying one of them fails to serialize.
    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn with_validation(mut self, rule: impl Into<Rule>) -> Self {
        self.validation = Some(rule.into());
        self
    }

    /// Label for display, falling back to the name.
    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
