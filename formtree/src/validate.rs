//! Seam between a derived [`Schema`] and an external rule language.
//!
//! The crate never interprets a [`Rule`]. [`Schema::validate`] only walks
//! the shape, finds the value each rule applies to and hands both to a
//! caller supplied [`RuleEvaluator`].

use std::fmt;

use serde_json::{Map, Value};

use crate::{
    data::Rule,
    derive::{Schema, SchemaEntry},
};

/// Evaluates one opaque rule against one value.
pub trait RuleEvaluator {
    /// Check `value` (missing when the key is absent from state).
    ///
    /// Returns a user facing message on failure.
    fn evaluate(&self, rule: &Rule, value: Option<&Value>) -> Result<(), String>;
}

impl<F> RuleEvaluator for F
where
    F: Fn(&Rule, Option<&Value>) -> Result<(), String>,
{
    fn evaluate(&self, rule: &Rule, value: Option<&Value>) -> Result<(), String> {
        self(rule, value)
    }
}

/// A failed check, located by dotted key path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl Schema {
    /// Check `state` against this shape.
    ///
    /// Selectors must hold strings and section slots must hold objects;
    /// everything else is up to `evaluator`.
    pub fn validate(
        &self,
        state: &Map<String, Value>,
        evaluator: &dyn RuleEvaluator,
    ) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        walk(self, Some(state), "", evaluator, &mut issues);
        issues
    }
}

fn walk(
    schema: &Schema,
    state: Option<&Map<String, Value>>,
    prefix: &str,
    evaluator: &dyn RuleEvaluator,
    issues: &mut Vec<ValidationIssue>,
) {
    for (key, entry) in schema.iter() {
        let path = if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        };
        let value = state.and_then(|s| s.get(key));

        match entry {
            SchemaEntry::Selector => {
                if !matches!(value, Some(Value::String(_))) {
                    issues.push(ValidationIssue {
                        path,
                        message: "expected a selected option".to_string(),
                    });
                }
            }
            SchemaEntry::Rule { rule, .. } => {
                if let Err(message) = evaluator.evaluate(rule, value) {
                    issues.push(ValidationIssue { path, message });
                }
            }
            SchemaEntry::Object(inner) => match value {
                Some(Value::Object(map)) => walk(inner, Some(map), &path, evaluator, issues),
                None => walk(inner, None, &path, evaluator, issues),
                Some(_) => issues.push(ValidationIssue {
                    path,
                    message: "expected an object".to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{FormBuilder, SectionOptions, VariantOptions};
    use crate::data::Field;
    use serde_json::json;

    /// Understands `{"minLength": n}` on strings.
    fn min_length(rule: &Rule, value: Option<&Value>) -> Result<(), String> {
        let min = rule.as_json()["minLength"].as_u64().unwrap_or(0) as usize;
        let len = value.and_then(Value::as_str).map_or(0, str::len);
        if len < min {
            Err(format!("at least {min} characters"))
        } else {
            Ok(())
        }
    }

    fn form() -> crate::data::Form {
        let rule = json!({"minLength": 2});
        FormBuilder::new()
            .add_section(SectionOptions::new("who", "Who"), |b| {
                b.add_field(Field::new("name", "UInput").with_validation(rule.clone()));
            })
            .add_variant(VariantOptions::new("kind", "a"), |v| {
                v.branch("a", |b| {
                    b.add_field(Field::new("alpha", "UInput").with_validation(rule.clone()));
                });
                v.branch("b", |b| {
                    b.add_field(Field::new("beta", "UInput").with_validation(rule.clone()));
                });
            })
            .build()
    }

    #[test]
    fn test_initial_state_reports_visible_fields_only() {
        let form = form();
        let state = form.state(None);
        let issues = form.schema(Some(&state)).validate(&state, &min_length);

        let paths: Vec<_> = issues.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, ["who.name", "alpha"]);
        assert_eq!(issues[0].to_string(), "who.name: at least 2 characters");
    }

    #[test]
    fn test_switching_branch_ignores_hidden_errors() {
        let form = form();
        let initial = json!({"who": {"name": "Ada"}, "kind": "b", "beta": "ok"});
        let state = form.state(initial.as_object());
        assert!(form.schema(Some(&state)).validate(&state, &min_length).is_empty());
    }

    #[test]
    fn test_structural_mismatches() {
        let form = form();
        let state = json!({"who": "nobody", "kind": 1});
        let state = state.as_object().unwrap();
        let issues = form.schema(None).validate(state, &min_length);

        assert!(issues.contains(&ValidationIssue {
            path: "who".into(),
            message: "expected an object".into(),
        }));
        assert!(issues.iter().any(|i| i.path == "kind"));
    }
}
