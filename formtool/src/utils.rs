//! Output helpers.

use colored::Colorize;
use formtree::{Field, lint::Collision};
use serde_json::Value;

/// One line per field: name, label and markers for required/validated.
pub fn field_line(field: &Field) -> String {
    let mut line = format!("{}", field.name.bold());
    if let Some(label) = &field.label {
        line += &format!("  {}", label.dimmed());
    }
    if field.required {
        line += &format!(" {}", "*".red());
    }
    if field.validation.is_some() {
        line += &format!(" {}", "[validated]".cyan());
    }
    line
}

/// Collision warning line.
pub fn collision_line(collision: &Collision) -> String {
    format!("{} {collision}", "warning:".yellow().bold())
}

/// Pretty JSON for terminal output.
pub fn pretty(value: &Value) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_line_markers() {
        colored::control::set_override(false);

        let plain = Field::new("a", "UInput");
        assert_eq!(field_line(&plain), "a");

        let rich = Field::new("email", "UInput")
            .with_label("E-mail")
            .required()
            .with_validation(json!({"format": "email"}));
        assert_eq!(field_line(&rich), "email  E-mail * [validated]");
    }
}
