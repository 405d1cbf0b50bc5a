//! Multi-step wizard definitions.
//!
//! A wizard is an ordered list of named steps, each holding its own
//! [`Form`]. Moving between steps is left to the UI.

use crate::data::Form;

/// One wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepConfig {
    /// Stable identifier, unique within the wizard.
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub form: Form,
}

/// Optional step settings.
#[derive(Debug, Clone, Default)]
pub struct StepOptions {
    /// Explicit step name; generated from the label when missing.
    pub name: Option<String>,
    pub description: Option<String>,
}

impl StepOptions {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Accumulates wizard steps in order.
#[derive(Debug, Clone, Default)]
pub struct WizardBuilder {
    steps: Vec<StepConfig>,
}

impl WizardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_step(
        &mut self,
        label: impl Into<String>,
        form: Form,
        options: StepOptions,
    ) -> &mut Self {
        let label = label.into();
        let name = options
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| step_name(&label));

        self.steps.push(StepConfig {
            name,
            label,
            description: options.description,
            form,
        });
        self
    }

    pub fn build(&self) -> Wizard {
        Wizard {
            steps: self.steps.clone(),
        }
    }
}

// Same set as the ECMAScript `\s` class: Unicode whitespace without NEL, plus BOM.
fn is_separator(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{feff}'
}

/// Lower-cases `label` and replaces every whitespace run with `-`.
pub fn step_name(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for ch in lower.chars() {
        if is_separator(ch) {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Built wizard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wizard {
    pub steps: Vec<StepConfig>,
}

impl Wizard {
    pub fn step(&self, name: &str) -> Option<&StepConfig> {
        self.steps.iter().find(|s| s.name == name)
    }

    /// Position of the step called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
