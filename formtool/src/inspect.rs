//! Inspection commands over a loaded form definition.
//!
//! Each handler renders its report to a `String` so the binary only has to
//! print it.

use anyhow::Result;
use clap::Subcommand;
use formtree::lint::collisions;
use serde_json::Value;
use std::path::PathBuf;

use crate::ctx::FormContext;
use crate::utils::{collision_line, field_line, pretty};

/// Inspection subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum InspectCommand {
    /// List every field the definition can hold, in display order.
    Fields {
        /// Form definition (.json or .toml).
        definition: PathBuf,
    },
    /// Print the derived initial state.
    State {
        /// Form definition (.json or .toml).
        definition: PathBuf,
        /// Initial values file; defaults to `<stem>-values.<ext>` if present.
        #[arg(long)]
        values: Option<PathBuf>,
    },
    /// Print the derived validation schema.
    Schema {
        /// Form definition (.json or .toml).
        definition: PathBuf,
        /// Current state used to pick active variant branches.
        #[arg(long)]
        state: Option<PathBuf>,
        /// Emit a JSON Schema document instead of the plain shape.
        #[arg(long)]
        json_schema: bool,
    },
    /// Report keys written more than once in the same scope.
    Check {
        /// Form definition (.json or .toml).
        definition: PathBuf,
    },
}

/// Outcome of a command: the report and whether it found problems.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub output: String,
    pub ok: bool,
}

impl Report {
    fn ok(output: String) -> Self {
        Self { output, ok: true }
    }
}

/// Dispatcher for [`InspectCommand`].
pub struct InspectHandler;

impl InspectHandler {
    /// Runs `command`.
    ///
    /// # Errors
    ///
    /// Returns an error if a definition or values file cannot be loaded.
    pub fn handle(command: InspectCommand) -> Result<Report> {
        match command {
            InspectCommand::Fields { definition } => {
                Self::handle_fields(&FormContext::open(definition, None)?)
            }
            InspectCommand::State { definition, values } => {
                Self::handle_state(&FormContext::open(definition, values)?)
            }
            InspectCommand::Schema {
                definition,
                state,
                json_schema,
            } => Self::handle_schema(&FormContext::open(definition, state)?, json_schema),
            InspectCommand::Check { definition } => {
                Self::handle_check(&FormContext::open(definition, None)?)
            }
        }
    }

    fn handle_fields(ctx: &FormContext) -> Result<Report> {
        let fields = ctx.form.flatten();
        info!("{} fields in {}", fields.len(), ctx.definition.display());

        let lines: Vec<_> = fields.into_iter().map(field_line).collect();
        Ok(Report::ok(lines.join("\n")))
    }

    fn handle_state(ctx: &FormContext) -> Result<Report> {
        let initial = ctx.initial_values()?;
        let state = ctx.form.state(Some(&initial));
        Ok(Report::ok(pretty(&Value::Object(state))?))
    }

    fn handle_schema(ctx: &FormContext, json_schema: bool) -> Result<Report> {
        let state = match &ctx.values {
            Some(_) => Some(ctx.initial_values()?),
            None => None,
        };
        let schema = ctx.form.schema(state.as_ref());

        let value = if json_schema {
            schema.to_json_schema().to_value()
        } else {
            schema.as_json()
        };
        Ok(Report::ok(pretty(&value)?))
    }

    fn handle_check(ctx: &FormContext) -> Result<Report> {
        let found = collisions(ctx.form.items());
        if found.is_empty() {
            return Ok(Report::ok(format!(
                "{}: no key collisions",
                ctx.definition.display()
            )));
        }

        warn!("{} key collisions in {}", found.len(), ctx.definition.display());
        let lines: Vec<_> = found.iter().map(collision_line).collect();
        Ok(Report {
            output: lines.join("\n"),
            ok: false,
        })
    }
}
