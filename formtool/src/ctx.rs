//! Loaded definition and the files it was read from.
//!
//! [`FormContext`] keeps the parsed [`Form`] together with the path of its
//! initial values, resolving the conventional `<stem>-values.<ext>` file
//! when none is given on the command line.

use std::path::{Path, PathBuf};

use anyhow::Context;
use formtree::{
    Form,
    load::{default_values_path, load_form, load_values},
};
use serde_json::{Map, Value};

/// State shared by all inspection commands.
#[derive(Debug, Clone)]
pub struct FormContext {
    /// Definition file.
    pub definition: PathBuf,
    /// Parsed form tree.
    pub form: Form,
    /// Values file, if one was given or found next to the definition.
    pub values: Option<PathBuf>,
}

impl FormContext {
    /// Load the definition at `definition`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid form.
    pub fn open(definition: impl AsRef<Path>, values: Option<PathBuf>) -> anyhow::Result<Self> {
        let definition = definition.as_ref().to_path_buf();
        let form = load_form(&definition)
            .with_context(|| format!("Failed to load form {}", definition.display()))?;

        let values = values.or_else(|| {
            let candidate = default_values_path(&definition);
            if candidate.exists() {
                debug!("using values file {}", candidate.display());
                Some(candidate)
            } else {
                None
            }
        });

        Ok(Self {
            definition,
            form,
            values,
        })
    }

    /// Initial values from the values file, or an empty object.
    ///
    /// # Errors
    ///
    /// Returns an error if the values file exists but cannot be decoded.
    pub fn initial_values(&self) -> anyhow::Result<Map<String, Value>> {
        match &self.values {
            Some(path) => load_values(path)
                .with_context(|| format!("Failed to load values {}", path.display())),
            None => Ok(Map::new()),
        }
    }
}
