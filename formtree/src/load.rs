//! Loading definitions and initial values from disk.
//!
//! Files are decoded by extension: `.json` directly, `.toml` through
//! `toml::Value` and then into JSON values. TOML has no top-level arrays,
//! so TOML definitions keep their nodes under an `items` key.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde_json::{Map, Value};

use crate::{
    data::Form,
    error::{FormError, Result},
};

/// Decode `content` according to a file extension.
pub fn parse_by_extension(content: &str, ext: &str) -> Result<Value> {
    let value = match ext {
        "json" => serde_json::from_str(content)?,
        "toml" | "tml" => {
            let v: toml::Value = toml::from_str(content)?;
            serde_json::to_value(v)?
        }
        other => return Err(FormError::UnsupportedExtension(other.to_string())),
    };
    Ok(value)
}

fn read_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| FormError::io(path, e))?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    debug!("loading {} as {ext:?}", path.display());
    parse_by_extension(&content, ext)
}

/// Load a form definition.
pub fn load_form(path: impl AsRef<Path>) -> Result<Form> {
    Form::from_value(read_value(path.as_ref())?)
}

/// Load initial values. An empty file yields an empty object.
pub fn load_values(path: impl AsRef<Path>) -> Result<Map<String, Value>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| FormError::io(path, e))?;
    if content.trim().is_empty() {
        return Ok(Map::new());
    }

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    match parse_by_extension(&content, ext)? {
        Value::Object(map) => Ok(map),
        other => Err(FormError::InvalidValues(other.to_string())),
    }
}

/// Values file conventionally paired with a definition file.
///
/// `signup.json` pairs with `signup-values.json` in the same directory.
pub fn default_values_path(definition: &Path) -> PathBuf {
    let stem = definition
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match definition.extension() {
        Some(ext) => format!("{stem}-values.{}", ext.to_string_lossy()),
        None => format!("{stem}-values"),
    };

    match definition.parent() {
        Some(parent) => parent.join(name),
        None => PathBuf::from(name),
    }
}
