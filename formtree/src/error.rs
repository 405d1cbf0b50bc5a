//! Error types for loading form definitions and initial values.
//!
//! Derivation itself never fails; these errors only come from reading and
//! decoding input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or decoding form data.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported file extension: {0:?}")]
    UnsupportedExtension(String),

    #[error("invalid form definition: {0}")]
    InvalidDefinition(String),

    #[error("initial values must be an object, found {0}")]
    InvalidValues(String),
}

impl FormError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FormError>;
