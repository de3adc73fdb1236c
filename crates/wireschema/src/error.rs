//! Error types for wire-schema operations.
//!
//! [`WireSchemaError`] wraps the ways reading or writing a layout can fail.

use std::io;

use thiserror::Error;

use wireschema_parser::error::ImportError;

/// The main error type for wire-schema operations.
///
/// # Diagnostic Variants
///
/// The `Import` variant keeps the imported text next to the issues, so
/// callers can render every issue against its source line.
#[derive(Debug, Error)]
pub enum WireSchemaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Import { err: ImportError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WireSchemaError {
    /// Create a new `Import` error with the associated source text.
    pub fn new_import_error(err: ImportError, src: impl Into<String>) -> Self {
        Self::Import {
            err,
            src: src.into(),
        }
    }
}
