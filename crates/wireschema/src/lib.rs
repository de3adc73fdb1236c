//! Wireschema - reading and writing circuit layouts as wire-schema text.
//!
//! The wire-schema format stores placed components and routed wires one per
//! line. This crate ties the data model and the importer/exporter together
//! behind [`LayoutCodec`], which applies an [`AppConfig`] to every call.

pub mod config;
mod error;

pub use wireschema_core::{geometry, identifier, layout, schema};
pub use wireschema_parser::{ImportOptions, ImportOutcome, ImportState, error as issues};

pub use error::WireSchemaError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use layout::Layout;

/// Entry point for importing and exporting layouts.
///
/// # Examples
///
/// ```rust
/// use wireschema::{LayoutCodec, config::AppConfig};
///
/// let source = "#wire-schema 1\nC ram 0 p:-12,-23\n";
///
/// let codec = LayoutCodec::new(AppConfig::default());
/// let layout = codec.import_accepted(source)
///     .expect("Failed to import");
///
/// assert_eq!(codec.export(&layout), source);
/// ```
#[derive(Debug, Default)]
pub struct LayoutCodec {
    config: AppConfig,
}

impl LayoutCodec {
    /// Create a new codec with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Round-trip mode and acceptance policy for imports
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Import `source`, returning the layout together with every issue.
    ///
    /// The configured round-trip check runs; the acceptance policy does not.
    pub fn import(&self, source: &str) -> ImportOutcome {
        let options = self.config.import().options();
        debug!(round_trip:? = options.round_trip(); "Importing with configured options");
        wireschema_parser::import(source, options)
    }

    /// Import `source` and apply the configured acceptance policy.
    ///
    /// # Errors
    ///
    /// Returns [`WireSchemaError::Import`] with every issue and the source text
    /// when the policy refuses the import.
    pub fn import_accepted(&self, source: &str) -> Result<Layout, WireSchemaError> {
        let policy = self.config.import().policy();
        let layout = self
            .import(source)
            .accept(policy)
            .map_err(|err| WireSchemaError::new_import_error(err, source))?;

        trace!(layout:?; "Accepted layout");
        Ok(layout)
    }

    /// Serialize `layout` to wire-schema text.
    pub fn export(&self, layout: &Layout) -> String {
        wireschema_parser::export(layout)
    }

    /// Read and import the file at `path`, applying the acceptance policy.
    ///
    /// # Errors
    ///
    /// Returns [`WireSchemaError::Io`] if the file cannot be read and
    /// [`WireSchemaError::Import`] if the policy refuses its content.
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Layout, WireSchemaError> {
        let path = path.as_ref();
        info!(path:? = path; "Reading layout file");

        let source = fs::read_to_string(path)?;
        self.import_accepted(&source)
    }

    /// Export `layout` and write it to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`WireSchemaError::Io`] if the file cannot be written.
    pub fn write_file(&self, path: impl AsRef<Path>, layout: &Layout) -> Result<(), WireSchemaError> {
        let path = path.as_ref();
        let text = self.export(layout);

        fs::write(path, &text)?;
        info!(path:? = path, bytes = text.len(); "Layout written");
        Ok(())
    }
}
