//! Configuration types for wire-schema imports.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! an empty document is a valid configuration:
//!
//! ```toml
//! [import]
//! round_trip = "exact"      # off | exact | normalized
//! policy = "reject-errors"  # lenient | reject-errors | reject-all
//! ```
//!
//! # Example
//!
//! ```
//! # use wireschema::config::AppConfig;
//! # use wireschema::schema::{ImportPolicy, RoundTripMode};
//! let config = AppConfig::default();
//! assert_eq!(config.import().round_trip(), RoundTripMode::Off);
//! assert_eq!(config.import().policy(), ImportPolicy::RejectErrors);
//! ```

use serde::Deserialize;

use wireschema_core::schema::{ImportPolicy, RoundTripMode};
use wireschema_parser::ImportOptions;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Import configuration section.
    #[serde(default)]
    import: ImportConfig,
}

impl AppConfig {
    pub fn new(import: ImportConfig) -> Self {
        Self { import }
    }

    /// Returns the import configuration.
    pub fn import(&self) -> &ImportConfig {
        &self.import
    }

    /// Replaces the round-trip mode, keeping everything else.
    pub fn with_round_trip(mut self, mode: RoundTripMode) -> Self {
        self.import.round_trip = mode;
        self
    }
}

/// How imported text is checked and when it is accepted.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ImportConfig {
    /// Strictness of the post-import round-trip check.
    #[serde(default)]
    round_trip: RoundTripMode,

    /// Which issues make an import unacceptable.
    #[serde(default)]
    policy: ImportPolicy,
}

impl ImportConfig {
    /// Creates a new [`ImportConfig`].
    ///
    /// # Arguments
    ///
    /// * `round_trip` - Round-trip check run after every import.
    /// * `policy` - Acceptance policy for [`LayoutCodec::import_accepted`](crate::LayoutCodec::import_accepted).
    pub fn new(round_trip: RoundTripMode, policy: ImportPolicy) -> Self {
        Self { round_trip, policy }
    }

    pub fn round_trip(&self) -> RoundTripMode {
        self.round_trip
    }

    pub fn policy(&self) -> ImportPolicy {
        self.policy
    }

    /// The parser options this configuration stands for.
    pub fn options(&self) -> ImportOptions {
        ImportOptions::new().with_round_trip(self.round_trip)
    }
}
