//! Constants of the wire-schema grammar and the options that control how
//! imports are checked and accepted.

use serde::Deserialize;

/// The magic prefix of the header line.
pub const SCHEMA_MAGIC: &str = "#wire-schema";

/// The only schema version this crate reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// First token of a component line.
pub const COMPONENT_MARKER: &str = "C";

/// First token of a wire line.
pub const WIRE_MARKER: &str = "W";

/// Label of a position attribute, and of a node's port reference.
pub const POSITION_LABEL: &str = "p";

/// Label of a wire's node list.
pub const NODES_LABEL: &str = "ns";

/// Strictness of the post-import round-trip self-check.
///
/// The importer can re-export the layout it just built and compare the result
/// against the input, flagging lossy or ambiguous parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundTripMode {
    /// Skip the check.
    #[default]
    Off,
    /// Compare the exported text byte-for-byte with the input.
    Exact,
    /// Compare after trimming lines, collapsing whitespace, and dropping
    /// blank and comment lines.
    Normalized,
}

impl RoundTripMode {
    /// Returns `true` unless the check is disabled.
    pub fn is_enabled(self) -> bool {
        !matches!(self, RoundTripMode::Off)
    }
}

impl std::str::FromStr for RoundTripMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(RoundTripMode::Off),
            "exact" => Ok(RoundTripMode::Exact),
            "normalized" => Ok(RoundTripMode::Normalized),
            other => Err(format!(
                "unknown round-trip mode `{other}` (expected off, exact or normalized)"
            )),
        }
    }
}

/// Which issues make a caller refuse an imported layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportPolicy {
    /// Accept anything except a missing header or unsupported version.
    Lenient,
    /// Refuse when any error-severity issue was reported.
    #[default]
    RejectErrors,
    /// Refuse when any issue, including warnings, was reported.
    RejectAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_mode_from_str() {
        assert_eq!("off".parse::<RoundTripMode>(), Ok(RoundTripMode::Off));
        assert_eq!("exact".parse::<RoundTripMode>(), Ok(RoundTripMode::Exact));
        assert_eq!(
            "normalized".parse::<RoundTripMode>(),
            Ok(RoundTripMode::Normalized)
        );
        assert!("strict".parse::<RoundTripMode>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RoundTripMode::default(), RoundTripMode::Off);
        assert!(!RoundTripMode::Off.is_enabled());
        assert!(RoundTripMode::Normalized.is_enabled());
        assert_eq!(ImportPolicy::default(), ImportPolicy::RejectErrors);
    }
}
