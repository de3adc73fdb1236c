//! Error codes for wire-schema issues.
//!
//! Error codes are organized by how much input a problem costs:
//! - `E0xx` - Format errors: the whole file is rejected
//! - `E1xx` - Line errors: one line is dropped
//! - `E2xx` - Field errors: one field or wire node is dropped
//! - `E3xx` - Round-trip diagnostics: nothing is dropped

use std::fmt;

use crate::error::Severity;

/// The taxonomy an [`ErrorCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Missing header or unsupported version; import aborted.
    Format,
    /// A component or wire line was dropped.
    Line,
    /// A field or node inside an otherwise valid line was dropped.
    Field,
    /// Re-exporting the imported layout did not reproduce the input.
    RoundTrip,
}

/// Error codes for categorizing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Format Errors (E0xx)
    // =========================================================================
    /// Missing or malformed header.
    ///
    /// The first line must be `#wire-schema <version>`.
    E001,

    /// Unsupported schema version.
    ///
    /// Only version 1 can be imported.
    E002,

    // =========================================================================
    // Line Errors (E1xx)
    // =========================================================================
    /// Invalid component line.
    ///
    /// A component line needs at least a marker, an id, and a type.
    E100,

    /// Invalid wire line.
    ///
    /// A wire line needs a marker, an id, and an `ns:[...]` node list.
    E101,

    /// Unexpected line start.
    ///
    /// Lines must start with `C`, `W`, or `#`.
    E102,

    /// Duplicate component id.
    E103,

    /// Duplicate wire id.
    E104,

    /// Invalid identifier.
    ///
    /// Ids must be plain words without whitespace or any of `, | : [ ] /`.
    E105,

    // =========================================================================
    // Field Errors (E2xx)
    // =========================================================================
    /// Invalid position.
    ///
    /// A position is written `p:<x>,<y>` with two decimal numbers.
    E200,

    /// Unknown part.
    ///
    /// A part of the line is not recognized and was ignored.
    E201,

    /// Missing position.
    ///
    /// The component was placed at the origin.
    E202,

    /// Invalid wire node.
    ///
    /// A node starts with `<x>,<y>`; the node was dropped.
    E203,

    /// Invalid back-edge.
    ///
    /// Back-edges are non-negative integer node indices.
    E204,

    /// Back-edge does not point to an earlier node.
    ///
    /// Node `j` may only connect to nodes `0..j`.
    E205,

    /// Invalid port reference.
    ///
    /// A port reference is written `p:<component>/<port>`.
    E206,

    /// Duplicate attribute.
    ///
    /// The attribute was given more than once; only the first is used.
    E207,

    // =========================================================================
    // Round-trip Diagnostics (E3xx)
    // =========================================================================
    /// Exported text differs from the imported text.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Format errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            // Line errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            // Field errors
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
            ErrorCode::E207 => "E207",
            // Round-trip
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "missing or malformed header",
            ErrorCode::E002 => "unsupported schema version",
            ErrorCode::E100 => "invalid component line",
            ErrorCode::E101 => "invalid wire line",
            ErrorCode::E102 => "unexpected line start",
            ErrorCode::E103 => "duplicate component id",
            ErrorCode::E104 => "duplicate wire id",
            ErrorCode::E105 => "invalid identifier",
            ErrorCode::E200 => "invalid position",
            ErrorCode::E201 => "unknown part",
            ErrorCode::E202 => "missing position",
            ErrorCode::E203 => "invalid wire node",
            ErrorCode::E204 => "invalid back-edge",
            ErrorCode::E205 => "back-edge does not point to an earlier node",
            ErrorCode::E206 => "invalid port reference",
            ErrorCode::E207 => "duplicate attribute",
            ErrorCode::E300 => "round-trip mismatch",
        }
    }

    /// Returns the taxonomy this code belongs to.
    pub fn kind(&self) -> IssueKind {
        match self {
            ErrorCode::E001 | ErrorCode::E002 => IssueKind::Format,
            ErrorCode::E100
            | ErrorCode::E101
            | ErrorCode::E102
            | ErrorCode::E103
            | ErrorCode::E104
            | ErrorCode::E105 => IssueKind::Line,
            ErrorCode::E200
            | ErrorCode::E201
            | ErrorCode::E202
            | ErrorCode::E203
            | ErrorCode::E204
            | ErrorCode::E205
            | ErrorCode::E206
            | ErrorCode::E207 => IssueKind::Field,
            ErrorCode::E300 => IssueKind::RoundTrip,
        }
    }

    /// Returns the severity issues with this code are reported at.
    pub fn severity(&self) -> Severity {
        match self.kind() {
            IssueKind::RoundTrip => Severity::Warning,
            IssueKind::Format | IssueKind::Line | IssueKind::Field => Severity::Error,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
