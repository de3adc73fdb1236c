//! Severity levels for issues.

use std::fmt;

/// The severity level of an issue.
///
/// - [`Severity::Error`] means part of the input was dropped or rejected
/// - [`Severity::Warning`] means the layout is complete but something looks off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Input was lost while importing.
    Error,

    /// Advisory only; no input was lost.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    pub fn is_warning(self) -> bool {
        self == Severity::Warning
    }

    /// Lowercase name used in rendered issue lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
