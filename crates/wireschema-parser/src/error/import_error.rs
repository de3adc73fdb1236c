//! The error returned when a caller refuses an import.
//!
//! [`ImportError`] wraps every [`Issue`] of an import that did not satisfy
//! the caller's [`ImportPolicy`](wireschema_core::schema::ImportPolicy).

use std::fmt;

use crate::error::Issue;

/// Error type for a rejected import.
#[derive(Debug)]
pub struct ImportError {
    issues: Vec<Issue>,
}

impl ImportError {
    /// Create a new import error from issues.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Get all issues in this error.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.issues.first() {
            write!(f, "{}", first)?;
            if self.issues.len() > 1 {
                write!(f, " (+{} more)", self.issues.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ImportError {}

impl From<Issue> for ImportError {
    fn from(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

impl From<Vec<Issue>> for ImportError {
    fn from(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}
