//! Collector for accumulating issues during an import.
//!
//! The [`IssueCollector`] lets every decoder report problems and carry on
//! with the next line instead of failing on the first one.

use log::debug;

use crate::error::Issue;

/// A collector for accumulating issues during an import.
#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: Vec<Issue>,
    has_errors: bool,
}

impl IssueCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit an issue to this collector.
    ///
    /// If it's an error, the collector is marked as having errors.
    pub fn emit(&mut self, issue: Issue) {
        debug!(
            code = issue.code().as_str(),
            line = issue.line_number();
            "{}", issue.message()
        );
        if issue.severity().is_error() {
            self.has_errors = true;
        }
        self.issues.push(issue);
    }

    /// Returns `true` if any error-severity issue was emitted.
    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    /// Returns the number of issues emitted so far.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Finish collection and return the issues in the order they were emitted.
    pub fn finish(self) -> Vec<Issue> {
        self.issues
    }
}
