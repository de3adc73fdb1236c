//! The issue type reported by the importer.
//!
//! An [`Issue`] describes one problem found while importing, together with
//! the line it was found on, an optional column, labeled spans, and help
//! text.

use std::fmt;

use crate::{
    error::{ErrorCode, IssueKind, Label, Severity},
    span::Span,
};

/// A problem found while importing, located by line and column.
///
/// # Example
///
/// ```text
/// error[E205]: back-edge 4 of node 1 must point to an earlier node
///   --> layout.wire:3:15
///    |
///  3 | W 3 ns:[13,6|22,6,4]
///    |               ^ back-edge does not point to an earlier node
///    |
///    = help: node 1 can only connect to node 0
/// ```
#[derive(Debug, Clone)]
pub struct Issue {
    severity: Severity,
    code: ErrorCode,
    message: String,
    line_number: usize,
    line_text: String,
    column: Option<usize>,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Issue {
    /// Create an issue on a line.
    ///
    /// The severity follows from the error code.
    ///
    /// # Arguments
    ///
    /// * `code` - What went wrong
    /// * `message` - Human readable description
    /// * `line_number` - 1-based line the issue was found on
    /// * `line_text` - Content of that line
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        line_number: usize,
        line_text: impl Into<String>,
    ) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            line_number,
            line_text: line_text.into(),
            column: None,
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the severity of this issue.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the taxonomy of the error code.
    pub fn kind(&self) -> IssueKind {
        self.code.kind()
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the 1-based line number.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Get the text of the offending line.
    pub fn line_text(&self) -> &str {
        &self.line_text
    }

    /// Get the 1-based character column, if the issue points inside the line.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    /// Get all labels attached to this issue.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the 1-based column.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// Add a primary label to this issue.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this issue.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message (line 2)" or "... (line 2, column 5)"
        write!(
            f,
            "{}[{}]: {} (line {}",
            self.severity, self.code, self.message, self.line_number
        )?;
        if let Some(column) = self.column {
            write!(f, ", column {column}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for Issue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_new() {
        let issue = Issue::new(ErrorCode::E100, "invalid component line", 3, "C");

        assert!(issue.severity().is_error());
        assert_eq!(issue.code(), ErrorCode::E100);
        assert_eq!(issue.kind(), IssueKind::Line);
        assert_eq!(issue.message(), "invalid component line");
        assert_eq!(issue.line_number(), 3);
        assert_eq!(issue.line_text(), "C");
        assert!(issue.column().is_none());
        assert!(issue.labels().is_empty());
        assert!(issue.help().is_none());
    }

    #[test]
    fn test_issue_severity_follows_code() {
        let issue = Issue::new(ErrorCode::E300, "mismatch", 1, "#wire-schema 1");
        assert!(issue.severity().is_warning());
    }

    #[test]
    fn test_issue_builder_chain() {
        let issue = Issue::new(ErrorCode::E103, "component `ram` is already defined", 4, "C ram 1 p:0,0")
            .with_column(3)
            .with_label(Span::new(40..43), "duplicate definition")
            .with_secondary_label(Span::new(15..18), "first defined here")
            .with_help("rename one of the components");

        assert_eq!(issue.column(), Some(3));
        assert_eq!(issue.labels().len(), 2);
        assert!(issue.labels()[0].is_primary());
        assert!(issue.labels()[1].is_secondary());
        assert_eq!(issue.help(), Some("rename one of the components"));
    }

    #[test]
    fn test_issue_display() {
        let issue = Issue::new(ErrorCode::E200, "invalid position", 2, "C ram 0 p:x,1");
        assert_eq!(issue.to_string(), "error[E200]: invalid position (line 2)");

        let issue = issue.with_column(9);
        assert_eq!(
            issue.to_string(),
            "error[E200]: invalid position (line 2, column 9)"
        );
    }
}
