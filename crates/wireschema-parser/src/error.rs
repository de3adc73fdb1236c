//! Issue reporting for the wire-schema importer.
//!
//! This module provides:
//! - Error codes grouped by the kind of failure they describe
//! - Line and column information for every issue
//! - Labeled spans for rich rendering
//! - Severity levels
//! - An issue collector for accumulating problems across lines
//!
//! # Overview
//!
//! The importer never stops at the first problem. Every malformed line or
//! field produces an [`Issue`], and the importer moves on. Issues carry an
//! [`ErrorCode`] whose [`IssueKind`] tells how much input was lost:
//!
//! - [`IssueKind::Format`] - the header is missing or unsupported; nothing was read
//! - [`IssueKind::Line`] - one whole line was dropped
//! - [`IssueKind::Field`] - one field or wire node was dropped
//! - [`IssueKind::RoundTrip`] - re-exporting did not reproduce the input
//!
//! # Example
//!
//! ```
//! # use wireschema_parser::error::{ErrorCode, Issue};
//! # use wireschema_parser::Span;
//!
//! let issue = Issue::new(ErrorCode::E100, "invalid component line", 2, "C")
//!     .with_label(Span::new(15..16), "expected `C <id> <type> p:<x>,<y>`")
//!     .with_help("add the component id and type");
//!
//! assert_eq!(issue.line_number(), 2);
//! assert!(issue.severity().is_error());
//! ```

mod collector;
mod error_code;
mod import_error;
mod issue;
mod label;
mod severity;

pub(crate) use collector::IssueCollector;

pub use error_code::{ErrorCode, IssueKind};
pub use import_error::ImportError;
pub use issue::Issue;
pub use label::{Label, LabelStyle};
pub use severity::Severity;
