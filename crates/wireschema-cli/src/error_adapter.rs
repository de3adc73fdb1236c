//! miette rendering for import issues and [`WireSchemaError`].
//!
//! The library crates keep plain error types; the CLI wraps them here. A
//! rejected import expands into one diagnostic per issue, each pointing into
//! the imported text.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceSpan,
};

use wireschema::WireSchemaError;
use wireschema_parser::error::{Issue, LabelStyle, Severity};

/// A single [`Issue`] paired with the text it was found in.
pub struct IssueAdapter<'a> {
    issue: &'a Issue,
    src: &'a str,
}

impl<'a> IssueAdapter<'a> {
    pub fn new(issue: &'a Issue, src: &'a str) -> Self {
        Self { issue, src }
    }
}

impl fmt::Debug for IssueAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueAdapter")
            .field("issue", &self.issue)
            .finish()
    }
}

impl fmt::Display for IssueAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issue.message())
    }
}

impl std::error::Error for IssueAdapter<'_> {}

impl MietteDiagnostic for IssueAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.issue.code()))
    }

    fn severity(&self) -> Option<MietteSeverity> {
        let severity = match self.issue.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        };
        Some(severity)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.issue
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.issue.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            match label.style() {
                LabelStyle::Primary => LabeledSpan::new_primary_with_span(message, span),
                LabelStyle::Secondary => LabeledSpan::new_with_span(message, span),
            }
        })))
    }
}

/// Wraps the [`WireSchemaError`] variants that have no source text.
pub struct ErrorAdapter<'a>(pub &'a WireSchemaError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WireSchemaError::Io(_) => "wireschema::io",
            WireSchemaError::Import { .. } => "wireschema::import",
            WireSchemaError::Config(_) => "wireschema::config",
        };
        Some(Box::new(code))
    }
}

/// One diagnostic ready for rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    Issue(IssueAdapter<'a>),
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Issue(issue) => issue,
            Reportable::Error(error) => error,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<MietteSeverity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn span_to_miette(span: wireschema_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Expand `err` into diagnostics: one per issue for a rejected import,
/// otherwise just the error itself.
pub fn to_reportables(err: &WireSchemaError) -> Vec<Reportable<'_>> {
    match err {
        WireSchemaError::Import {
            err: import_err,
            src,
        } => import_err
            .issues()
            .iter()
            .map(|issue| Reportable::Issue(IssueAdapter::new(issue, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render a diagnostic with miette's graphical handler.
///
/// Falls back to the plain message if rendering fails.
pub fn render(diagnostic: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, diagnostic) {
        Ok(()) => writer,
        Err(_) => diagnostic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use wireschema_parser::{
        Span,
        error::{ErrorCode, ImportError},
    };

    use super::*;

    #[test]
    fn test_single_issue() {
        let issue = Issue::new(ErrorCode::E200, "invalid position", 2, "C ram 0 p:x,1")
            .with_label(Span::new(23..28), "here")
            .with_help("try this");
        let err = WireSchemaError::new_import_error(
            ImportError::from(issue),
            "#wire-schema 1\nC ram 0 p:x,1\n",
        );

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Issue(i) => {
                assert_eq!(i.to_string(), "invalid position");
                assert_eq!(i.code().unwrap().to_string(), "E200");
                assert_eq!(i.help().unwrap().to_string(), "try this");
            }
            Reportable::Error(_) => panic!("Expected Issue"),
        }
    }

    #[test]
    fn test_multiple_issues() {
        let issues = vec![
            Issue::new(ErrorCode::E100, "first error", 2, "C"),
            Issue::new(ErrorCode::E101, "second error", 3, "W"),
            Issue::new(ErrorCode::E300, "third", 1, "#wire-schema 1"),
        ];
        let err = WireSchemaError::new_import_error(ImportError::from(issues), "#wire-schema 1\nC\nW\n");

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "first error");
        assert_eq!(reportables[1].to_string(), "second error");
        assert_eq!(reportables[2].severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_non_import_error() {
        let err = WireSchemaError::Config("bad value".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad value");
                assert_eq!(e.code().unwrap().to_string(), "wireschema::config");
            }
            Reportable::Issue(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_primary_flag_on_labels() {
        let issue = Issue::new(ErrorCode::E103, "component `ram` is already defined", 3, "C ram 1 p:0,0")
            .with_label(Span::new(32..35), "primary")
            .with_secondary_label(Span::new(17..20), "secondary");

        let adapter = IssueAdapter::new(&issue, "#wire-schema 1\nC ram 0 p:0,0\nC ram 1 p:0,0\n");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary"));
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_includes_code_and_message() {
        let issue = Issue::new(ErrorCode::E102, "unexpected line start `X`", 2, "X 1")
            .with_label(Span::new(15..16), "unexpected line start");
        let adapter = IssueAdapter::new(&issue, "#wire-schema 1\nX 1\n");

        let rendered = render(&adapter);
        assert!(rendered.contains("E102"));
        assert!(rendered.contains("unexpected line start `X`"));
    }
}
