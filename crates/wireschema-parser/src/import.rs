//! Wire-schema text to layout.
//!
//! Import is driven by a small state machine:
//!
//! ```text
//! AwaitingHeader --header ok--> ProcessingBody --end of input--> Done
//!       |
//!       +--missing, malformed or unsupported header--> Aborted
//! ```
//!
//! Problems in the body never stop the import. Each one is recorded as an
//! [`Issue`] and the offending line, node, or field is left out.

use std::collections::HashMap;

use log::{debug, info, trace, warn};

use wireschema_core::{
    error::LayoutError,
    layout::Layout,
    schema::{COMPONENT_MARKER, ImportPolicy, RoundTripMode, SCHEMA_VERSION, WIRE_MARKER},
};

use crate::{
    decode,
    error::{ErrorCode, ImportError, Issue, IssueCollector},
    export::export,
    lexer::{self, Header},
    round_trip::{self, Mismatch},
    source::{self, SourceLine},
    span::Span,
};

/// Options for [`import`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    round_trip: RoundTripMode,
}

impl ImportOptions {
    /// Options with the round-trip check turned off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round_trip(&self) -> RoundTripMode {
        self.round_trip
    }

    /// Re-export the layout after import and compare it with the input.
    pub fn with_round_trip(mut self, mode: RoundTripMode) -> Self {
        self.round_trip = mode;
        self
    }
}

/// Where the importer is, or where it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportState {
    /// Waiting for the `#wire-schema <version>` line.
    AwaitingHeader,
    /// Decoding component and wire lines.
    ProcessingBody,
    /// The whole input was read.
    Done,
    /// The header was missing or named an unsupported version.
    Aborted,
}

/// Everything an import produced.
///
/// The layout is always present; it is empty when the import was aborted.
#[derive(Debug)]
pub struct ImportOutcome {
    layout: Layout,
    issues: Vec<Issue>,
    state: ImportState,
}

impl ImportOutcome {
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Issues in the order they were found.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// The final state: [`ImportState::Done`] or [`ImportState::Aborted`].
    pub fn state(&self) -> ImportState {
        self.state
    }

    /// Returns `true` if nothing at all was reported.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns `true` if an error-severity issue was reported.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|issue| issue.severity().is_error())
    }

    pub fn into_parts(self) -> (Layout, Vec<Issue>) {
        (self.layout, self.issues)
    }

    /// Apply `policy` and hand out the layout if it passes.
    ///
    /// # Errors
    ///
    /// Returns an [`ImportError`] carrying every issue when the policy
    /// refuses the import.
    pub fn accept(self, policy: ImportPolicy) -> Result<Layout, ImportError> {
        let rejected = match policy {
            ImportPolicy::Lenient => self.state == ImportState::Aborted,
            ImportPolicy::RejectErrors => self.has_errors(),
            ImportPolicy::RejectAll => !self.is_clean(),
        };

        if rejected {
            debug!(policy:?, issues = self.issues.len(); "Import rejected");
            return Err(ImportError::new(self.issues));
        }
        Ok(self.layout)
    }
}

/// Parse wire-schema text into a layout.
///
/// Never fails: problems are returned as issues alongside whatever could be
/// decoded.
///
/// # Example
///
/// ```
/// # use wireschema_parser::{import, ImportOptions, ImportState};
/// let outcome = import(
///     "#wire-schema 1\nC ram 0 p:-12,-23\nW 3 ns:[13,6 p:ram/out|22,6,0]\n",
///     ImportOptions::default(),
/// );
///
/// assert!(outcome.is_clean());
/// assert_eq!(outcome.state(), ImportState::Done);
/// assert_eq!(outcome.layout().wire("3").map(|wire| wire.len()), Some(2));
/// ```
pub fn import(source: &str, options: ImportOptions) -> ImportOutcome {
    info!(bytes = source.len(), round_trip:? = options.round_trip(); "Importing layout");

    let outcome = Importer::new(source, options).run();

    info!(
        components = outcome.layout.components().len(),
        wires = outcome.layout.wires().len(),
        issues = outcome.issues.len(),
        state:? = outcome.state;
        "Import complete"
    );
    outcome
}

/// Where an id was first defined, for duplicate reports.
#[derive(Debug, Clone, Copy)]
struct Definition {
    line: usize,
    span: Span,
}

struct Importer<'a> {
    source: &'a str,
    options: ImportOptions,
    state: ImportState,
    layout: Layout,
    issues: IssueCollector,
    components: HashMap<String, Definition>,
    wires: HashMap<String, Definition>,
}

impl<'a> Importer<'a> {
    fn new(source: &'a str, options: ImportOptions) -> Self {
        Self {
            source,
            options,
            state: ImportState::AwaitingHeader,
            layout: Layout::new(),
            issues: IssueCollector::new(),
            components: HashMap::new(),
            wires: HashMap::new(),
        }
    }

    fn run(mut self) -> ImportOutcome {
        let mut lines = source::lines(self.source);

        loop {
            self.state = match self.state {
                ImportState::AwaitingHeader => self.read_header(lines.next()),
                ImportState::ProcessingBody => match lines.next() {
                    Some(line) => {
                        self.process_line(&line);
                        ImportState::ProcessingBody
                    }
                    None => {
                        self.check_round_trip();
                        ImportState::Done
                    }
                },
                ImportState::Done | ImportState::Aborted => break,
            };
        }

        debug!(
            state:? = self.state,
            issues = self.issues.len(),
            has_errors = self.issues.has_errors();
            "Importer stopped"
        );

        ImportOutcome {
            layout: self.layout,
            issues: self.issues.finish(),
            state: self.state,
        }
    }

    fn read_header(&mut self, line: Option<SourceLine<'a>>) -> ImportState {
        let Some(line) = line else {
            return ImportState::Aborted;
        };

        match lexer::parse_header(line.content()) {
            Header::Version(SCHEMA_VERSION) => {
                trace!(version = SCHEMA_VERSION; "Read header");
                ImportState::ProcessingBody
            }
            Header::Version(version) => {
                self.issues.emit(
                    line.issue(
                        ErrorCode::E002,
                        format!("unsupported schema version {version}"),
                    )
                    .with_help(format!("only `#wire-schema {SCHEMA_VERSION}` can be read")),
                );
                ImportState::Aborted
            }
            Header::Malformed => {
                let message = if line.content().is_empty() {
                    "missing `#wire-schema` header"
                } else {
                    "invalid header: expected `#wire-schema <version>`"
                };
                self.issues.emit(
                    line.issue(ErrorCode::E001, message)
                        .with_help(format!("the first line must be `#wire-schema {SCHEMA_VERSION}`")),
                );
                ImportState::Aborted
            }
        }
    }

    fn process_line(&mut self, line: &SourceLine<'_>) {
        let content = line.content();
        if content.is_empty() || content.starts_with('#') {
            trace!(line = line.number(), text = line.raw(); "Skipping blank or comment line");
            return;
        }

        let parts = lexer::tokenize_line(content);
        match parts.first().map(|part| part.text) {
            Some(COMPONENT_MARKER) => {
                if let Some(component) = decode::decode_component(line, &parts, &mut self.issues) {
                    let id = component.id().to_string();
                    let span = parts[1].span;
                    match self.layout.add_component(component) {
                        Ok(_) => self.define(line, span, id, Kind::Component),
                        Err(err) => self.reject(line, span, id, err, Kind::Component),
                    }
                }
            }
            Some(WIRE_MARKER) => {
                if let Some(wire) = decode::decode_wire(line, &parts, &mut self.issues) {
                    let id = wire.id().to_string();
                    let span = parts[1].span;
                    match self.layout.add_wire(wire) {
                        Ok(_) => self.define(line, span, id, Kind::Wire),
                        Err(err) => self.reject(line, span, id, err, Kind::Wire),
                    }
                }
            }
            start => {
                let start = start
                    .or_else(|| content.split_whitespace().next())
                    .unwrap_or(content);
                let issue = match parts.first() {
                    Some(part) => line.issue_at(
                        part.span,
                        ErrorCode::E102,
                        format!("unexpected line start `{start}`"),
                    ),
                    None => line.issue(ErrorCode::E102, format!("unexpected line start `{start}`")),
                };
                self.issues.emit(issue.with_help(
                    "lines start with `C` (component), `W` (wire) or `#` (comment)",
                ));
            }
        }
    }

    fn definitions(&mut self, kind: Kind) -> &mut HashMap<String, Definition> {
        match kind {
            Kind::Component => &mut self.components,
            Kind::Wire => &mut self.wires,
        }
    }

    fn define(&mut self, line: &SourceLine<'_>, span: Span, id: String, kind: Kind) {
        let definition = Definition {
            line: line.number(),
            span: line.absolute(span),
        };
        self.definitions(kind).insert(id, definition);
    }

    fn reject(&mut self, line: &SourceLine<'_>, span: Span, id: String, err: LayoutError, kind: Kind) {
        let issue = match err {
            LayoutError::DuplicateComponent(_) | LayoutError::DuplicateWire(_) => {
                let (code, what) = match kind {
                    Kind::Component => (ErrorCode::E103, "component"),
                    Kind::Wire => (ErrorCode::E104, "wire"),
                };
                let issue = line.issue_at(span, code, format!("{what} `{id}` is already defined"));
                match self.definitions(kind).get(&id).copied() {
                    Some(first) => issue
                        .with_secondary_label(first.span, "first defined here")
                        .with_help(format!(
                            "the definition on line {} is kept; rename this {what}",
                            first.line
                        )),
                    None => issue,
                }
            }
            LayoutError::NonFinite { .. } => {
                line.issue_at(span, ErrorCode::E200, format!("invalid {} position: {err}", kind.name()))
            }
            other => line.issue_at(span, ErrorCode::E105, format!("invalid {} id: {other}", kind.name())),
        };
        self.issues.emit(issue);
    }

    fn check_round_trip(&mut self) {
        let mode = self.options.round_trip();
        if !mode.is_enabled() {
            return;
        }

        let exported = export(&self.layout);
        debug!(mode:?; "Round-trip input:\n{}", self.source);
        debug!(mode:?; "Round-trip export:\n{exported}");

        let Some(mismatch) = round_trip::compare(mode, self.source, &exported) else {
            trace!(mode:?; "Round-trip check passed");
            return;
        };

        warn!(mode:?, line = mismatch.line; "Round-trip mismatch");
        if let Some(header) = source::lines(self.source).next() {
            let issue = header
                .issue(
                    ErrorCode::E300,
                    "round-trip mismatch: re-exported text differs from the input",
                )
                .with_help(describe(mode, &mismatch));
            self.issues.emit(issue);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Component,
    Wire,
}

impl Kind {
    fn name(self) -> &'static str {
        match self {
            Kind::Component => "component",
            Kind::Wire => "wire",
        }
    }
}

fn describe(mode: RoundTripMode, mismatch: &Mismatch) -> String {
    let line = match mode {
        RoundTripMode::Normalized => format!("normalized line {}", mismatch.line),
        _ => format!("line {}", mismatch.line),
    };

    match (&mismatch.expected, &mismatch.actual) {
        (Some(input), Some(output)) => {
            format!("first difference at {line}: input `{input}`, export `{output}`")
        }
        (Some(input), None) => format!("export ends before {line}: input `{input}`"),
        (None, Some(output)) => format!("export has extra {line}: `{output}`"),
        (None, None) => format!("texts differ at {line}"),
    }
}
