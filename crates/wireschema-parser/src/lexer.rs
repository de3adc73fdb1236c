//! Line tokenizer for wire-schema text.
//!
//! A line is a whitespace-separated sequence of parts. Each part is an
//! optional `label:` followed by either a bracketed list or a bare atom:
//!
//! ```text
//! W 3 ns:[13,6 p:id/rhsImm|22,6,0]
//! ^ ^ ^^^^^^^^^^^^^^^^^^^^^^^^^^^^
//! | |  label `ns`, list `13,6 p:id/rhsImm|22,6,0`
//! | atom `3`
//! atom `W`
//! ```
//!
//! List interiors are returned unsplit; the wire decoder splits them on `|`
//! and tokenizes each node descriptor again with [`tokenize_at`].
//!
//! The tokenizer never fails. Characters that cannot start a part (a stray
//! `:` or `]`, or a `[` that is never closed) are skipped so that the
//! decoders can report what is missing.

use log::trace;
use winnow::{
    Parser as _,
    ascii::{digit1, space1},
    combinator::{alt, delimited, opt, preceded, terminated},
    error::ModalResult,
    stream::{LocatingSlice, Location, Stream},
    token::{literal, take_while},
};

use wireschema_core::schema::SCHEMA_MAGIC;

use crate::{
    span::Span,
    tokens::{LinePart, PartValue},
};

type Input<'a> = LocatingSlice<&'a str>;

/// A value together with its byte range in the tokenized text.
type Located<'a> = (PartValue<'a>, std::ops::Range<usize>);

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_atom_char(c: char) -> bool {
    !c.is_whitespace() && !matches!(c, '[' | ']' | ':')
}

/// Parse a label: a word immediately followed by `:`
fn label<'a>(input: &mut Input<'a>) -> ModalResult<&'a str> {
    terminated(take_while(1.., is_label_char), ':').parse_next(input)
}

/// Parse a bracketed list, keeping the interior unsplit
fn list<'a>(input: &mut Input<'a>) -> ModalResult<Located<'a>> {
    delimited('[', take_while(0.., |c: char| c != ']').with_span(), ']')
        .map(|(interior, range)| (PartValue::List(interior), range))
        .parse_next(input)
}

/// Parse a bare atom
fn atom<'a>(input: &mut Input<'a>) -> ModalResult<Located<'a>> {
    take_while(1.., is_atom_char)
        .with_span()
        .map(|(text, range)| (PartValue::Atom(text), range))
        .parse_next(input)
}

fn value<'a>(input: &mut Input<'a>) -> ModalResult<Located<'a>> {
    alt((list, atom)).parse_next(input)
}

/// Parse one part.
///
/// When a label is present but no value follows it, the same position is
/// read again without a label, so `p:` alone yields the atom `p`.
fn part<'a>(input: &mut Input<'a>) -> ModalResult<(Option<&'a str>, Located<'a>)> {
    alt((
        (label.map(Some), value),
        value.map(|located| (None, located)),
    ))
    .parse_next(input)
}

/// Advance past leading whitespace
fn skip_whitespace(input: &mut Input<'_>) {
    let width = input.len() - input.trim_start().len();
    input.next_slice(width);
}

/// Tokenize one trimmed line into its parts.
///
/// Spans are byte offsets into `line`.
///
/// # Example
///
/// ```
/// # use wireschema_parser::{tokenize_line, PartValue};
/// let parts = tokenize_line("C ram 0 p:-12,-23");
///
/// assert_eq!(parts.len(), 4);
/// assert_eq!(parts[1].text, "ram");
/// assert_eq!(parts[3].label, Some("p"));
/// assert_eq!(parts[3].value, PartValue::Atom("-12,-23"));
/// ```
pub fn tokenize_line(line: &str) -> Vec<LinePart<'_>> {
    tokenize_at(line, 0)
}

/// Tokenize `text` that starts `base` bytes into the line it came from.
///
/// All spans of the returned parts are shifted by `base`.
pub(crate) fn tokenize_at(text: &str, base: usize) -> Vec<LinePart<'_>> {
    let mut input = LocatingSlice::new(text);
    let mut parts = Vec::new();

    loop {
        skip_whitespace(&mut input);
        if input.is_empty() {
            break;
        }

        let checkpoint = input.checkpoint();
        match part.with_span().parse_next(&mut input) {
            Ok(((label, (value, value_range)), range)) => {
                let span = Span::new(range);
                parts.push(LinePart {
                    text: &text[span.range()],
                    label,
                    value,
                    span: span.offset(base),
                    value_span: Span::new(value_range).offset(base),
                });
            }
            Err(_) => {
                input.reset(&checkpoint);
                let offset = base + input.current_token_start();
                let skipped = input.next_token();
                trace!(offset, skipped:?; "Skipping stray character");
            }
        }
    }

    trace!(parts = parts.len(); "Tokenized line");
    parts
}

/// Parse a decimal number: `-?[0-9]+(\.[0-9]+)?`
fn decimal<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (opt('-'), digit1, opt(('.', digit1)))
        .take()
        .parse_next(input)
}

/// Parse a node index: `[0-9]+`
fn index_digits<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    digit1.parse_next(input)
}

/// Parse a coordinate, rejecting anything the exporter would never write
/// (exponents, `inf`, `nan`, a leading `+`, trailing text).
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    decimal
        .parse(text)
        .ok()
        .and_then(|digits| digits.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Parse a back-edge index.
pub(crate) fn parse_index(text: &str) -> Option<usize> {
    index_digits
        .parse(text)
        .ok()
        .and_then(|digits| digits.parse::<usize>().ok())
}

/// Header outcome for the first line of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Header {
    /// `#wire-schema <version>` with a parsable version.
    Version(u32),
    /// Anything else.
    Malformed,
}

fn header_version(input: &mut &str) -> ModalResult<u32> {
    preceded(
        (literal(SCHEMA_MAGIC), space1),
        digit1.try_map(str::parse::<u32>),
    )
    .parse_next(input)
}

/// Read the header from a trimmed first line.
pub(crate) fn parse_header(line: &str) -> Header {
    match header_version.parse(line) {
        Ok(version) => Header::Version(version),
        Err(_) => Header::Malformed,
    }
}
