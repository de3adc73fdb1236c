//! Token kinds produced by the line tokenizer.

use std::fmt;

use crate::span::Span;

/// The value of a [`LinePart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartValue<'src> {
    /// A bare token without whitespace, `[`, `]` or `:`, e.g. `-12,-23`.
    Atom(&'src str),
    /// The unsplit interior of a bracketed list, e.g. `13,6|22,6,0` for `[13,6|22,6,0]`.
    List(&'src str),
}

impl<'src> PartValue<'src> {
    /// The raw value text, without brackets.
    pub fn as_str(&self) -> &'src str {
        match self {
            PartValue::Atom(text) | PartValue::List(text) => text,
        }
    }

    /// Returns the atom text, or `None` for a list.
    pub fn as_atom(&self) -> Option<&'src str> {
        match self {
            PartValue::Atom(text) => Some(text),
            PartValue::List(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, PartValue::List(_))
    }
}

/// One whitespace-separated part of a line: an optional `label:` and a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePart<'src> {
    /// The raw text of the whole part, label included.
    pub text: &'src str,
    /// The label before `:`, if any.
    pub label: Option<&'src str>,
    pub value: PartValue<'src>,
    /// Span of the whole part.
    pub span: Span,
    /// Span of the value; for lists this excludes the brackets.
    pub value_span: Span,
}

impl<'src> LinePart<'src> {
    /// Returns the text of an unlabeled atom, the shape ids and markers take.
    pub fn bare_atom(&self) -> Option<&'src str> {
        match self.label {
            None => self.value.as_atom(),
            Some(_) => None,
        }
    }

    /// Returns `true` if the part carries `label`.
    pub fn has_label(&self, label: &str) -> bool {
        self.label == Some(label)
    }
}

impl fmt::Display for LinePart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
