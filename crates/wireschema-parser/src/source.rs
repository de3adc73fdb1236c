//! Line bookkeeping for the importer.
//!
//! Decoders work on the trimmed content of a line with spans relative to
//! that content. [`SourceLine`] maps those spans back to absolute offsets
//! and 1-based columns when an issue is reported.

use crate::{
    error::{ErrorCode, Issue},
    span::Span,
};

/// One line of the imported text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SourceLine<'a> {
    number: usize,
    raw: &'a str,
    offset: usize,
}

impl<'a> SourceLine<'a> {
    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The line as written, without its line terminator.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The line with surrounding whitespace removed.
    pub fn content(&self) -> &'a str {
        self.raw.trim()
    }

    /// Bytes of leading whitespace before the content.
    fn indent(&self) -> usize {
        self.raw.len() - self.raw.trim_start().len()
    }

    /// Absolute span of a content-relative span.
    pub fn absolute(&self, span: Span) -> Span {
        span.offset(self.offset + self.indent())
    }

    /// Absolute span of the whole content.
    pub fn span(&self) -> Span {
        self.absolute(Span::new(0..self.content().len()))
    }

    /// An issue about the line as a whole.
    pub fn issue(&self, code: ErrorCode, message: impl Into<String>) -> Issue {
        Issue::new(code, message, self.number, self.raw).with_label(self.span(), code.description())
    }

    /// An issue about the content-relative `span` of this line.
    pub fn issue_at(&self, span: Span, code: ErrorCode, message: impl Into<String>) -> Issue {
        let start = (self.indent() + span.start()).min(self.raw.len());
        let column = self.raw.get(..start).map_or(start, |prefix| prefix.chars().count()) + 1;

        Issue::new(code, message, self.number, self.raw)
            .with_column(column)
            .with_label(self.absolute(span), code.description())
    }
}

/// Split `source` into lines.
///
/// Lines end at `\n`; a trailing `\r` is not part of the line. The text after
/// the last `\n` is a line of its own, possibly empty.
pub(crate) fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(index, text)| {
        let line = SourceLine {
            number: index + 1,
            raw: text.strip_suffix('\r').unwrap_or(text),
            offset,
        };
        offset += text.len() + 1;
        line
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_numbers_and_offsets() {
        let source = "#wire-schema 1\r\n  C ram 0 p:1,2\n";
        let lines: Vec<_> = lines(source).collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].number(), 1);
        assert_eq!(lines[0].raw(), "#wire-schema 1");
        assert_eq!(lines[1].raw(), "  C ram 0 p:1,2");
        assert_eq!(lines[1].content(), "C ram 0 p:1,2");
        assert_eq!(lines[2].raw(), "");

        let span = lines[1].span();
        assert_eq!(&source[span.range()], "C ram 0 p:1,2");
    }

    #[test]
    fn test_issue_at_reports_column() {
        let source = "#wire-schema 1\n  C ram 0 p:x,2";
        let line = lines(source).nth(1).unwrap();

        let issue = line.issue_at(Span::new(8..13), ErrorCode::E200, "invalid position");
        assert_eq!(issue.line_number(), 2);
        assert_eq!(issue.line_text(), "  C ram 0 p:x,2");
        assert_eq!(issue.column(), Some(11));
        assert_eq!(&source[issue.labels()[0].span().range()], "p:x,2");
    }

    #[test]
    fn test_issue_has_no_column() {
        let line = lines("C").next().unwrap();
        let issue = line.issue(ErrorCode::E100, "invalid component line");
        assert!(issue.column().is_none());
        assert_eq!(issue.labels()[0].span(), Span::new(0..1));
    }
}
