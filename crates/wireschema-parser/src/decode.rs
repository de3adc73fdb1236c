//! Decoders turning tokenized lines into layout records.
//!
//! Each decoder reports problems to an [`IssueCollector`] and returns
//! whatever it could still build. A decoder returns `None` only when the
//! whole line has to be dropped.

mod component;
mod wire;

pub(crate) use component::decode_component;
pub(crate) use wire::decode_wire;

use wireschema_core::identifier;

use crate::{
    error::{ErrorCode, IssueCollector},
    source::SourceLine,
    span::Span,
    tokens::LinePart,
};

/// Read an id from a part that must be an unlabeled, valid identifier.
///
/// Emits E105 and returns `None` otherwise.
fn bare_identifier<'a>(
    line: &SourceLine<'_>,
    part: &LinePart<'a>,
    what: &str,
    issues: &mut IssueCollector,
) -> Option<&'a str> {
    let Some(text) = part.bare_atom() else {
        issues.emit(
            line.issue_at(part.span, ErrorCode::E105, format!("invalid {what} `{part}`"))
                .with_help("ids are plain words without `:` or brackets"),
        );
        return None;
    };

    match identifier::validate(text) {
        Ok(()) => Some(text),
        Err(err) => {
            issues.emit(line.issue_at(
                part.span,
                ErrorCode::E105,
                format!("invalid {what}: {err}"),
            ));
            None
        }
    }
}

/// Split `text`, which starts at content offset `start`, on `separator`,
/// pairing each field with its span.
fn split_fields(text: &str, start: usize, separator: char) -> impl Iterator<Item = (&str, Span)> {
    let mut offset = start;
    text.split(separator).map(move |field| {
        let span = Span::new(offset..offset + field.len());
        offset += field.len() + separator.len_utf8();
        (field, span)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_spans() {
        let fields: Vec<_> = split_fields("13,6,0", 4, ',').collect();
        assert_eq!(
            fields,
            vec![
                ("13", Span::new(4..6)),
                ("6", Span::new(7..8)),
                ("0", Span::new(9..10)),
            ]
        );
    }

    #[test]
    fn test_split_fields_keeps_empty_fields() {
        let fields: Vec<_> = split_fields("a||b", 0, '|').map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["a", "", "b"]);
    }
}
