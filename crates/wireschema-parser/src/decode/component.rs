//! Component lines: `C <id> <defId> p:<x>,<y>`.

use log::debug;

use wireschema_core::{geometry::Point, layout::Component, schema::POSITION_LABEL};

use super::{bare_identifier, split_fields};
use crate::{
    error::{ErrorCode, IssueCollector},
    lexer,
    source::SourceLine,
    tokens::LinePart,
};

/// Decode a line whose first part is the component marker.
///
/// Returns `None` when the line is dropped: fewer than three parts, or an
/// invalid id or type. A missing or malformed position is reported and the
/// component is placed at the origin.
pub(crate) fn decode_component(
    line: &SourceLine<'_>,
    parts: &[LinePart<'_>],
    issues: &mut IssueCollector,
) -> Option<Component> {
    let [_, id, def_id, attributes @ ..] = parts else {
        issues.emit(
            line.issue(
                ErrorCode::E100,
                "invalid component line: must have at least 3 parts",
            )
            .with_help("expected `C <id> <type> p:<x>,<y>`"),
        );
        return None;
    };

    let id = bare_identifier(line, id, "component id", issues)?;
    let def_id = bare_identifier(line, def_id, "component type", issues)?;

    let mut pos = None;
    let mut saw_position = false;

    for part in attributes {
        if !part.has_label(POSITION_LABEL) {
            issues.emit(
                line.issue_at(
                    part.span,
                    ErrorCode::E201,
                    format!("invalid component line: unknown part `{part}`"),
                )
                .with_help("component lines only take a `p:<x>,<y>` position"),
            );
            continue;
        }

        if saw_position {
            issues.emit(line.issue_at(
                part.span,
                ErrorCode::E207,
                "duplicate position: only the first `p:` is used",
            ));
            continue;
        }
        saw_position = true;

        match decode_position(part) {
            Ok(point) => pos = Some(point),
            Err(message) => issues.emit(line.issue_at(part.span, ErrorCode::E200, message)),
        }
    }

    if !saw_position {
        issues.emit(
            line.issue(ErrorCode::E202, format!("component `{id}` has no position"))
                .with_help("add `p:<x>,<y>`; the component was placed at 0,0"),
        );
    }

    debug!(id, def_id; "Decoded component");
    Some(Component::new(id, def_id, pos.unwrap_or_default()))
}

/// Decode the value of a `p:<x>,<y>` part.
fn decode_position(part: &LinePart<'_>) -> Result<Point, &'static str> {
    let Some(value) = part.value.as_atom() else {
        return Err("invalid component line: p: must be `<x>,<y>`, not a list");
    };

    let fields: Vec<_> = split_fields(value, part.value_span.start(), ',').collect();
    let [(x, _), (y, _)] = fields.as_slice() else {
        return Err("invalid component line: p: must have 2 parts");
    };

    match (lexer::parse_number(x), lexer::parse_number(y)) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err("invalid component line: p: must have 2 numbers"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Issue, lexer::tokenize_line, source};

    fn decode(text: &str) -> (Option<Component>, Vec<Issue>) {
        let line = source::lines(text).next().unwrap();
        let parts = tokenize_line(line.content());
        let mut issues = IssueCollector::new();
        let component = decode_component(&line, &parts, &mut issues);
        (component, issues.finish())
    }

    #[test]
    fn test_valid_component() {
        let (component, issues) = decode("C ram 0 p:-12,-23");

        assert!(issues.is_empty());
        let component = component.unwrap();
        assert_eq!(component.id(), "ram");
        assert_eq!(component.def_id(), "0");
        assert_eq!(component.pos(), Point::new(-12.0, -23.0));
        assert!(component.size().is_zero());
        assert!(component.ports().is_empty());
    }

    #[test]
    fn test_decimal_position() {
        let (component, issues) = decode("C alu 4 p:26.5,-0.25");
        assert!(issues.is_empty());
        assert_eq!(component.unwrap().pos(), Point::new(26.5, -0.25));
    }

    #[test]
    fn test_too_few_parts() {
        for text in ["C", "C ram"] {
            let (component, issues) = decode(text);
            assert!(component.is_none());
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].code(), ErrorCode::E100);
        }
    }

    #[test]
    fn test_invalid_id_drops_line() {
        let (component, issues) = decode("C a,b 0 p:1,1");
        assert!(component.is_none());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), ErrorCode::E105);

        let (component, issues) = decode("C ram x:0 p:1,1");
        assert!(component.is_none());
        assert_eq!(issues[0].code(), ErrorCode::E105);
        assert_eq!(issues[0].column(), Some(7));
    }

    #[test]
    fn test_bad_position_keeps_component() {
        for text in ["C ram 0 p:1", "C ram 0 p:1,2,3", "C ram 0 p:a,2", "C ram 0 p:[1,2]"] {
            let (component, issues) = decode(text);
            assert_eq!(issues.len(), 1, "{text}");
            assert_eq!(issues[0].code(), ErrorCode::E200);
            assert_eq!(issues[0].column(), Some(9));
            assert_eq!(component.unwrap().pos(), Point::default());
        }
    }

    #[test]
    fn test_missing_position() {
        let (component, issues) = decode("C ram 0");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), ErrorCode::E202);
        assert_eq!(component.unwrap().pos(), Point::default());
    }

    #[test]
    fn test_unknown_part_is_ignored() {
        let (component, issues) = decode("C ram 0 p:1,2 rot:90");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), ErrorCode::E201);
        assert_eq!(issues[0].column(), Some(15));
        assert_eq!(component.unwrap().pos(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_duplicate_position_keeps_first() {
        let (component, issues) = decode("C ram 0 p:1,2 p:3,4");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code(), ErrorCode::E207);
        assert_eq!(component.unwrap().pos(), Point::new(1.0, 2.0));
    }
}
