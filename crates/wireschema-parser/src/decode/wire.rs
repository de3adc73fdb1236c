//! Wire lines: `W <id> ns:[<node>|<node>|...]`.
//!
//! A node descriptor is `<x>,<y>[,<edge>...][ p:<component>/<port>]`. Each
//! descriptor is tokenized on its own so that a malformed node only costs
//! that node.

use log::{debug, trace};

use wireschema_core::{
    geometry::Point,
    identifier,
    layout::{PortRef, WireGraph, WireNode},
    schema::{NODES_LABEL, POSITION_LABEL},
};

use super::{bare_identifier, split_fields};
use crate::{
    error::{ErrorCode, Issue, IssueCollector},
    lexer,
    source::SourceLine,
    span::Span,
    tokens::{LinePart, PartValue},
};

/// Decode a line whose first part is the wire marker.
///
/// Returns `None` when the line is dropped: fewer than three parts, no
/// `ns:[...]` node list, or an invalid wire id. Malformed nodes, edges and
/// port references are reported and left out of the returned wire.
pub(crate) fn decode_wire(
    line: &SourceLine<'_>,
    parts: &[LinePart<'_>],
    issues: &mut IssueCollector,
) -> Option<WireGraph> {
    let [_, id, attributes @ ..] = parts else {
        issues.emit(too_few_parts(line));
        return None;
    };
    if attributes.is_empty() {
        issues.emit(too_few_parts(line));
        return None;
    }

    let Some(nodes_index) = attributes.iter().position(is_node_list) else {
        issues.emit(
            line.issue(
                ErrorCode::E101,
                "invalid wire line: missing node list `ns:[...]`",
            )
            .with_help("expected `W <id> ns:[<x>,<y>|...]`"),
        );
        return None;
    };

    let id = bare_identifier(line, id, "wire id", issues)?;

    for (index, part) in attributes.iter().enumerate() {
        if index == nodes_index {
            continue;
        }
        if is_node_list(part) {
            issues.emit(line.issue_at(
                part.span,
                ErrorCode::E207,
                "duplicate node list: only the first `ns:` is used",
            ));
        } else {
            issues.emit(
                line.issue_at(
                    part.span,
                    ErrorCode::E201,
                    format!("invalid wire line: unknown part `{part}`"),
                )
                .with_help("wire lines only take an `ns:[...]` node list"),
            );
        }
    }

    let nodes = &attributes[nodes_index];
    let mut wire = WireGraph::new(id);
    decode_nodes(line, nodes.value.as_str(), nodes.value_span.start(), &mut wire, issues);

    debug!(id, nodes = wire.len(); "Decoded wire");
    Some(wire)
}

fn too_few_parts(line: &SourceLine<'_>) -> Issue {
    line.issue(
        ErrorCode::E101,
        "invalid wire line: must have at least 3 space-separated parts",
    )
    .with_help("expected `W <id> ns:[<x>,<y>|...]`")
}

fn is_node_list(part: &LinePart<'_>) -> bool {
    part.has_label(NODES_LABEL) && part.value.is_list()
}

/// Decode the interior of a node list into `wire`.
///
/// An empty interior is an empty wire.
fn decode_nodes(
    line: &SourceLine<'_>,
    interior: &str,
    start: usize,
    wire: &mut WireGraph,
    issues: &mut IssueCollector,
) {
    if interior.trim().is_empty() {
        return;
    }

    for (descriptor, span) in split_fields(interior, start, '|') {
        let Some(node) = decode_node(line, descriptor, span, wire.len(), issues) else {
            continue;
        };

        if let Err(err) = wire.push_node(node) {
            issues.emit(line.issue_at(
                span,
                ErrorCode::E203,
                format!("invalid wire node: {err}"),
            ));
        }
    }
}

/// Decode one node descriptor for the node that will get index `index`.
fn decode_node(
    line: &SourceLine<'_>,
    descriptor: &str,
    span: Span,
    index: usize,
    issues: &mut IssueCollector,
) -> Option<WireNode> {
    let parts = lexer::tokenize_at(descriptor, span.start());
    trace!(index, parts = parts.len(); "Decoding wire node");

    let Some((first, rest)) = parts.split_first() else {
        issues.emit(
            line.issue_at(span, ErrorCode::E203, "invalid wire node: empty node")
                .with_help("nodes are written `<x>,<y>` and separated by `|`"),
        );
        return None;
    };

    let Some(coordinates) = first.bare_atom() else {
        issues.emit(line.issue_at(
            first.span,
            ErrorCode::E203,
            format!("invalid wire node: expected `<x>,<y>`, found `{first}`"),
        ));
        return None;
    };

    let fields: Vec<_> = split_fields(coordinates, first.span.start(), ',').collect();
    let (pos, edge_fields) = match fields.as_slice() {
        [(x, _), (y, _), edges @ ..] => match (lexer::parse_number(x), lexer::parse_number(y)) {
            (Some(x), Some(y)) => (Point::new(x, y), edges),
            _ => {
                issues.emit(line.issue_at(
                    first.span,
                    ErrorCode::E203,
                    "invalid wire node: must have 2 numbers",
                ));
                return None;
            }
        },
        _ => {
            issues.emit(line.issue_at(
                first.span,
                ErrorCode::E203,
                "invalid wire node: must have at least 2 parts",
            ));
            return None;
        }
    };

    let mut edges = Vec::with_capacity(edge_fields.len());
    for &(text, edge_span) in edge_fields {
        let Some(edge) = lexer::parse_index(text) else {
            issues.emit(
                line.issue_at(
                    edge_span,
                    ErrorCode::E204,
                    format!("invalid back-edge `{text}`: must be a node index"),
                )
                .with_help("back-edges are non-negative integers"),
            );
            continue;
        };

        if edge >= index {
            let help = match index {
                0 => "the first node of a wire cannot have back-edges".to_string(),
                1 => "node 1 can only connect to node 0".to_string(),
                _ => format!("node {index} can only connect to nodes 0 to {}", index - 1),
            };
            issues.emit(
                line.issue_at(
                    edge_span,
                    ErrorCode::E205,
                    format!("back-edge {edge} of node {index} must point to an earlier node"),
                )
                .with_help(help),
            );
            continue;
        }

        edges.push(edge);
    }

    let mut port = PortRef::None;
    let mut saw_port = false;

    for part in rest {
        if !part.has_label(POSITION_LABEL) {
            issues.emit(
                line.issue_at(
                    part.span,
                    ErrorCode::E201,
                    format!("invalid wire node: unknown part `{part}`"),
                )
                .with_help("a node only takes a `p:<component>/<port>` reference"),
            );
            continue;
        }

        if saw_port {
            issues.emit(line.issue_at(
                part.span,
                ErrorCode::E207,
                "duplicate port reference: only the first `p:` is used",
            ));
            continue;
        }
        saw_port = true;

        match decode_port(part) {
            Some(reference) => port = reference,
            None => issues.emit(
                line.issue_at(
                    part.span,
                    ErrorCode::E206,
                    "invalid port reference: `p:` must be `<component>/<port>`",
                )
                .with_help("both ids must be plain words, e.g. `p:alu/rhs`"),
            ),
        }
    }

    Some(WireNode::new(pos).with_edges(edges).with_port(port))
}

fn decode_port(part: &LinePart<'_>) -> Option<PortRef> {
    let PartValue::Atom(value) = part.value else {
        return None;
    };

    let (component_id, port_id) = value.split_once('/')?;
    if identifier::validate(component_id).is_err() || identifier::validate(port_id).is_err() {
        return None;
    }

    Some(PortRef::component_port(component_id, port_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize_line, source};

    fn decode(text: &str) -> (Option<WireGraph>, Vec<Issue>) {
        let line = source::lines(text).next().unwrap();
        let parts = tokenize_line(line.content());
        let mut issues = IssueCollector::new();
        let wire = decode_wire(&line, &parts, &mut issues);
        (wire, issues.finish())
    }

    fn codes(issues: &[Issue]) -> Vec<ErrorCode> {
        issues.iter().map(Issue::code).collect()
    }

    #[test]
    fn test_valid_wire() {
        let (wire, issues) = decode("W 3 ns:[13,6 p:id/rhsImm|22,6,0]");
        assert!(issues.is_empty(), "{issues:?}");

        let wire = wire.unwrap();
        assert_eq!(wire.id(), "3");
        assert_eq!(wire.len(), 2);

        let first = wire.node(0).unwrap();
        assert_eq!(first.pos(), Point::new(13.0, 6.0));
        assert!(first.edges().is_empty());
        assert_eq!(first.port(), &PortRef::component_port("id", "rhsImm"));

        let second = wire.node(1).unwrap();
        assert_eq!(second.pos(), Point::new(22.0, 6.0));
        assert_eq!(second.edges(), &[0]);
        assert!(second.port().is_none());
    }

    #[test]
    fn test_multiple_back_edges() {
        let (wire, issues) = decode("W w ns:[0,0|1,0,0|1,1,1|0,1,2,0]");
        assert!(issues.is_empty());
        let wire = wire.unwrap();
        assert_eq!(wire.node(3).unwrap().edges(), &[2, 0]);
        assert_eq!(wire.edges().count(), 4);
    }

    #[test]
    fn test_empty_node_list() {
        let (wire, issues) = decode("W 1 ns:[]");
        assert!(issues.is_empty());
        assert!(wire.unwrap().is_empty());
    }

    #[test]
    fn test_too_few_parts() {
        for text in ["W", "W 1"] {
            let (wire, issues) = decode(text);
            assert!(wire.is_none());
            assert_eq!(codes(&issues), vec![ErrorCode::E101]);
        }
    }

    #[test]
    fn test_missing_node_list() {
        for text in ["W 1 nodes:[1,2]", "W 1 ns:1,2", "W 1 [1,2]"] {
            let (wire, issues) = decode(text);
            assert!(wire.is_none(), "{text}");
            assert_eq!(codes(&issues), vec![ErrorCode::E101], "{text}");
        }
    }

    #[test]
    fn test_invalid_wire_id() {
        let (wire, issues) = decode("W a/b ns:[1,2]");
        assert!(wire.is_none());
        assert_eq!(codes(&issues), vec![ErrorCode::E105]);
    }

    #[test]
    fn test_unknown_and_duplicate_parts() {
        let (wire, issues) = decode("W 1 color:red ns:[1,2] ns:[3,4]");
        assert_eq!(codes(&issues), vec![ErrorCode::E201, ErrorCode::E207]);

        let wire = wire.unwrap();
        assert_eq!(wire.len(), 1);
        assert_eq!(wire.node(0).unwrap().pos(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_bad_node_is_dropped() {
        let (wire, issues) = decode("W 1 ns:[1,2|x,3|5|4,4,0]");
        assert_eq!(codes(&issues), vec![ErrorCode::E203, ErrorCode::E203]);

        let wire = wire.unwrap();
        assert_eq!(wire.len(), 2);
        assert_eq!(wire.node(1).unwrap().pos(), Point::new(4.0, 4.0));
        assert_eq!(wire.node(1).unwrap().edges(), &[0]);
    }

    #[test]
    fn test_empty_descriptor() {
        let (wire, issues) = decode("W 1 ns:[1,2||3,4,0]");
        assert_eq!(codes(&issues), vec![ErrorCode::E203]);
        assert_eq!(wire.unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_back_edge() {
        let (wire, issues) = decode("W 1 ns:[1,2|3,4,x,0,-1]");
        assert_eq!(codes(&issues), vec![ErrorCode::E204, ErrorCode::E204]);
        assert_eq!(wire.unwrap().node(1).unwrap().edges(), &[0]);
    }

    #[test]
    fn test_forward_back_edge() {
        let (wire, issues) = decode("W 3 ns:[13,6|22,6,4]");
        assert_eq!(codes(&issues), vec![ErrorCode::E205]);
        assert_eq!(issues[0].column(), Some(19));
        assert_eq!(issues[0].help(), Some("node 1 can only connect to node 0"));

        let wire = wire.unwrap();
        assert_eq!(wire.len(), 2);
        assert!(wire.node(1).unwrap().edges().is_empty());
    }

    #[test]
    fn test_self_edge_is_forward() {
        let (wire, issues) = decode("W 1 ns:[0,0,0]");
        assert_eq!(codes(&issues), vec![ErrorCode::E205]);
        assert!(wire.unwrap().node(0).unwrap().edges().is_empty());
    }

    #[test]
    fn test_invalid_port_reference() {
        for descriptor in ["p:alu", "p:a/b/c", "p:/rhs", "p:[a/b]"] {
            let text = format!("W 1 ns:[1,2 {descriptor}]");
            let (wire, issues) = decode(&text);
            assert_eq!(codes(&issues), vec![ErrorCode::E206], "{text}");
            assert!(wire.unwrap().node(0).unwrap().port().is_none());
        }
    }

    #[test]
    fn test_duplicate_port_reference() {
        let (wire, issues) = decode("W 1 ns:[1,2 p:a/x p:b/y]");
        assert_eq!(codes(&issues), vec![ErrorCode::E207]);
        assert_eq!(
            wire.unwrap().node(0).unwrap().port(),
            &PortRef::component_port("a", "x")
        );
    }

    #[test]
    fn test_unknown_node_part() {
        let (wire, issues) = decode("W 1 ns:[1,2 q:3]");
        assert_eq!(codes(&issues), vec![ErrorCode::E201]);
        assert_eq!(wire.unwrap().len(), 1);
    }
}
