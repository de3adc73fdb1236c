//! Property tests for import and export.

use proptest::prelude::*;

use wireschema_core::{
    geometry::Point,
    layout::{Component, Layout, PortRef, WireGraph, WireNode},
};
use wireschema_parser::{ImportOptions, export, import};

// ===================
// Strategies
// ===================

/// Identifiers made of characters that never clash with the grammar.
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.-]{1,8}"
}

/// Coordinates with up to three decimal places.
fn coordinate_strategy() -> impl Strategy<Value = f64> {
    (-100_000i32..100_000, 0i32..4).prop_map(|(value, scale)| f64::from(value) / 10f64.powi(scale))
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coordinate_strategy(), coordinate_strategy()).prop_map(|(x, y)| Point::new(x, y))
}

fn port_strategy() -> impl Strategy<Value = PortRef> {
    prop_oneof![
        Just(PortRef::None),
        (identifier_strategy(), identifier_strategy())
            .prop_map(|(component, port)| PortRef::component_port(component, port)),
    ]
}

/// A node description; raw edge values are folded into range when the
/// node's index is known.
type NodeSeed = (Point, Vec<usize>, PortRef);

fn node_seed_strategy() -> impl Strategy<Value = NodeSeed> {
    (
        point_strategy(),
        prop::collection::vec(0usize..64, 0..4),
        port_strategy(),
    )
}

fn wire_strategy(id: String) -> impl Strategy<Value = WireGraph> {
    prop::collection::vec(node_seed_strategy(), 0..8).prop_map(move |seeds| {
        let mut wire = WireGraph::new(id.clone());
        for (index, (pos, raw_edges, port)) in seeds.into_iter().enumerate() {
            let edges = raw_edges
                .into_iter()
                .filter(|_| index > 0)
                .map(|edge| edge % index.max(1));
            let node = WireNode::new(pos).with_edges(edges).with_port(port);
            if wire.push_node(node).is_err() {
                unreachable!("generated edges always point backwards");
            }
        }
        wire
    })
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    let components = prop::collection::btree_map(
        identifier_strategy(),
        (identifier_strategy(), point_strategy()),
        0..6,
    );
    let wire_ids = prop::collection::btree_set(identifier_strategy(), 0..4);

    (components, wire_ids)
        .prop_flat_map(|(components, wire_ids)| {
            let wires: Vec<_> = wire_ids.into_iter().map(wire_strategy).collect();
            (Just(components), wires)
        })
        .prop_map(|(components, wires)| {
            let mut layout = Layout::new();
            for (id, (def_id, pos)) in components {
                if layout.add_component(Component::new(id, def_id, pos)).is_err() {
                    unreachable!("generated component ids are unique and valid");
                }
            }
            for wire in wires {
                if layout.add_wire(wire).is_err() {
                    unreachable!("generated wire ids are unique and valid");
                }
            }
            layout
        })
}

/// Node lists with arbitrary, possibly invalid, back-edges.
fn raw_node_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            -50i32..50,
            -50i32..50,
            prop::collection::vec(0u32..12, 0..4),
        ),
        0..10,
    )
    .prop_map(|nodes| {
        nodes
            .into_iter()
            .map(|(x, y, edges)| {
                let mut descriptor = format!("{x},{y}");
                for edge in edges {
                    descriptor.push_str(&format!(",{edge}"));
                }
                descriptor
            })
            .collect::<Vec<_>>()
            .join("|")
    })
}

// ===================
// Property Test Functions
// ===================

/// An exported layout imports cleanly and exports to the same text.
fn check_round_trip(layout: &Layout) -> Result<(), TestCaseError> {
    let text = export(layout);
    let outcome = import(&text, ImportOptions::default());

    prop_assert!(
        outcome.is_clean(),
        "Export of a valid layout did not import cleanly:\n{text}\n{:?}",
        outcome.issues()
    );
    prop_assert_eq!(export(outcome.layout()), text);
    Ok(())
}

fn check_deterministic(layout: &Layout) -> Result<(), TestCaseError> {
    prop_assert_eq!(export(layout), export(layout));
    Ok(())
}

/// Whatever the input, every imported back-edge points to an earlier node.
fn check_back_edges_point_backwards(nodes: &str) -> Result<(), TestCaseError> {
    let source = format!("#wire-schema 1\nW w ns:[{nodes}]\n");
    let outcome = import(&source, ImportOptions::default());

    let wire = outcome.layout().wire("w");
    prop_assert!(wire.is_some(), "wire line was dropped: {source}");
    if let Some(wire) = wire {
        for (node, edge) in wire.edges() {
            prop_assert!(edge < node, "edge {edge} of node {node} in {source}");
        }
    }
    Ok(())
}

/// Arbitrary body lines never abort an import that has a valid header.
fn check_body_never_aborts(body: &str) -> Result<(), TestCaseError> {
    let source = format!("#wire-schema 1\n{body}");
    let outcome = import(&source, ImportOptions::default());

    prop_assert_eq!(outcome.state(), wireschema_parser::ImportState::Done);
    Ok(())
}

// ===================
// Proptest Wrappers
// ===================

proptest! {
    #[test]
    fn export_import_round_trips(layout in layout_strategy()) {
        check_round_trip(&layout)?;
    }

    #[test]
    fn export_is_deterministic(layout in layout_strategy()) {
        check_deterministic(&layout)?;
    }

    #[test]
    fn imported_back_edges_point_backwards(nodes in raw_node_list_strategy()) {
        check_back_edges_point_backwards(&nodes)?;
    }

    #[test]
    fn arbitrary_body_never_aborts(body in "[ -~\n\t]{0,200}") {
        check_body_never_aborts(&body)?;
    }
}
