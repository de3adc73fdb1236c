//! The circuit layout model: placed components and routed wire graphs.
//!
//! # Overview
//!
//! - [`Layout`] - Ordered, id-keyed collections of components and wires
//! - [`Component`] - A placed instance of a component type
//! - [`WireGraph`] - One wire's route as an append-only node sequence
//! - [`WireNode`] - A routing point with back-edges to earlier nodes
//! - [`PortRef`] - Optional attachment of a node to a component port
//!
//! # Back-edges
//!
//! A node only ever stores connections to nodes that come before it in the
//! same wire. For the node at index `j` every back-edge `e` satisfies
//! `e < j`, so the topology is acyclic and each connection is stated once.
//! [`WireGraph::push_node`] enforces this.
//!
//! ```
//! # use wireschema_core::geometry::Point;
//! # use wireschema_core::layout::{PortRef, WireGraph, WireNode};
//! let mut wire = WireGraph::new("3");
//! wire.push_node(WireNode::new(Point::new(13.0, 6.0))
//!     .with_port(PortRef::component_port("id", "rhsImm")))?;
//! wire.push_node(WireNode::new(Point::new(22.0, 6.0)).with_edges([0]))?;
//!
//! assert_eq!(wire.edges().collect::<Vec<_>>(), vec![(1, 0)]);
//! # Ok::<(), wireschema_core::error::LayoutError>(())
//! ```

use indexmap::IndexMap;
use log::trace;

use crate::{
    error::LayoutError,
    geometry::{Point, Size},
    identifier,
};

/// A complete circuit layout.
///
/// Components and wires keep their insertion order, which is also the order
/// in which they are exported. Ids are unique within each collection.
///
/// The two id counters belong to the editor that allocates new ids; import
/// and export leave them untouched.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    components: IndexMap<String, Component>,
    wires: IndexMap<String, WireGraph>,
    next_component_id: u64,
    next_wire_id: u64,
}

impl Layout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the layout holds no components and no wires.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.wires.is_empty()
    }

    /// Iterates over components in stored order.
    pub fn components(&self) -> impl ExactSizeIterator<Item = &Component> {
        self.components.values()
    }

    /// Iterates over wires in stored order.
    pub fn wires(&self) -> impl ExactSizeIterator<Item = &WireGraph> {
        self.wires.values()
    }

    /// Looks up a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    /// Looks up a wire by id.
    pub fn wire(&self, id: &str) -> Option<&WireGraph> {
        self.wires.get(id)
    }

    /// Appends a component, returning its index.
    ///
    /// # Errors
    ///
    /// Fails if the id or type id is not a valid identifier, the position is
    /// not finite, or a component with the same id already exists.
    pub fn add_component(&mut self, component: Component) -> Result<usize, LayoutError> {
        identifier::validate(component.id())?;
        identifier::validate(component.def_id())?;

        if !component.pos().is_finite() {
            return Err(LayoutError::NonFinite {
                subject: format!("component `{}`", component.id()),
            });
        }

        if self.components.contains_key(component.id()) {
            return Err(LayoutError::DuplicateComponent(component.id().to_string()));
        }

        trace!(id = component.id(); "Adding component");
        let (index, _) = self
            .components
            .insert_full(component.id().to_string(), component);
        Ok(index)
    }

    /// Appends a wire, returning its index.
    ///
    /// # Errors
    ///
    /// Fails if the id is not a valid identifier or a wire with the same id
    /// already exists.
    pub fn add_wire(&mut self, wire: WireGraph) -> Result<usize, LayoutError> {
        identifier::validate(wire.id())?;

        if self.wires.contains_key(wire.id()) {
            return Err(LayoutError::DuplicateWire(wire.id().to_string()));
        }

        trace!(id = wire.id(), nodes = wire.len(); "Adding wire");
        let (index, _) = self.wires.insert_full(wire.id().to_string(), wire);
        Ok(index)
    }

    /// Returns the next component id the editor will hand out.
    pub fn next_component_id(&self) -> u64 {
        self.next_component_id
    }

    /// Returns the next wire id the editor will hand out.
    pub fn next_wire_id(&self) -> u64 {
        self.next_wire_id
    }

    /// Sets both id counters.
    pub fn with_counters(mut self, next_component_id: u64, next_wire_id: u64) -> Self {
        self.next_component_id = next_component_id;
        self.next_wire_id = next_wire_id;
        self
    }
}

/// A port exposed by a placed component, relative to its position.
///
/// Ports are resolved from the component catalog after import.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentPort {
    id: String,
    offset: Point,
}

impl ComponentPort {
    pub fn new(id: impl Into<String>, offset: Point) -> Self {
        Self {
            id: id.into(),
            offset,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn offset(&self) -> Point {
        self.offset
    }
}

/// A placed component.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: String,
    def_id: String,
    pos: Point,
    size: Size,
    ports: Vec<ComponentPort>,
}

impl Component {
    /// Creates a component with zero size and no ports.
    ///
    /// # Arguments
    ///
    /// * `id` - Unique id within the layout
    /// * `def_id` - Component type, resolved by an external catalog
    /// * `pos` - Placement position
    pub fn new(id: impl Into<String>, def_id: impl Into<String>, pos: Point) -> Self {
        Self {
            id: id.into(),
            def_id: def_id.into(),
            pos,
            size: Size::default(),
            ports: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn def_id(&self) -> &str {
        &self.def_id
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn ports(&self) -> &[ComponentPort] {
        &self.ports
    }

    /// Sets the resolved size.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the resolved port list.
    pub fn with_ports(mut self, ports: Vec<ComponentPort>) -> Self {
        self.ports = ports;
        self
    }
}

/// Attachment of a wire node to something outside the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PortRef {
    /// The node is a free routing point.
    #[default]
    None,
    /// The node terminates on a named port of a placed component.
    ComponentPort {
        component_id: String,
        port_id: String,
    },
}

impl PortRef {
    /// Creates a reference to `port_id` on component `component_id`.
    pub fn component_port(component_id: impl Into<String>, port_id: impl Into<String>) -> Self {
        PortRef::ComponentPort {
            component_id: component_id.into(),
            port_id: port_id.into(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PortRef::None)
    }
}

/// A routing point of a wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireNode {
    pos: Point,
    edges: Vec<usize>,
    port: PortRef,
}

impl WireNode {
    /// Creates an unconnected node at `pos`.
    pub fn new(pos: Point) -> Self {
        Self {
            pos,
            edges: Vec::new(),
            port: PortRef::None,
        }
    }

    /// Sets the node's back-edges, in the order they should be written.
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = usize>) -> Self {
        self.edges = edges.into_iter().collect();
        self
    }

    /// Sets the node's port reference.
    pub fn with_port(mut self, port: PortRef) -> Self {
        self.port = port;
        self
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn port(&self) -> &PortRef {
        &self.port
    }
}

/// One wire's route: an ordered node sequence where each node may connect
/// back to earlier nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct WireGraph {
    id: String,
    nodes: Vec<WireNode>,
}

impl WireGraph {
    /// Creates a wire with no nodes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nodes: Vec::new(),
        }
    }

    /// Builds a wire from a node sequence, checking every node.
    ///
    /// # Errors
    ///
    /// Returns the first error [`push_node`](Self::push_node) would report.
    pub fn from_nodes(
        id: impl Into<String>,
        nodes: impl IntoIterator<Item = WireNode>,
    ) -> Result<Self, LayoutError> {
        let mut wire = Self::new(id);
        for node in nodes {
            wire.push_node(node)?;
        }
        Ok(wire)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn nodes(&self) -> &[WireNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&WireNode> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node and returns its index.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NonFinite`] if the position is NaN or infinite.
    /// - [`LayoutError::ForwardEdge`] if a back-edge does not point to an
    ///   earlier node.
    /// - An identifier error if the node's port reference names an invalid id.
    pub fn push_node(&mut self, node: WireNode) -> Result<usize, LayoutError> {
        let index = self.nodes.len();

        if !node.pos.is_finite() {
            return Err(LayoutError::NonFinite {
                subject: format!("node {index}"),
            });
        }

        if let Some(&edge) = node.edges.iter().find(|&&edge| edge >= index) {
            return Err(LayoutError::ForwardEdge { node: index, edge });
        }

        if let PortRef::ComponentPort {
            component_id,
            port_id,
        } = &node.port
        {
            identifier::validate(component_id)?;
            identifier::validate(port_id)?;
        }

        self.nodes.push(node);
        Ok(index)
    }

    /// Iterates over every connection as `(node, earlier_node)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(index, node)| node.edges.iter().map(move |&edge| (index, edge)))
    }
}
