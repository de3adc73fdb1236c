//! Layout to wire-schema text.
//!
//! The exporter is a set of [`Display`](fmt::Display) adapters over borrowed
//! layout records, so a layout can be written straight into any
//! [`fmt::Write`] or [`std::io::Write`] sink as well as into a `String`.

use std::fmt::{self, Display, Write as _};

use log::{debug, info};

use wireschema_core::{
    layout::{Component, Layout, PortRef, WireGraph, WireNode},
    schema::{
        COMPONENT_MARKER, NODES_LABEL, POSITION_LABEL, SCHEMA_MAGIC, SCHEMA_VERSION, WIRE_MARKER,
    },
};

/// Serialize `layout` to wire-schema text.
///
/// The output starts with the header line, then one line per component and
/// one line per wire, each in stored order. Every line ends with `\n`.
/// Exporting the same layout always yields the same text.
///
/// # Example
///
/// ```
/// # use wireschema_core::{geometry::Point, layout::{Component, Layout}};
/// let mut layout = Layout::new();
/// layout.add_component(Component::new("ram", "0", Point::new(-12.0, -23.0)))?;
///
/// assert_eq!(
///     wireschema_parser::export(&layout),
///     "#wire-schema 1\nC ram 0 p:-12,-23\n"
/// );
/// # Ok::<(), wireschema_core::error::LayoutError>(())
/// ```
pub fn export(layout: &Layout) -> String {
    info!(
        components = layout.components().len(),
        wires = layout.wires().len();
        "Exporting layout"
    );

    let text = LayoutText(layout).to_string();

    debug!(bytes = text.len(); "Export complete");
    text
}

/// The whole document, header included.
pub struct LayoutText<'a>(pub &'a Layout);

impl Display for LayoutText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SCHEMA_MAGIC} {SCHEMA_VERSION}")?;
        for component in self.0.components() {
            writeln!(f, "{}", ComponentLine(component))?;
        }
        for wire in self.0.wires() {
            writeln!(f, "{}", WireLine(wire))?;
        }
        Ok(())
    }
}

/// A component line without its terminator: `C <id> <defId> p:<x>,<y>`.
pub struct ComponentLine<'a>(pub &'a Component);

impl Display for ComponentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let component = self.0;
        let pos = component.pos();
        write!(
            f,
            "{COMPONENT_MARKER} {} {} {POSITION_LABEL}:{},{}",
            component.id(),
            component.def_id(),
            Number(pos.x()),
            Number(pos.y()),
        )
    }
}

/// A wire line without its terminator: `W <id> ns:[<node>|...]`.
pub struct WireLine<'a>(pub &'a WireGraph);

impl Display for WireLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wire = self.0;
        write!(f, "{WIRE_MARKER} {} {NODES_LABEL}:[", wire.id())?;
        for (index, node) in wire.nodes().iter().enumerate() {
            if index > 0 {
                f.write_char('|')?;
            }
            write!(f, "{}", NodeText { node, index })?;
        }
        f.write_char(']')
    }
}

/// One node descriptor.
///
/// Back-edges that do not point to an earlier node are left out, so the
/// output always reads back cleanly.
pub struct NodeText<'a> {
    pub node: &'a WireNode,
    pub index: usize,
}

impl Display for NodeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.node.pos();
        write!(f, "{},{}", Number(pos.x()), Number(pos.y()))?;

        for edge in self.node.edges().iter().filter(|&&edge| edge < self.index) {
            write!(f, ",{edge}")?;
        }

        match self.node.port() {
            PortRef::None => Ok(()),
            PortRef::ComponentPort {
                component_id,
                port_id,
            } => write!(f, " {POSITION_LABEL}:{component_id}/{port_id}"),
        }
    }
}

/// A coordinate.
///
/// Integral values have no decimal point; others use the shortest decimal
/// that reads back to the same value. `f64`'s `Display` never switches to
/// exponent notation. Expects a finite value; the layout model never stores
/// anything else.
#[derive(Debug, Clone, Copy)]
pub struct Number(pub f64);

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
