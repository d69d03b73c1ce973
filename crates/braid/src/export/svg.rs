//! SVG renderer.
//!
//! [`Svg`] draws a [`Scene`] into a [`LayeredOutput`]: background and frame
//! first, then connectors, then nodes. Shared definitions (filters, arrow
//! markers and gradients) are collected up front, one per distinct color.

mod defs;
mod frame;
mod node;
mod wire;

use indexmap::IndexSet;
use log::{debug, info};
use svg::{Document, node::element as svg_element};

use braid_core::{color::Color, draw::LayeredOutput, geometry::Point};

use super::Scene;
use crate::{
    config::Palette,
    resolve::{ConnectorStyle, NodeStyle},
};

/// SVG renderer configured with a palette and a font family.
#[derive(Debug, Clone)]
pub struct Svg {
    palette: Palette,
    font_family: String,
}

impl Svg {
    pub fn new(palette: Palette, font_family: impl Into<String>) -> Self {
        Self {
            palette,
            font_family: font_family.into(),
        }
    }

    /// Renders `scene` to an SVG document string.
    pub fn render(&self, scene: &Scene<'_, '_>) -> String {
        let canvas = scene.layout.canvas();

        let node_styles: Vec<_> = scene
            .graph
            .node_indices()
            .map(|idx| {
                let node = scene.graph.node(idx);
                (node, NodeStyle::resolve(node, &self.palette))
            })
            .collect();

        let connector_styles: Vec<_> = scene
            .routing
            .connectors()
            .iter()
            .map(|connector| {
                let edge = connector.edge();
                let source = scene
                    .graph
                    .node_index(edge.source())
                    .map(|idx| scene.graph.node(idx));
                (connector, ConnectorStyle::resolve(edge, source, &self.palette))
            })
            .collect();

        let node_colors: IndexSet<Color> = node_styles.iter().map(|(_, style)| style.color).collect();
        let wire_colors: IndexSet<Color> = connector_styles
            .iter()
            .map(|(_, style)| style.stroke.color())
            .collect();
        debug!(
            gradients = node_colors.len(),
            markers = wire_colors.len();
            "Shared definitions collected"
        );

        let mut output = LayeredOutput::new();
        output.merge(self.render_background(canvas));
        output.merge(self.render_header(scene.composition.metadata(), canvas));

        for (connector, style) in &connector_styles {
            output.merge(self.render_connector(connector, style));
        }

        for (node, style) in &node_styles {
            match scene.layout.position(node.id()) {
                Some(position) => output.merge(self.render_node(node, position, style)),
                None => debug!(id = node.id(); "Node has no position"),
            }
        }

        output.merge(self.render_footer(scene.metadata, canvas));

        let mut doc = Document::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", canvas.width(), canvas.height()),
            )
            .set("font-family", self.font_family.as_str())
            .add(self.render_definitions(&node_colors, &wire_colors));

        for svg_node in output.render() {
            doc = doc.add(svg_node);
        }

        info!(width = canvas.width(), height = canvas.height(); "SVG rendered");
        doc.to_string()
    }
}

/// Centered text at `position`.
fn centered_text(content: &str, position: Point) -> svg_element::Text {
    plain_text(content, position).set("text-anchor", "middle")
}

/// Start-anchored text at `position`.
fn plain_text(content: &str, position: Point) -> svg_element::Text {
    svg_element::Text::new(content)
        .set("x", position.x())
        .set("y", position.y())
}

/// Fill reference to the shared gradient of `color`.
fn gradient_ref(color: Color) -> String {
    format!("url(#grad-{})", color.to_id_safe_string())
}

/// Marker reference to the shared arrow head of `color`.
fn marker_ref(color: Color) -> String {
    format!("url(#arrow-{})", color.to_id_safe_string())
}
