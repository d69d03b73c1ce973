//! Conversion of validated wire-format documents into the semantic model.

use std::str::FromStr;

use log::{trace, warn};

use braid_core::semantic::{
    Composition, CompositionMetadata, Edge, EdgeVisual, Node, NodeVisual,
};

use crate::parser_types::{RawComposition, RawEdge, RawEdgeVisual, RawNode, RawNodeVisual};

/// Builds a [`Composition`] from a parsed document.
///
/// Node and edge order is preserved. An enumerated hint that does not
/// parse (only reachable in lenient mode) falls back to its default.
pub(crate) fn elaborate(raw: RawComposition) -> Composition {
    let nodes = raw.nodes.into_iter().map(elaborate_node).collect();
    let edges = raw.edges.into_iter().map(elaborate_edge).collect();

    let mut metadata = CompositionMetadata::default().with_extra(raw.metadata.extra);
    if let Some(name) = raw.metadata.name {
        metadata = metadata.with_name(name);
    }
    if let Some(category) = raw.metadata.category {
        metadata = metadata.with_category(category);
    }
    if let Some(description) = raw.metadata.description {
        metadata = metadata.with_description(description);
    }

    Composition::new(nodes, edges).with_metadata(metadata)
}

fn elaborate_node(raw: RawNode) -> Node {
    trace!(id = raw.id.as_str(); "Elaborating node");

    let mut node = Node::new(raw.id, raw.name)
        .with_properties(raw.properties)
        .with_metadata(raw.metadata);

    if let Some(input_type) = raw.input_type {
        node = node.with_input_type(input_type);
    }
    if let Some(output_type) = raw.output_type {
        node = node.with_output_type(output_type);
    }
    if let Some(visual) = raw.visual {
        node = node.with_visual(elaborate_node_visual(visual));
    }
    node
}

fn elaborate_node_visual(raw: RawNodeVisual) -> NodeVisual {
    let mut visual = NodeVisual::default();

    if let Some(color) = raw.color {
        visual = visual.with_color(color);
    }
    if let Some(shape) = raw.shape.as_deref().and_then(parse_or_default) {
        visual = visual.with_shape(shape);
    }
    if let Some(size) = raw.size.as_deref().and_then(parse_or_default) {
        visual = visual.with_size(size);
    }
    if let Some(badge) = raw.badge {
        visual = visual.with_badge(badge);
    }
    if let Some(badge_color) = raw.badge_color {
        visual = visual.with_badge_color(badge_color);
    }
    if let Some(opacity) = raw.opacity {
        visual = visual.with_opacity(opacity);
    }
    if let Some(glow) = raw.glow {
        visual = visual.with_glow(glow);
    }
    if raw.ring_colors.is_some() || raw.ring_weights.is_some() {
        visual = visual.with_ring(
            raw.ring_colors.unwrap_or_default(),
            raw.ring_weights.unwrap_or_default(),
        );
    }
    visual
}

fn elaborate_edge(raw: RawEdge) -> Edge {
    let mut edge = Edge::new(raw.source, raw.target).with_metadata(raw.metadata);

    if let Some(label) = raw.label {
        edge = edge.with_label(label);
    }
    if let Some(visual) = raw.visual {
        edge = edge.with_visual(elaborate_edge_visual(visual));
    }
    edge
}

fn elaborate_edge_visual(raw: RawEdgeVisual) -> EdgeVisual {
    let mut visual = EdgeVisual::default();

    if let Some(color) = raw.color {
        visual = visual.with_color(color);
    }
    if let Some(style) = raw.style.as_deref().and_then(parse_or_default) {
        visual = visual.with_style(style);
    }
    if let Some(weight) = raw.weight {
        visual = visual.with_weight(weight);
    }
    if let Some(opacity) = raw.opacity {
        visual = visual.with_opacity(opacity);
    }
    if let Some(show_label) = raw.show_label {
        visual = visual.with_show_label(show_label);
    }
    visual
}

/// Parses an enumerated hint, leaving it unset (so the default applies) when
/// the value is unknown.
fn parse_or_default<T>(value: &str) -> Option<T>
where
    T: FromStr<Err = String>,
{
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(reason) => {
            warn!(value; "{reason}, using the default");
            None
        }
    }
}
