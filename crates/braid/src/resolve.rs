//! Resolution of visual hints into concrete drawing values.
//!
//! Every optional hint on a node or edge is resolved exactly once, here,
//! against the [`Palette`]. A missing hint and an explicit default resolve to
//! the same style, so they render identically.

use log::warn;
use serde_json::Value;

use braid_core::{
    color::Color,
    draw::{StrokeCap, StrokeDefinition, StrokeStyle},
    semantic::{Edge, EdgeVisual, Node, NodeShape, NodeSize, NodeVisual, Properties},
};

use crate::config::Palette;

const DEFAULT_NODE_OPACITY: f32 = 1.0;
const DEFAULT_WIRE_OPACITY: f32 = 0.8;
const DEFAULT_WIRE_WEIGHT: f32 = 1.0;
const BASE_WIRE_WIDTH: f32 = 2.0;
const GLOW_WEIGHT_THRESHOLD: f32 = 1.2;

const DEFAULT_RING_WIDTH: f32 = 3.0;
/// Ring arcs beyond this count are not drawn.
pub const MAX_RING_ARCS: usize = 8;

/// Shape of `node`, circle when unset.
pub fn node_shape(node: &Node) -> NodeShape {
    node.visual().and_then(NodeVisual::shape).unwrap_or_default()
}

/// Size of `node`, medium when unset.
pub fn node_size(node: &Node) -> NodeSize {
    node.visual().and_then(NodeVisual::size).unwrap_or_default()
}

/// One colored arc of a node ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingArc {
    pub color: Color,
    pub width: f32,
}

/// Fully resolved node style.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeStyle<'a> {
    pub shape: NodeShape,
    pub color: Color,
    pub opacity: f32,
    pub glow: bool,
    pub badge: Option<&'a str>,
    pub badge_color: Color,
    pub rings: Vec<RingArc>,
    /// `properties.total_tokens` when it is a positive number.
    pub tokens: Option<String>,
}

impl<'a> NodeStyle<'a> {
    pub fn resolve(node: &'a Node, palette: &Palette) -> Self {
        let default_visual = NodeVisual::default();
        let visual = node.visual().unwrap_or(&default_visual);

        let color = parse_color(visual.color(), node.id(), palette.node());
        let badge_color = parse_color(visual.badge_color(), node.id(), color);

        let rings = visual
            .ring_colors()
            .iter()
            .take(MAX_RING_ARCS)
            .enumerate()
            .map(|(i, ring_color)| RingArc {
                color: parse_color(Some(ring_color), node.id(), color),
                width: visual
                    .ring_weights()
                    .get(i)
                    .copied()
                    .unwrap_or(DEFAULT_RING_WIDTH),
            })
            .collect();

        Self {
            shape: visual.shape().unwrap_or_default(),
            color,
            opacity: visual
                .opacity()
                .unwrap_or(DEFAULT_NODE_OPACITY)
                .clamp(0.0, 1.0),
            glow: visual.glow().unwrap_or(false),
            badge: node.visual().and_then(NodeVisual::badge),
            badge_color,
            rings,
            tokens: positive_number(node.properties(), "total_tokens"),
        }
    }
}

/// Fully resolved connector style.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorStyle {
    pub stroke: StrokeDefinition,
    pub opacity: f32,
    pub weight: f32,
    pub show_label: bool,
    /// Width of the low-opacity underlay, when the connector is emphasized.
    pub glow_width: Option<f32>,
    /// `metadata.tokens` when it is a positive number.
    pub tokens: Option<String>,
}

impl ConnectorStyle {
    /// Resolves the style of `edge`.
    ///
    /// The color falls back to the source node's own color, then to the
    /// palette wire color.
    pub fn resolve(edge: &Edge, source: Option<&Node>, palette: &Palette) -> Self {
        let default_visual = EdgeVisual::default();
        let visual = edge.visual().unwrap_or(&default_visual);

        let inherited = source
            .and_then(Node::visual)
            .and_then(NodeVisual::color)
            .and_then(|color| Color::new(color).ok());
        let fallback = inherited.unwrap_or(palette.wire());
        let color = parse_color(visual.color(), edge.source(), fallback);

        let weight = visual.weight().unwrap_or(DEFAULT_WIRE_WEIGHT).max(0.0);
        let thickness = BASE_WIRE_WIDTH * weight;
        let tokens = positive_number(edge.metadata(), "tokens");
        let glow = weight > GLOW_WEIGHT_THRESHOLD || tokens.is_some();

        let stroke = StrokeDefinition::new(color, thickness)
            .with_style(StrokeStyle::from(visual.style().unwrap_or_default()))
            .with_cap(StrokeCap::Round);

        Self {
            stroke,
            opacity: visual
                .opacity()
                .unwrap_or(DEFAULT_WIRE_OPACITY)
                .clamp(0.0, 1.0),
            weight,
            show_label: visual.show_label().unwrap_or(true),
            glow_width: glow.then_some(thickness + 4.0),
            tokens,
        }
    }
}

fn parse_color(value: Option<&str>, owner: &str, fallback: Color) -> Color {
    let Some(value) = value else {
        return fallback;
    };
    Color::new(value).unwrap_or_else(|err| {
        warn!(owner, err:%; "Unparseable color, using default");
        fallback
    })
}

fn positive_number(map: &Properties, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::Number(n) if n.as_f64().is_some_and(|v| v > 0.0) => Some(n.to_string()),
        _ => None,
    }
}
