//! Semantic model for compositions.
//!
//! A [`Composition`] is the input of the layout engine: an ordered list of
//! [`Node`]s, an ordered list of directed [`Edge`]s, and optional
//! [`CompositionMetadata`]. Every field beyond node `id`/`name` and edge
//! `source`/`target` is optional.
//!
//! Visual hints ([`NodeVisual`], [`EdgeVisual`]) keep absent fields as `None`.
//! Enumerated hints are tagged variants ([`NodeShape`], [`NodeSize`],
//! [`WireStyle`]); resolution to concrete drawing values happens once per node
//! or edge in the renderer, never here.
//!
//! # Example
//!
//! ```
//! use braid_core::semantic::{Composition, Edge, Node, NodeShape, NodeVisual};
//!
//! let composition = Composition::new(
//!     vec![
//!         Node::new("parse", "Parse"),
//!         Node::new("merge", "Merge")
//!             .with_visual(NodeVisual::default().with_shape(NodeShape::Diamond)),
//!     ],
//!     vec![Edge::new("parse", "merge").with_label("Structured")],
//! );
//!
//! assert_eq!(composition.nodes().len(), 2);
//! assert_eq!(composition.edges()[0].label(), Some("Structured"));
//! ```

use std::{fmt, str::FromStr};

/// Opaque key-value payload attached to nodes, edges and compositions.
///
/// Insertion order is preserved so that output derived from it stays
/// deterministic.
pub type Properties = serde_json::Map<String, serde_json::Value>;

/// Shape of a node body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeShape {
    #[default]
    Circle,
    /// Rounded rectangle, wider than tall.
    Pill,
    /// Square rotated by 45 degrees.
    Diamond,
    Square,
    /// Small fixed-size marker, e.g. a wire endpoint.
    Point,
}

impl NodeShape {
    /// All accepted shape names, in declaration order.
    pub const NAMES: [&'static str; 5] = ["circle", "pill", "diamond", "square", "point"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Pill => "pill",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::Point => "point",
        }
    }
}

impl FromStr for NodeShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "pill" => Ok(Self::Pill),
            "diamond" => Ok(Self::Diamond),
            "square" => Ok(Self::Square),
            "point" => Ok(Self::Point),
            _ => Err(format!(
                "invalid node shape `{s}`, valid values: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size class of a node, mapped to a base radius by the positioner.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl NodeSize {
    /// All accepted size names, in declaration order.
    pub const NAMES: [&'static str; 3] = ["small", "medium", "large"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl FromStr for NodeSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(format!(
                "invalid node size `{s}`, valid values: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for NodeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line pattern of a connector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl WireStyle {
    /// All accepted style names, in declaration order.
    pub const NAMES: [&'static str; 3] = ["solid", "dashed", "dotted"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        }
    }
}

impl FromStr for WireStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid wire style `{s}`, valid values: {}",
                Self::NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for WireStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional rendering hints for a node.
///
/// Colors are kept as the CSS strings supplied by the caller and parsed when
/// the renderer resolves the hints.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeVisual {
    color: Option<String>,
    shape: Option<NodeShape>,
    size: Option<NodeSize>,
    badge: Option<String>,
    badge_color: Option<String>,
    opacity: Option<f32>,
    glow: Option<bool>,
    ring_colors: Vec<String>,
    ring_weights: Vec<f32>,
}

impl NodeVisual {
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn shape(&self) -> Option<NodeShape> {
        self.shape
    }

    pub fn size(&self) -> Option<NodeSize> {
        self.size
    }

    pub fn badge(&self) -> Option<&str> {
        self.badge.as_deref()
    }

    pub fn badge_color(&self) -> Option<&str> {
        self.badge_color.as_deref()
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    pub fn glow(&self) -> Option<bool> {
        self.glow
    }

    /// Colors of the ring arcs drawn around the node, one arc per entry.
    pub fn ring_colors(&self) -> &[String] {
        &self.ring_colors
    }

    /// Stroke widths of the ring arcs; may be shorter or longer than
    /// [`ring_colors`](Self::ring_colors).
    pub fn ring_weights(&self) -> &[f32] {
        &self.ring_weights
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_shape(mut self, shape: NodeShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_size(mut self, size: NodeSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_badge_color(mut self, color: impl Into<String>) -> Self {
        self.badge_color = Some(color.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_glow(mut self, glow: bool) -> Self {
        self.glow = Some(glow);
        self
    }

    pub fn with_ring(mut self, colors: Vec<String>, weights: Vec<f32>) -> Self {
        self.ring_colors = colors;
        self.ring_weights = weights;
        self
    }
}

/// Optional rendering hints for an edge.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeVisual {
    color: Option<String>,
    style: Option<WireStyle>,
    weight: Option<f32>,
    opacity: Option<f32>,
    show_label: Option<bool>,
}

impl EdgeVisual {
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn style(&self) -> Option<WireStyle> {
        self.style
    }

    /// Thickness multiplier applied to the base wire width.
    pub fn weight(&self) -> Option<f32> {
        self.weight
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }

    pub fn show_label(&self) -> Option<bool> {
        self.show_label
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: WireStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = Some(show_label);
        self
    }
}

/// A diagrammed unit (an object or a morphism).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    name: String,
    input_type: Option<String>,
    output_type: Option<String>,
    properties: Properties,
    visual: Option<NodeVisual>,
    metadata: Properties,
}

impl Node {
    /// Creates a node with an identity and display name and no other data.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input_type: None,
            output_type: None,
            properties: Properties::new(),
            visual: None,
            metadata: Properties::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type label shown above the node.
    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    /// Type label shown below the node.
    pub fn output_type(&self) -> Option<&str> {
        self.output_type.as_deref()
    }

    /// Domain payload, opaque to layout.
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn visual(&self) -> Option<&NodeVisual> {
        self.visual.as_ref()
    }

    pub fn metadata(&self) -> &Properties {
        &self.metadata
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_output_type(mut self, output_type: impl Into<String>) -> Self {
        self.output_type = Some(output_type.into());
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_visual(mut self, visual: NodeVisual) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_metadata(mut self, metadata: Properties) -> Self {
        self.metadata = metadata;
        self
    }
}

/// A directed connector between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: String,
    target: String,
    label: Option<String>,
    visual: Option<EdgeVisual>,
    metadata: Properties,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            visual: None,
            metadata: Properties::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn visual(&self) -> Option<&EdgeVisual> {
        self.visual.as_ref()
    }

    pub fn metadata(&self) -> &Properties {
        &self.metadata
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_visual(mut self, visual: EdgeVisual) -> Self {
        self.visual = Some(visual);
        self
    }

    pub fn with_metadata(mut self, metadata: Properties) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Descriptive data about a whole composition.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CompositionMetadata {
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    extra: Properties,
}

impl CompositionMetadata {
    /// Diagram title.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Domain hint such as `quantum` or `workflow`; shown as the subtitle.
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Any other keys supplied with the metadata.
    pub fn extra(&self) -> &Properties {
        &self.extra
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_extra(mut self, extra: Properties) -> Self {
        self.extra = extra;
        self
    }
}

/// A complete composition graph: the sole input of the engine.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Composition {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    metadata: CompositionMetadata,
}

impl Composition {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            metadata: CompositionMetadata::default(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn metadata(&self) -> &CompositionMetadata {
        &self.metadata
    }

    pub fn with_metadata(mut self, metadata: CompositionMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_str() {
        assert_eq!("pill".parse::<NodeShape>(), Ok(NodeShape::Pill));
        assert_eq!("point".parse::<NodeShape>(), Ok(NodeShape::Point));

        let err = "hexagon".parse::<NodeShape>().unwrap_err();
        assert!(err.contains("hexagon"));
        assert!(err.contains("circle, pill, diamond, square, point"));
    }

    #[test]
    fn test_enum_names_roundtrip() {
        for name in NodeShape::NAMES {
            assert_eq!(name.parse::<NodeShape>().unwrap().as_str(), name);
        }
        for name in NodeSize::NAMES {
            assert_eq!(name.parse::<NodeSize>().unwrap().to_string(), name);
        }
        for name in WireStyle::NAMES {
            assert_eq!(name.parse::<WireStyle>().unwrap().to_string(), name);
        }
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(NodeShape::default(), NodeShape::Circle);
        assert_eq!(NodeSize::default(), NodeSize::Medium);
        assert_eq!(WireStyle::default(), WireStyle::Solid);
    }

    #[test]
    fn test_node_builder() {
        let node = Node::new("h", "H")
            .with_input_type("Qubit")
            .with_output_type("Qubit")
            .with_visual(
                NodeVisual::default()
                    .with_color("#f59e0b")
                    .with_shape(NodeShape::Square)
                    .with_badge("H"),
            );

        assert_eq!(node.id(), "h");
        assert_eq!(node.input_type(), Some("Qubit"));
        let visual = node.visual().unwrap();
        assert_eq!(visual.shape(), Some(NodeShape::Square));
        assert_eq!(visual.size(), None);
        assert_eq!(visual.badge(), Some("H"));
        assert!(visual.ring_colors().is_empty());
    }

    #[test]
    fn test_edge_builder() {
        let edge = Edge::new("a", "b").with_visual(
            EdgeVisual::default()
                .with_style(WireStyle::Dashed)
                .with_weight(1.5),
        );

        assert_eq!(edge.source(), "a");
        assert_eq!(edge.target(), "b");
        assert_eq!(edge.label(), None);
        assert_eq!(edge.visual().unwrap().weight(), Some(1.5));
        assert_eq!(edge.visual().unwrap().opacity(), None);
    }

    #[test]
    fn test_composition_metadata() {
        let composition = Composition::default().with_metadata(
            CompositionMetadata::default()
                .with_name("Bell State Preparation")
                .with_category("quantum"),
        );

        assert!(composition.nodes().is_empty());
        assert_eq!(
            composition.metadata().name(),
            Some("Bell State Preparation")
        );
        assert_eq!(composition.metadata().category(), Some("quantum"));
        assert_eq!(composition.metadata().description(), None);
    }
}
