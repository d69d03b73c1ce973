//! Grid placement of layered nodes and canvas sizing.

use indexmap::IndexMap;
use log::debug;

use braid_core::{
    geometry::{Bounds, Point, Size},
    semantic::{NodeShape, NodeSize},
};

use super::LayerAssignment;
use crate::{config::LayoutConfig, resolve, structure::CompositionGraph};

const SMALL_RADIUS: f32 = 24.0;
const MEDIUM_RADIUS: f32 = 35.0;
const LARGE_RADIUS: f32 = 44.0;

const POINT_RADIUS: f32 = 5.0;
const POINT_BOX: f32 = 10.0;

const PILL_ASPECT: f32 = 1.8;
const DIAMOND_SCALE: f32 = 1.6;
const SQUARE_SCALE: f32 = 1.5;

/// Base radius of a node of the given size.
pub fn base_radius(size: NodeSize) -> f32 {
    match size {
        NodeSize::Small => SMALL_RADIUS,
        NodeSize::Medium => MEDIUM_RADIUS,
        NodeSize::Large => LARGE_RADIUS,
    }
}

/// Anchor radius and bounding box of a node.
fn footprint(shape: NodeShape, size: NodeSize) -> (f32, Size) {
    let r = base_radius(size);
    match shape {
        NodeShape::Circle => (r, Size::square(r * 2.0)),
        NodeShape::Pill => (r, Size::new(r * PILL_ASPECT * 2.0, r * 2.0)),
        NodeShape::Diamond => (r, Size::square(r * DIAMOND_SCALE * 2.0)),
        NodeShape::Square => (r, Size::square(r * SQUARE_SCALE * 2.0)),
        NodeShape::Point => (POINT_RADIUS, Size::square(POINT_BOX)),
    }
}

/// Placement of a single node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePosition {
    center: Point,
    size: Size,
    radius: f32,
}

impl NodePosition {
    pub fn new(center: Point, size: Size, radius: f32) -> Self {
        Self {
            center,
            size,
            radius,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Bounding box size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Radius derived from the node size; shapes scale their geometry from it.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.center, self.size)
    }

    /// Where outgoing connectors attach: the bottom center of the box.
    pub fn source_anchor(&self) -> Point {
        self.bounds().bottom_center()
    }

    /// Where incoming connectors attach: the top center of the box.
    pub fn target_anchor(&self) -> Point {
        self.bounds().top_center()
    }

    fn translate(self, offset: Point) -> Self {
        Self {
            center: self.center.add_point(offset),
            ..self
        }
    }
}

/// Node positions keyed by node id, plus the canvas they fit in.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    positions: IndexMap<&'a str, NodePosition>,
    canvas: Size,
    layer_depth: usize,
}

impl<'a> Layout<'a> {
    /// Positions in layer order.
    pub fn positions(&self) -> &IndexMap<&'a str, NodePosition> {
        &self.positions
    }

    pub fn position(&self, id: &str) -> Option<&NodePosition> {
        self.positions.get(id)
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Number of layers.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }
}

/// Places every layer on the grid and sizes the canvas.
pub(super) fn place<'a>(
    graph: &CompositionGraph<'a>,
    layers: &LayerAssignment,
    config: &LayoutConfig,
) -> Layout<'a> {
    let margins = config.margins();
    let spacing_x = config.spacing_x();
    let spacing_y = config.spacing_y();
    let max_width = layers.max_width() as f32;

    let mut positions = IndexMap::with_capacity(graph.node_count());
    for (k, layer) in layers.layers().iter().enumerate() {
        let y = margins.top() + k as f32 * spacing_y;
        let start_x = margins.left() + (max_width - 1.0) * spacing_x / 2.0
            - (layer.len() as f32 - 1.0) * spacing_x / 2.0;

        for (i, &idx) in layer.iter().enumerate() {
            let node = graph.node(idx);
            let (radius, size) = footprint(resolve::node_shape(node), resolve::node_size(node));
            let center = Point::new(start_x + i as f32 * spacing_x, y);
            positions.insert(node.id(), NodePosition::new(center, size, radius));
        }
    }

    let Some(extent) = union_bounds(&positions) else {
        return Layout {
            positions,
            canvas: config.empty_canvas(),
            layer_depth: 0,
        };
    };

    // A narrow margin can push the first column or row off the canvas
    let shift = Point::new(deficit(extent.min_x()), deficit(extent.min_y()));
    let extent = if shift == Point::default() {
        extent
    } else {
        debug!(dx = shift.x(), dy = shift.y(); "Shifting layout into the canvas");
        for position in positions.values_mut() {
            *position = position.translate(shift);
        }
        union_bounds(&positions).unwrap_or(extent)
    };

    let min_canvas = config.min_canvas();
    let width = (extent.max_x().floor() + margins.right())
        .max(extent.max_x().ceil())
        .max(min_canvas.width());
    let height = (extent.max_y().floor() + margins.bottom())
        .max(extent.max_y().ceil())
        .max(min_canvas.height());

    debug!(width, height; "Canvas sized");

    Layout {
        positions,
        canvas: Size::new(width, height),
        layer_depth: layers.depth(),
    }
}

fn union_bounds(positions: &IndexMap<&str, NodePosition>) -> Option<Bounds> {
    positions
        .values()
        .map(NodePosition::bounds)
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// Whole-pixel offset that moves a negative minimum strictly past zero.
fn deficit(min: f32) -> f32 {
    if min < 0.0 { (-min).floor() + 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use braid_core::semantic::{Composition, Edge, Node, NodeVisual};
    use float_cmp::approx_eq;

    use super::*;

    fn layout_of<'a>(comp: &'a Composition, config: &LayoutConfig) -> Layout<'a> {
        let graph = CompositionGraph::from_composition(comp);
        let layers = LayerAssignment::from_graph(&graph);
        place(&graph, &layers, config)
    }

    fn center(layout: &Layout<'_>, id: &str) -> (f32, f32) {
        let c = layout.position(id).unwrap().center();
        (c.x(), c.y())
    }

    #[test]
    fn test_footprints() {
        assert_eq!(footprint(NodeShape::Circle, NodeSize::Medium), (35.0, Size::square(70.0)));
        assert_eq!(footprint(NodeShape::Circle, NodeSize::Small), (24.0, Size::square(48.0)));
        assert_eq!(footprint(NodeShape::Point, NodeSize::Large), (5.0, Size::square(10.0)));
        assert_eq!(footprint(NodeShape::Square, NodeSize::Large), (44.0, Size::square(132.0)));

        let (_, pill) = footprint(NodeShape::Pill, NodeSize::Medium);
        assert!(approx_eq!(f32, pill.width(), 126.0, ulps = 4));
        assert_eq!(pill.height(), 70.0);

        let (_, diamond) = footprint(NodeShape::Diamond, NodeSize::Medium);
        assert!(approx_eq!(f32, diamond.width(), 112.0, ulps = 4));
    }

    #[test]
    fn test_chain_positions() {
        let comp = Composition::new(
            vec![Node::new("a", "A"), Node::new("b", "B"), Node::new("c", "C")],
            vec![Edge::new("a", "b"), Edge::new("b", "c")],
        );
        let layout = layout_of(&comp, &LayoutConfig::default());

        assert_eq!(center(&layout, "a"), (80.0, 100.0));
        assert_eq!(center(&layout, "b"), (80.0, 240.0));
        assert_eq!(center(&layout, "c"), (80.0, 380.0));
        assert_eq!(layout.layer_depth(), 3);
        // 80 + 35 + 80 is below the width floor
        assert_eq!(layout.canvas(), Size::new(500.0, 535.0));
    }

    #[test]
    fn test_layers_centered_against_widest() {
        let comp = Composition::new(
            vec![
                Node::new("in", "In"),
                Node::new("a", "A"),
                Node::new("b", "B"),
                Node::new("c", "C"),
            ],
            vec![Edge::new("in", "a"), Edge::new("in", "b"), Edge::new("in", "c")],
        );
        let layout = layout_of(&comp, &LayoutConfig::default());

        assert_eq!(center(&layout, "a"), (80.0, 240.0));
        assert_eq!(center(&layout, "b"), (240.0, 240.0));
        assert_eq!(center(&layout, "c"), (400.0, 240.0));
        assert_eq!(center(&layout, "in"), (240.0, 100.0));
        assert_eq!(layout.canvas().width(), 515.0);
    }

    #[test]
    fn test_empty_canvas() {
        let comp = Composition::default();
        let layout = layout_of(&comp, &LayoutConfig::default());

        assert!(layout.positions().is_empty());
        assert_eq!(layout.layer_depth(), 0);
        assert_eq!(layout.canvas(), Size::new(600.0, 400.0));
    }

    #[test]
    fn test_anchors() {
        let comp = Composition::new(
            vec![Node::new("p", "P").with_visual(NodeVisual::default().with_shape(NodeShape::Pill))],
            vec![],
        );
        let layout = layout_of(&comp, &LayoutConfig::default());
        let position = layout.position("p").unwrap();

        assert_eq!(position.source_anchor(), Point::new(80.0, 135.0));
        assert_eq!(position.target_anchor(), Point::new(80.0, 65.0));
        assert_eq!(position.radius(), 35.0);
    }

    #[test]
    fn test_narrow_margins_shift_into_canvas() {
        let comp = Composition::new(vec![Node::new("a", "A")], vec![]);
        let config = LayoutConfig::default()
            .with_margins(0.0, 0.0, 0.0)
            .with_min_canvas(0.0, 0.0);
        let layout = layout_of(&comp, &config);
        let bounds = layout.position("a").unwrap().bounds();

        assert_eq!(center(&layout, "a"), (36.0, 36.0));
        assert!(bounds.is_within(layout.canvas()));
    }
}
