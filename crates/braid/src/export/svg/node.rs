//! Node drawing: type labels, ring arcs, shape body, name, badge and token
//! annotation.

use svg::node::element as svg_element;

use braid_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeCap, StrokeDefinition, SvgNode},
    geometry::Point,
    semantic::{Node, NodeShape},
};

use super::{Svg, centered_text, gradient_ref};
use crate::{
    layout::NodePosition,
    resolve::{NodeStyle, RingArc},
};

const OUTLINE_WIDTH: f32 = 2.0;
const POINT_MARKER_RADIUS: f32 = 4.0;
const DIAMOND_SCALE: f32 = 1.4;
const SQUARE_SCALE: f32 = 1.3;

const RING_OFFSET: f32 = 6.0;
const RING_GAP_DEGREES: f32 = 5.0;

const NAME_WRAP_THRESHOLD: usize = 14;
const NAME_TRUNCATE_LENGTH: usize = 16;

const BADGE_RADIUS: f32 = 10.0;
const BADGE_OFFSET: f32 = 0.65;

/// How a node name is laid over the body.
#[derive(Debug, PartialEq)]
enum NameLabel<'a> {
    Line(&'a str),
    Truncated(String),
    Wrapped(String, String),
}

impl<'a> NameLabel<'a> {
    /// Long names with several words wrap at the middle word; long single
    /// words are cut.
    fn new(name: &'a str) -> Self {
        if name.chars().count() <= NAME_WRAP_THRESHOLD {
            return Self::Line(name);
        }

        let words: Vec<&str> = name.split_whitespace().collect();
        if words.len() >= 2 {
            let mid = words.len() / 2;
            Self::Wrapped(words[..mid].join(" "), words[mid..].join(" "))
        } else {
            Self::Truncated(name.chars().take(NAME_TRUNCATE_LENGTH).collect())
        }
    }
}

/// Start and end angle, in degrees, of ring arc `index` out of `count`.
///
/// Arcs start at the top of the node and run clockwise.
fn arc_angles(index: usize, count: usize) -> (f32, f32) {
    let span = 360.0 / count as f32;
    let start = index as f32 * span - 90.0;
    (start, start + span - RING_GAP_DEGREES)
}

impl Svg {
    /// Draws one node as a `<g class="node">` group.
    pub(super) fn render_node(
        &self,
        node: &Node,
        position: &NodePosition,
        style: &NodeStyle<'_>,
    ) -> LayeredOutput {
        let center = position.center();
        let half_height = position.size().height() / 2.0;

        let mut group = svg_element::Group::new()
            .set("class", "node")
            .set("data-id", node.id());
        if style.opacity < 1.0 {
            group = group.set("opacity", style.opacity);
        }

        if let Some(input_type) = node.input_type() {
            let above = Point::new(center.x(), center.y() - half_height - 10.0);
            group = group.add(self.type_label(input_type, above));
        }

        let ring_radius = position.radius() + RING_OFFSET;
        for (i, arc) in style.rings.iter().enumerate() {
            group = group.add(ring_arc(center, ring_radius, arc, arc_angles(i, style.rings.len())));
        }

        group = group.add(self.body(position, style));

        for label in self.name_labels(node.name(), center, style.shape) {
            group = group.add(label);
        }

        if let Some(badge) = style.badge.filter(|_| style.shape != NodeShape::Point) {
            let offset = position.radius() * BADGE_OFFSET;
            let badge_center = Point::new(center.x() + offset, center.y() - offset);
            let ring = StrokeDefinition::new(style.badge_color, 1.5);

            group = group
                .add(
                    apply_stroke!(svg_element::Circle::new(), &ring)
                        .set("class", "badge")
                        .set("cx", badge_center.x())
                        .set("cy", badge_center.y())
                        .set("r", BADGE_RADIUS)
                        .set("fill", self.palette.background()),
                )
                .add(
                    centered_text(badge, Point::new(badge_center.x(), badge_center.y() + 3.5))
                        .set("font-size", 8)
                        .set("font-weight", 700)
                        .set("fill", style.badge_color),
                );
        }

        let mut below = center.y() + half_height + 18.0;
        if let Some(output_type) = node.output_type() {
            group = group.add(self.type_label(output_type, Point::new(center.x(), below)));
            below += 12.0;
        }

        if let Some(tokens) = &style.tokens {
            group = group.add(
                centered_text(&format!("{tokens}t"), Point::new(center.x(), below))
                    .set("class", "node-tokens")
                    .set("font-size", 8)
                    .set("font-weight", 600)
                    .set("fill", self.palette.accent()),
            );
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Node, Box::new(group));
        output
    }

    fn type_label(&self, text: &str, position: Point) -> svg_element::Text {
        centered_text(text, position)
            .set("class", "type-label")
            .set("font-size", 8)
            .set("fill", self.palette.text_secondary())
            .set("opacity", 0.7)
    }

    /// Shape body filled with the node gradient.
    fn body(&self, position: &NodePosition, style: &NodeStyle<'_>) -> SvgNode {
        let center = position.center();
        let (cx, cy) = (center.x(), center.y());
        let r = position.radius();
        let outline = StrokeDefinition::new(self.palette.background_grid(), OUTLINE_WIDTH);
        let filter = if style.glow { "url(#glow)" } else { "url(#shadow)" };
        let fill = gradient_ref(style.color);

        match style.shape {
            NodeShape::Circle => Box::new(
                apply_stroke!(svg_element::Circle::new(), &outline)
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", r)
                    .set("fill", fill)
                    .set("filter", filter),
            ),
            NodeShape::Pill => {
                let size = position.size();
                Box::new(
                    apply_stroke!(svg_element::Rectangle::new(), &outline)
                        .set("x", cx - size.width() / 2.0)
                        .set("y", cy - size.height() / 2.0)
                        .set("width", size.width())
                        .set("height", size.height())
                        .set("rx", size.height() / 2.0)
                        .set("fill", fill)
                        .set("filter", filter),
                )
            }
            NodeShape::Diamond => {
                let s = r * DIAMOND_SCALE;
                let points = format!(
                    "{cx},{} {},{cy} {cx},{} {},{cy}",
                    cy - s,
                    cx + s,
                    cy + s,
                    cx - s
                );
                Box::new(
                    apply_stroke!(svg_element::Polygon::new(), &outline)
                        .set("points", points)
                        .set("fill", fill)
                        .set("filter", filter),
                )
            }
            NodeShape::Square => {
                let s = r * SQUARE_SCALE;
                Box::new(
                    apply_stroke!(svg_element::Rectangle::new(), &outline)
                        .set("x", cx - s)
                        .set("y", cy - s)
                        .set("width", s * 2.0)
                        .set("height", s * 2.0)
                        .set("rx", 4)
                        .set("fill", fill)
                        .set("filter", filter),
                )
            }
            NodeShape::Point => {
                let outline = outline.with_width(1.5);
                Box::new(
                    apply_stroke!(svg_element::Circle::new(), &outline)
                        .set("cx", cx)
                        .set("cy", cy)
                        .set("r", POINT_MARKER_RADIUS)
                        .set("fill", style.color),
                )
            }
        }
    }

    fn name_labels(&self, name: &str, center: Point, shape: NodeShape) -> Vec<svg_element::Text> {
        let on_node = |text: &str, dy: f32, font_size: u32| {
            centered_text(text, Point::new(center.x(), center.y() + dy))
                .set("class", "node-name")
                .set("font-size", font_size)
                .set("font-weight", 700)
                .set("fill", self.palette.text_on_node())
        };

        if shape == NodeShape::Point {
            return vec![
                centered_text(name, Point::new(center.x(), center.y() + 14.0))
                    .set("class", "node-name")
                    .set("font-size", 8)
                    .set("fill", self.palette.text_secondary())
                    .set("opacity", 0.7),
            ];
        }

        match NameLabel::new(name) {
            NameLabel::Line(line) => vec![on_node(line, 4.0, 11)],
            NameLabel::Truncated(line) => vec![on_node(&line, 4.0, 9)],
            NameLabel::Wrapped(first, second) => {
                vec![on_node(&first, -4.0, 10), on_node(&second, 8.0, 10)]
            }
        }
    }
}

fn ring_arc(center: Point, ring_radius: f32, arc: &RingArc, (start, end): (f32, f32)) -> svg_element::Path {
    let from = center.on_circle(ring_radius, start);
    let to = center.on_circle(ring_radius, end);
    let large_arc = u8::from(end - start > 180.0);
    let stroke = StrokeDefinition::new(arc.color, arc.width).with_cap(StrokeCap::Round);

    apply_stroke!(svg_element::Path::new(), &stroke)
        .set("class", "ring-arc")
        .set(
            "d",
            format!(
                "M {:.1} {:.1} A {ring_radius} {ring_radius} 0 {large_arc} 1 {:.1} {:.1}",
                from.x(),
                from.y(),
                to.x(),
                to.y()
            ),
        )
        .set("fill", "none")
}
