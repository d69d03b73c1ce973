//! Connector drawing.

use svg::node::element as svg_element;

use braid_core::{
    apply_stroke,
    draw::{LayeredOutput, RenderLayer, StrokeCap, StrokeDefinition},
    geometry::Point,
};

use super::{Svg, marker_ref, plain_text};
use crate::{resolve::ConnectorStyle, route::RoutedConnector};

const GLOW_OPACITY: f32 = 0.1;
const LABEL_OFFSET: Point = Point::new(14.0, 0.0);
const TOKENS_OFFSET: Point = Point::new(14.0, 12.0);

impl Svg {
    /// Draws one connector: optional glow underlay, the Bezier with its arrow
    /// head, and the label and token annotations.
    pub(super) fn render_connector(
        &self,
        connector: &RoutedConnector<'_>,
        style: &ConnectorStyle,
    ) -> LayeredOutput {
        let edge = connector.edge();
        let path_data = connector.path_data();
        let color = style.stroke.color();

        let mut group = svg_element::Group::new()
            .set("class", "wire")
            .set("data-source", edge.source())
            .set("data-target", edge.target());

        if let Some(glow_width) = style.glow_width {
            let underlay = StrokeDefinition::new(color, glow_width).with_cap(StrokeCap::Round);
            group = group.add(
                apply_stroke!(svg_element::Path::new(), &underlay)
                    .set("class", "wire-glow")
                    .set("d", path_data.as_str())
                    .set("fill", "none")
                    .set("opacity", GLOW_OPACITY),
            );
        }

        group = group.add(
            apply_stroke!(svg_element::Path::new(), &style.stroke)
                .set("d", path_data)
                .set("fill", "none")
                .set("opacity", style.opacity)
                .set("marker-end", marker_ref(color)),
        );

        let mid = connector.midpoint();
        if let Some(label) = edge.label().filter(|_| style.show_label) {
            group = group.add(
                plain_text(label, mid.add_point(LABEL_OFFSET))
                    .set("class", "wire-label")
                    .set("font-size", 8)
                    .set("fill", self.palette.text_secondary())
                    .set("opacity", 0.7),
            );
        }

        if let Some(tokens) = &style.tokens {
            group = group.add(
                plain_text(&format!("{tokens}t"), mid.add_point(TOKENS_OFFSET))
                    .set("class", "wire-tokens")
                    .set("font-size", 8)
                    .set("font-weight", 600)
                    .set("fill", self.palette.accent())
                    .set("opacity", 0.9),
            );
        }

        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Wire, Box::new(group));
        output
    }
}

#[cfg(test)]
mod tests {
    use braid_core::semantic::{Composition, Edge, EdgeVisual, Node, WireStyle};

    use super::*;
    use crate::{
        config::{LayoutConfig, Palette},
        layout::LayoutEngine,
        route,
        structure::CompositionGraph,
    };

    fn render_edge(edge: Edge) -> String {
        let comp = Composition::new(vec![Node::new("a", "A"), Node::new("b", "B")], vec![edge]);
        let config = LayoutConfig::default();
        let graph = CompositionGraph::from_composition(&comp);
        let layout = LayoutEngine::new(&config).layout(&graph);
        let routing = route::route(&layout, comp.edges());

        let palette = Palette::default();
        let svg = Svg::new(palette, "monospace");
        let connector = &routing.connectors()[0];
        let style = ConnectorStyle::resolve(connector.edge(), None, &palette);

        svg.render_connector(connector, &style)
            .render()
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_plain_connector() {
        let text = render_edge(Edge::new("a", "b"));

        assert!(text.contains("M 80.0 135.0 C"));
        assert!(text.contains("marker-end=\"url(#arrow-"));
        assert!(text.contains("stroke-width=\"2\""));
        assert!(!text.contains("wire-glow"));
        assert!(!text.contains("stroke-dasharray"));
    }

    #[test]
    fn test_dashed_heavy_connector() {
        let edge = Edge::new("a", "b").with_visual(
            EdgeVisual::default()
                .with_style(WireStyle::Dashed)
                .with_weight(2.0),
        );
        let text = render_edge(edge);

        assert!(text.contains("stroke-dasharray=\"6,4\""));
        assert!(text.contains("wire-glow"));
        assert!(text.contains("stroke-width=\"8\""));
    }

    #[test]
    fn test_label_visibility() {
        let shown = render_edge(Edge::new("a", "b").with_label("Structured"));
        assert!(shown.contains(">Structured<"));

        let hidden = render_edge(
            Edge::new("a", "b")
                .with_label("Structured")
                .with_visual(EdgeVisual::default().with_show_label(false)),
        );
        assert!(!hidden.contains("Structured"));
    }
}
