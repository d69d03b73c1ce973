//! Shared SVG definitions: emphasis filters, arrow markers and node gradients.

use indexmap::IndexSet;
use svg::node::element as svg_element;

use braid_core::color::Color;

use super::Svg;

impl Svg {
    /// Builds the `<defs>` block.
    ///
    /// Markers and gradients are emitted once per color, in first-use order.
    pub(super) fn render_definitions(
        &self,
        node_colors: &IndexSet<Color>,
        wire_colors: &IndexSet<Color>,
    ) -> svg_element::Definitions {
        let mut defs = svg_element::Definitions::new()
            .add(glow_filter())
            .add(shadow_filter());

        for color in wire_colors {
            defs = defs.add(arrow_marker(*color));
        }

        for color in node_colors {
            defs = defs.add(radial_gradient(*color));
        }

        defs
    }
}

fn glow_filter() -> svg_element::Filter {
    let merge = svg_element::FilterEffectMerge::new()
        .add(svg_element::FilterEffectMergeNode::new().set("in", "blur"))
        .add(svg_element::FilterEffectMergeNode::new().set("in", "SourceGraphic"));

    svg_element::Filter::new()
        .set("id", "glow")
        .set("x", "-50%")
        .set("y", "-50%")
        .set("width", "200%")
        .set("height", "200%")
        .add(
            svg_element::FilterEffectGaussianBlur::new()
                .set("stdDeviation", 4)
                .set("result", "blur"),
        )
        .add(merge)
}

fn shadow_filter() -> svg_element::Filter {
    svg_element::Filter::new()
        .set("id", "shadow")
        .set("x", "-20%")
        .set("y", "-20%")
        .set("width", "140%")
        .set("height", "140%")
        .add(
            svg_element::FilterEffectDropShadow::new()
                .set("dx", 0)
                .set("dy", 2)
                .set("stdDeviation", 3)
                .set("flood-color", "#000")
                .set("flood-opacity", 0.4),
        )
}

fn arrow_marker(color: Color) -> svg_element::Marker {
    svg_element::Marker::new()
        .set("id", format!("arrow-{}", color.to_id_safe_string()))
        .set("markerWidth", 4)
        .set("markerHeight", 3)
        .set("refX", 3.5)
        .set("refY", 1.5)
        .set("orient", "auto")
        .add(
            svg_element::Polygon::new()
                .set("points", "0 0, 4 1.5, 0 3")
                .set("fill", color)
                .set("opacity", 0.9),
        )
}

fn radial_gradient(color: Color) -> svg_element::RadialGradient {
    svg_element::RadialGradient::new()
        .set("id", format!("grad-{}", color.to_id_safe_string()))
        .set("cx", "40%")
        .set("cy", "35%")
        .add(
            svg_element::Stop::new()
                .set("offset", "0%")
                .set("stop-color", color)
                .set("stop-opacity", 0.7),
        )
        .add(
            svg_element::Stop::new()
                .set("offset", "100%")
                .set("stop-color", color),
        )
}
