//! Canvas background, title block and summary footer.

use svg::node::element as svg_element;

use braid_core::{
    draw::{LayeredOutput, RenderLayer},
    geometry::{Point, Size},
    semantic::CompositionMetadata,
};

use super::{Svg, centered_text};
use crate::DiagramMetadata;

const GRID_STEP: usize = 40;
const DEFAULT_TITLE: &str = "Composition";
const DEFAULT_SUBTITLE: &str = "STRING DIAGRAM";

impl Svg {
    /// Canvas fill and the dot grid.
    pub(super) fn render_background(&self, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let fill = svg_element::Rectangle::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("fill", self.palette.background());
        output.add_to_layer(RenderLayer::Background, Box::new(fill));

        let mut grid = svg_element::Group::new()
            .set("class", "grid")
            .set("opacity", 0.15);
        // Truncation matches the integer canvas size
        let (width, height) = (canvas.width() as u32, canvas.height() as u32);
        for x in (0..width).step_by(GRID_STEP) {
            for y in (0..height).step_by(GRID_STEP) {
                grid = grid.add(
                    svg_element::Circle::new()
                        .set("cx", x)
                        .set("cy", y)
                        .set("r", 0.8)
                        .set("fill", self.palette.background_grid()),
                );
            }
        }
        output.add_to_layer(RenderLayer::Background, Box::new(grid));

        output
    }

    /// Title and subtitle centered at the top of the canvas.
    pub(super) fn render_header(&self, metadata: &CompositionMetadata, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let cx = canvas.width() / 2.0;

        let title = metadata
            .name()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let subtitle = metadata
            .category()
            .filter(|category| !category.is_empty())
            .map_or_else(|| DEFAULT_SUBTITLE.to_string(), str::to_uppercase);

        let title = centered_text(title, Point::new(cx, 35.0))
            .set("class", "title")
            .set("font-size", 16)
            .set("font-weight", 700)
            .set("fill", self.palette.text_primary())
            .set("letter-spacing", "0.05em");
        let subtitle = centered_text(&subtitle, Point::new(cx, 55.0))
            .set("class", "subtitle")
            .set("font-size", 10)
            .set("fill", self.palette.text_secondary())
            .set("letter-spacing", "0.1em");

        output.add_to_layer(RenderLayer::Frame, Box::new(title));
        output.add_to_layer(RenderLayer::Frame, Box::new(subtitle));
        output
    }

    /// One-line summary at the bottom of the canvas.
    pub(super) fn render_footer(&self, metadata: &DiagramMetadata, canvas: Size) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let summary = format!(
            "{} NODES · {} EDGES · {} LAYERS · {} CROSSINGS",
            metadata.node_count(),
            metadata.edge_count(),
            metadata.layer_depth(),
            metadata.crossing_count()
        );
        let footer = centered_text(&summary, Point::new(canvas.width() / 2.0, canvas.height() - 8.0))
            .set("class", "footer")
            .set("font-size", 8)
            .set("fill", self.palette.text_secondary())
            .set("opacity", 0.4)
            .set("letter-spacing", "0.1em");

        output.add_to_layer(RenderLayer::Frame, Box::new(footer));
        output
    }
}
