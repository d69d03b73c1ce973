//! Braid - deterministic layout, routing and SVG rendering for string diagrams.
//!
//! A composition is a directed graph of typed nodes connected by wires. Braid
//! assigns nodes to layers, places the layers on a grid, routes every wire as
//! a Bezier curve and renders the result with the visual hints carried by the
//! composition.
//!
//! # Example
//!
//! ```
//! use braid::DiagramBuilder;
//!
//! let source = r#"{
//!     "nodes": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
//!     "edges": [{"source": "a", "target": "b"}]
//! }"#;
//!
//! let builder = DiagramBuilder::default();
//! let composition = builder.parse(source).expect("valid document");
//! let result = builder.build(&composition);
//!
//! assert_eq!(result.metadata().layer_depth(), 2);
//! assert!(result.svg().starts_with("<svg"));
//! ```

pub mod config;
pub mod samples;

mod error;
mod export;
mod layout;
mod resolve;
mod route;
mod structure;

pub use braid_core::{color, geometry, semantic};
pub use braid_parser::ParseOptions;

pub use error::BraidError;
pub use layout::{Layout, NodePosition};
pub use route::{RoutedConnector, Routing};

use log::{debug, info, trace, warn};
use serde::Serialize;

use config::{AppConfig, Palette};
use export::{Scene, svg::Svg};
use layout::LayoutEngine;
use semantic::Composition;
use structure::CompositionGraph;

/// Builder for parsing and rendering compositions.
///
/// # Examples
///
/// ```
/// use braid::{DiagramBuilder, config::AppConfig};
/// use braid::semantic::{Composition, Edge, Node};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let composition = Composition::new(
///     vec![Node::new("a", "A"), Node::new("b", "B")],
///     vec![Edge::new("a", "b")],
/// );
///
/// let svg = builder.render_svg(&composition);
/// assert!(svg.contains("data-id=\"a\""));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON composition document, failing on any validation error.
    ///
    /// # Errors
    ///
    /// Returns [`BraidError::Parse`] carrying every diagnostic and the source.
    pub fn parse(&self, source: &str) -> Result<Composition, BraidError> {
        self.parse_with(source, ParseOptions::strict())
    }

    /// Parse a JSON composition document with explicit [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`BraidError::Parse`] on syntax errors, and on validation
    /// errors unless `options.lenient` is set.
    pub fn parse_with(&self, source: &str, options: ParseOptions) -> Result<Composition, BraidError> {
        info!(lenient = options.lenient; "Parsing composition");

        let composition = braid_parser::parse_with(source, options)
            .map_err(|err| BraidError::new_parse_error(err, source))?;

        debug!(
            nodes = composition.nodes().len(),
            edges = composition.edges().len();
            "Composition parsed successfully"
        );
        trace!(composition:?; "Parsed composition");

        Ok(composition)
    }

    /// Parse a brick workflow document into a composition.
    ///
    /// # Errors
    ///
    /// Returns [`BraidError::Parse`] on syntax or brick validation errors.
    pub fn parse_brick(&self, source: &str) -> Result<Composition, BraidError> {
        info!("Parsing brick workflow");

        let composition = braid_parser::parse_brick(source)
            .map_err(|err| BraidError::new_parse_error(err, source))?;

        debug!(nodes = composition.nodes().len(); "Brick workflow adapted");
        Ok(composition)
    }

    /// Lay out and route `composition` without rendering it.
    pub fn arrange<'a>(&self, composition: &'a Composition) -> (Layout<'a>, Routing<'a>) {
        let graph = CompositionGraph::from_composition(composition);
        self.arrange_graph(&graph, composition)
    }

    /// Lay out, route and render `composition`.
    ///
    /// Never fails: invalid items that slipped past validation are skipped.
    pub fn build(&self, composition: &Composition) -> DiagramResult {
        info!(
            nodes = composition.nodes().len(),
            edges = composition.edges().len();
            "Building diagram"
        );

        let graph = CompositionGraph::from_composition(composition);
        let (layout, routing) = self.arrange_graph(&graph, composition);
        let canvas = layout.canvas();

        let metadata = DiagramMetadata {
            canvas_width: canvas.width(),
            canvas_height: canvas.height(),
            layer_depth: layout.layer_depth(),
            node_count: graph.node_count(),
            edge_count: routing.connectors().len(),
            crossing_count: routing.crossings(),
        };

        let scene = Scene {
            composition,
            graph: &graph,
            layout: &layout,
            routing: &routing,
            metadata: &metadata,
        };
        let svg = self.renderer().render(&scene);

        info!(
            width = metadata.canvas_width,
            height = metadata.canvas_height,
            crossings = metadata.crossing_count;
            "Diagram built"
        );

        DiagramResult { svg, metadata }
    }

    /// Render `composition` to an SVG string.
    pub fn render_svg(&self, composition: &Composition) -> String {
        self.build(composition).svg
    }

    fn arrange_graph<'a>(
        &self,
        graph: &CompositionGraph<'a>,
        composition: &'a Composition,
    ) -> (Layout<'a>, Routing<'a>) {
        let layout = LayoutEngine::new(self.config.layout()).layout(graph);
        let routing = route::route(&layout, composition.edges());
        (layout, routing)
    }

    fn renderer(&self) -> Svg {
        let style = self.config.style();
        let palette = style.palette().unwrap_or_else(|err| {
            warn!(err:%; "Invalid palette, using built-in colors");
            Palette::default()
        });
        Svg::new(palette, style.font_family())
    }
}

/// Summary numbers of a built diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramMetadata {
    canvas_width: f32,
    canvas_height: f32,
    layer_depth: usize,
    node_count: usize,
    edge_count: usize,
    crossing_count: usize,
}

impl DiagramMetadata {
    pub fn canvas_width(&self) -> f32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f32 {
        self.canvas_height
    }

    /// Number of layers.
    pub fn layer_depth(&self) -> usize {
        self.layer_depth
    }

    /// Number of distinct nodes drawn.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of connectors drawn.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Unordered pairs of connectors whose chords cross.
    pub fn crossing_count(&self) -> usize {
        self.crossing_count
    }
}

/// Rendered SVG plus its [`DiagramMetadata`].
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramResult {
    svg: String,
    metadata: DiagramMetadata,
}

impl DiagramResult {
    pub fn svg(&self) -> &str {
        &self.svg
    }

    pub fn metadata(&self) -> &DiagramMetadata {
        &self.metadata
    }
}
