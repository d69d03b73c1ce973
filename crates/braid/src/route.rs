//! Connector routing.
//!
//! Every edge becomes a cubic Bezier from the bottom center of its source box
//! to the top center of its target box. Control points sit 45% of the
//! vertical span away from each endpoint and lean 15% along the horizontal
//! delta, so connectors leave and enter nodes nearly vertically.
//!
//! The crossing count treats each connector as its straight chord. It is a
//! quality metric only and never moves anything.

use log::{debug, info};

use braid_core::{
    geometry::{Point, Segment},
    semantic::Edge,
};

use crate::layout::Layout;

const CONTROL_LEAN: f32 = 0.15;
const CONTROL_REACH: f32 = 0.45;

/// A routed edge: anchors and Bezier control points.
///
/// Colors and stroke widths are resolved from the edge when it is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedConnector<'a> {
    edge: &'a Edge,
    source: Point,
    target: Point,
    control1: Point,
    control2: Point,
}

impl<'a> RoutedConnector<'a> {
    fn new(edge: &'a Edge, source: Point, target: Point) -> Self {
        let dx = target.x() - source.x();
        let dy = target.y() - source.y();

        Self {
            edge,
            source,
            target,
            control1: Point::new(source.x() + CONTROL_LEAN * dx, source.y() + CONTROL_REACH * dy),
            control2: Point::new(target.x() - CONTROL_LEAN * dx, target.y() - CONTROL_REACH * dy),
        }
    }

    pub fn edge(&self) -> &'a Edge {
        self.edge
    }

    pub fn source(&self) -> Point {
        self.source
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn controls(&self) -> (Point, Point) {
        (self.control1, self.control2)
    }

    /// Midpoint of the chord, where labels are attached.
    pub fn midpoint(&self) -> Point {
        self.source.midpoint(self.target)
    }

    /// The straight source-to-target chord.
    pub fn chord(&self) -> Segment {
        Segment::new(self.source, self.target)
    }

    /// SVG path data with one decimal place.
    pub fn path_data(&self) -> String {
        let (s, c1, c2, t) = (self.source, self.control1, self.control2, self.target);
        format!(
            "M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
            s.x(),
            s.y(),
            c1.x(),
            c1.y(),
            c2.x(),
            c2.y(),
            t.x(),
            t.y()
        )
    }
}

/// Routed connectors in input edge order, with their crossing count.
#[derive(Debug, Clone, PartialEq)]
pub struct Routing<'a> {
    connectors: Vec<RoutedConnector<'a>>,
    crossings: usize,
}

impl<'a> Routing<'a> {
    pub fn connectors(&self) -> &[RoutedConnector<'a>] {
        &self.connectors
    }

    /// Number of unordered connector pairs whose chords properly intersect.
    pub fn crossings(&self) -> usize {
        self.crossings
    }
}

/// Routes every edge whose two endpoints have a position.
pub fn route<'a>(layout: &Layout<'_>, edges: &'a [Edge]) -> Routing<'a> {
    let connectors: Vec<_> = edges
        .iter()
        .filter_map(|edge| {
            let source = layout.position(edge.source());
            let target = layout.position(edge.target());
            match (source, target) {
                (Some(source), Some(target)) => Some(RoutedConnector::new(
                    edge,
                    source.source_anchor(),
                    target.target_anchor(),
                )),
                _ => {
                    debug!(
                        source = edge.source(),
                        target = edge.target();
                        "Skipping connector without positioned endpoints"
                    );
                    None
                }
            }
        })
        .collect();

    let crossings = count_crossings(&connectors);
    info!(connectors = connectors.len(), crossings; "Connectors routed");

    Routing {
        connectors,
        crossings,
    }
}

/// Counts crossing chord pairs. Quadratic in the number of connectors.
fn count_crossings(connectors: &[RoutedConnector<'_>]) -> usize {
    let chords: Vec<Segment> = connectors.iter().map(RoutedConnector::chord).collect();

    chords
        .iter()
        .enumerate()
        .map(|(i, a)| chords[i + 1..].iter().filter(|b| a.crosses(b)).count())
        .sum()
}
