//! Layered layout of a composition graph.
//!
//! Layout runs in two passes:
//!
//! 1. [`layers`] assigns every node to a layer with Kahn's algorithm,
//!    breaking cycles by promoting one node at a time.
//! 2. [`position`] places the layers on a grid, top to bottom, centering
//!    each layer against the widest one, and derives the canvas size.
//!
//! Both passes are pure functions of the graph and the [`LayoutConfig`].

mod layers;
mod position;

pub use layers::LayerAssignment;
pub use position::{Layout, NodePosition};

use log::{debug, info};

use crate::{config::LayoutConfig, structure::CompositionGraph};

/// Computes a [`Layout`] for a composition graph.
///
/// The engine holds no state beyond its configuration and may be reused
/// across graphs.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'c> {
    config: &'c LayoutConfig,
}

impl<'c> LayoutEngine<'c> {
    pub fn new(config: &'c LayoutConfig) -> Self {
        Self { config }
    }

    /// Layers and positions every node of `graph`.
    pub fn layout<'a>(&self, graph: &CompositionGraph<'a>) -> Layout<'a> {
        info!(nodes = graph.node_count(); "Laying out graph");

        let layers = LayerAssignment::from_graph(graph);
        debug!(
            depth = layers.depth(),
            max_width = layers.max_width();
            "Layers assigned"
        );

        position::place(graph, &layers, self.config)
    }
}
