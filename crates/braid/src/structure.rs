//! Graph structure built from a composition.
//!
//! [`CompositionGraph`] is a directed `petgraph` graph whose node weights
//! borrow the composition's [`Node`]s and whose edge weights borrow its
//! [`Edge`]s. Node indices follow input order, which is what makes layering
//! deterministic.
//!
//! The parser rejects duplicate ids and dangling edges, but a lenient parse
//! lets them through. Construction degrades gracefully: the first node with a
//! given id wins, and an edge whose endpoint is unknown is left out.

use indexmap::IndexMap;
use log::{debug, warn};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use braid_core::semantic::{Composition, Edge, Node};

/// Directed graph view over a [`Composition`].
#[derive(Debug)]
pub struct CompositionGraph<'a> {
    graph: DiGraph<&'a Node, &'a Edge>,
    node_id_map: IndexMap<&'a str, NodeIndex>,
}

impl<'a> CompositionGraph<'a> {
    /// Builds the graph, skipping duplicate nodes and dangling edges.
    pub fn from_composition(composition: &'a Composition) -> Self {
        let mut graph = DiGraph::with_capacity(composition.nodes().len(), composition.edges().len());
        let mut node_id_map = IndexMap::with_capacity(composition.nodes().len());

        for node in composition.nodes() {
            if node_id_map.contains_key(node.id()) {
                warn!(id = node.id(); "Skipping node with duplicate id");
                continue;
            }
            let idx = graph.add_node(node);
            node_id_map.insert(node.id(), idx);
        }

        for edge in composition.edges() {
            let source = node_id_map.get(edge.source()).copied();
            let target = node_id_map.get(edge.target()).copied();
            match (source, target) {
                (Some(source), Some(target)) => {
                    graph.add_edge(source, target, edge);
                }
                _ => {
                    warn!(
                        source = edge.source(),
                        target = edge.target();
                        "Skipping edge with unknown endpoint"
                    );
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count();
            "Composition graph built"
        );

        Self { graph, node_id_map }
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges whose endpoints both exist.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns node indices in input order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Returns the node stored at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` does not come from this graph.
    pub fn node(&self, idx: NodeIndex) -> &'a Node {
        self.graph[idx]
    }

    /// Looks up the index of the node with the given id.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_id_map.get(id).copied()
    }

    /// Number of edges pointing at `idx`, counting parallel edges.
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Targets of every edge leaving `idx`, one entry per edge.
    pub fn successors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| edge.target())
    }

    /// Returns `(source, target, edge)` triples in input order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &'a Edge)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), *edge.weight()))
    }
}
