//! Layer assignment with Kahn's algorithm.

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use crate::structure::CompositionGraph;

/// Ordered layers of node indices.
///
/// Layer `k` holds the nodes that became eligible in round `k`, in input
/// order. Every node of the graph appears in exactly one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerAssignment {
    layers: Vec<Vec<NodeIndex>>,
}

impl LayerAssignment {
    /// Assigns layers to every node of `graph`.
    ///
    /// Each round places every unplaced node whose remaining in-degree is
    /// zero. When no such node exists the graph has a cycle; the unplaced
    /// node with the smallest remaining in-degree (earliest in input order on
    /// ties) is placed alone, and the rounds continue. The loop always
    /// terminates because every round places at least one node.
    pub fn from_graph(graph: &CompositionGraph<'_>) -> Self {
        let count = graph.node_count();
        let mut in_degree: Vec<usize> = graph.node_indices().map(|idx| graph.in_degree(idx)).collect();
        let mut placed = vec![false; count];
        let mut remaining = count;

        let mut frontier: Vec<NodeIndex> = graph
            .node_indices()
            .filter(|idx| in_degree[idx.index()] == 0)
            .collect();
        let mut layers = Vec::new();

        while remaining > 0 {
            let layer = if frontier.is_empty() {
                // Cycle: nothing is eligible, promote the least constrained node
                let Some(pick) = graph
                    .node_indices()
                    .filter(|idx| !placed[idx.index()])
                    .min_by_key(|idx| (in_degree[idx.index()], idx.index()))
                else {
                    break;
                };
                debug!(
                    node = graph.node(pick).id(),
                    in_degree = in_degree[pick.index()];
                    "Breaking cycle"
                );
                vec![pick]
            } else {
                std::mem::take(&mut frontier)
            };

            for idx in &layer {
                placed[idx.index()] = true;
            }
            remaining -= layer.len();

            for &idx in &layer {
                for succ in graph.successors(idx) {
                    let degree = &mut in_degree[succ.index()];
                    let was_positive = *degree > 0;
                    *degree = degree.saturating_sub(1);
                    if was_positive && *degree == 0 && !placed[succ.index()] {
                        frontier.push(succ);
                    }
                }
            }
            frontier.sort_unstable();

            trace!(layer = layers.len(), width = layer.len(); "Layer assigned");
            layers.push(layer);
        }

        Self { layers }
    }

    /// Returns the layers, top to bottom.
    pub fn layers(&self) -> &[Vec<NodeIndex>] {
        &self.layers
    }

    /// Number of layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Size of the widest layer, or 0 when there are no layers.
    pub fn max_width(&self) -> usize {
        self.layers.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the layer holding `idx`, if any.
    pub fn layer_of(&self, idx: NodeIndex) -> Option<usize> {
        self.layers.iter().position(|layer| layer.contains(&idx))
    }
}

#[cfg(test)]
mod tests {
    use braid_core::semantic::{Composition, Edge, Node};

    use super::*;

    fn composition(nodes: &[&str], edges: &[(&str, &str)]) -> Composition {
        Composition::new(
            nodes.iter().map(|id| Node::new(*id, *id)).collect(),
            edges.iter().map(|(s, t)| Edge::new(*s, *t)).collect(),
        )
    }

    fn layer_ids(comp: &Composition) -> Vec<Vec<String>> {
        let graph = CompositionGraph::from_composition(comp);
        LayerAssignment::from_graph(&graph)
            .layers()
            .iter()
            .map(|layer| layer.iter().map(|idx| graph.node(*idx).id().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_chain() {
        let comp = composition(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(layer_ids(&comp), [["a"], ["b"], ["c"]]);
    }

    #[test]
    fn test_branching() {
        let comp = composition(
            &["input", "pathA", "pathB", "merge"],
            &[
                ("input", "pathA"),
                ("input", "pathB"),
                ("pathA", "merge"),
                ("pathB", "merge"),
            ],
        );
        assert_eq!(
            layer_ids(&comp),
            vec![vec!["input"], vec!["pathA", "pathB"], vec!["merge"]]
        );
    }

    #[test]
    fn test_layer_keeps_input_order() {
        // Both roots feed `z`; `y` is declared before `x`
        let comp = composition(&["root", "y", "x", "z"], &[("root", "x"), ("root", "y")]);
        assert_eq!(
            layer_ids(&comp),
            vec![vec!["root", "z"], vec!["y", "x"]]
        );
    }

    #[test]
    fn test_empty_graph() {
        let comp = Composition::default();
        let graph = CompositionGraph::from_composition(&comp);
        let layers = LayerAssignment::from_graph(&graph);

        assert_eq!(layers.depth(), 0);
        assert_eq!(layers.max_width(), 0);
    }

    #[test]
    fn test_cycle_is_broken() {
        let comp = composition(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(layer_ids(&comp), [["a"], ["b"], ["c"]]);
    }

    #[test]
    fn test_cycle_prefers_minimum_in_degree() {
        // `b` has two incoming edges, `c` only one
        let comp = composition(
            &["b", "c"],
            &[("c", "b"), ("b", "c"), ("c", "b")],
        );
        assert_eq!(layer_ids(&comp), [["c"], ["b"]]);
    }

    #[test]
    fn test_self_loop() {
        let comp = composition(&["a", "b"], &[("a", "a"), ("a", "b")]);
        assert_eq!(layer_ids(&comp), [["a"], ["b"]]);
    }

    #[test]
    fn test_placed_node_not_revisited() {
        // The back edge `c -> a` decrements an already placed node
        let comp = composition(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "b")]);
        let ids = layer_ids(&comp);

        assert_eq!(ids.iter().map(Vec::len).sum::<usize>(), 3);
    }
}

#[cfg(test)]
mod proptest_tests {
    use braid_core::semantic::{Composition, Edge, Node};
    use proptest::prelude::*;

    use super::*;

    /// Random DAG: edges only run from a lower to a higher node index.
    fn dag_strategy() -> impl Strategy<Value = Composition> {
        (1usize..24).prop_flat_map(|count| {
            prop::collection::vec((0..count, 0..count), 0..count * 2).prop_map(move |pairs| {
                let nodes = (0..count).map(|i| Node::new(format!("n{i}"), format!("N{i}"))).collect();
                let edges = pairs
                    .into_iter()
                    .filter(|(a, b)| a != b)
                    .map(|(a, b)| {
                        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
                        Edge::new(format!("n{lo}"), format!("n{hi}"))
                    })
                    .collect();
                Composition::new(nodes, edges)
            })
        })
    }

    /// Random graph that may contain cycles and self loops.
    fn graph_strategy() -> impl Strategy<Value = Composition> {
        (1usize..24).prop_flat_map(|count| {
            prop::collection::vec((0..count, 0..count), 0..count * 3).prop_map(move |pairs| {
                let nodes = (0..count).map(|i| Node::new(format!("n{i}"), format!("N{i}"))).collect();
                let edges = pairs
                    .into_iter()
                    .map(|(a, b)| Edge::new(format!("n{a}"), format!("n{b}")))
                    .collect();
                Composition::new(nodes, edges)
            })
        })
    }

    proptest! {
        #[test]
        fn prop_topological_respect(comp in dag_strategy()) {
            let graph = CompositionGraph::from_composition(&comp);
            let layers = LayerAssignment::from_graph(&graph);

            for (source, target, _) in graph.edges() {
                prop_assert!(layers.layer_of(source) < layers.layer_of(target));
            }
        }

        #[test]
        fn prop_every_node_placed_once(comp in graph_strategy()) {
            let graph = CompositionGraph::from_composition(&comp);
            let layers = LayerAssignment::from_graph(&graph);

            let mut seen: Vec<_> = layers.layers().iter().flatten().map(|idx| idx.index()).collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..graph.node_count()).collect::<Vec<_>>());
        }

        #[test]
        fn prop_deterministic(comp in graph_strategy()) {
            let first = LayerAssignment::from_graph(&CompositionGraph::from_composition(&comp));
            let second = LayerAssignment::from_graph(&CompositionGraph::from_composition(&comp));
            prop_assert_eq!(first, second);
        }
    }
}
