//! Graph algorithm implementations
//!
//! Contains the stages of the Hamiltonian path query:
//! - `closure`: forward reachability closures
//! - `partition`: ordering nodes into components by closure size
//! - `hamiltonian`: exhaustive search within one component
//! - `stitch`: chaining component paths into whole-graph paths

pub mod closure;
pub mod hamiltonian;
pub mod partition;
pub mod stitch;

use std::time::Instant;

pub use closure::{forward_closure, forward_closures};
pub use hamiltonian::HamiltonianEnumerator;
pub use partition::{partition, Component, PartitionFailure};
pub use stitch::stitch;

use super::model::Graph;
use super::path::Path;

/// Every path through `graph` that visits each node exactly once.
///
/// A graph whose closures are not nested, or whose components cannot be
/// chained, yields no paths; so does the empty graph. A single-node graph
/// yields one zero-edge path.
pub fn hamiltonian_paths<N, E>(graph: &Graph<N, E>) -> Vec<Path<'_, E>> {
    let start = Instant::now();

    let components = match partition(graph) {
        Ok(components) => components,
        Err(failure) => {
            tracing::debug!(%failure, "no hamiltonian path");
            return Vec::new();
        }
    };
    crate::trace_time!(start, "partition", components = components.len());

    let enumerator = HamiltonianEnumerator::new(graph);
    let component_paths: Vec<Vec<Path<'_, E>>> = components
        .iter()
        .map(|component| enumerator.paths(component.nodes()))
        .collect();

    let paths = stitch(graph, component_paths);
    tracing::debug!(
        nodes = graph.node_count(),
        components = components.len(),
        paths = paths.len(),
        "hamiltonian_paths"
    );
    crate::trace_time!(start, "hamiltonian_paths");
    paths
}

impl<N, E> Graph<N, E> {
    /// See [`hamiltonian_paths`]
    pub fn hamiltonian_paths(&self) -> Vec<Path<'_, E>> {
        hamiltonian_paths(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::NodeId;

    #[test]
    fn test_chain_has_exactly_one_path() {
        let mut graph: Graph<&str, &str> = Graph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge("ab", a, b);
        graph.add_edge("bc", b, c);

        let paths = graph.hamiltonian_paths();
        assert_eq!(paths.len(), 1);
        let values: Vec<&str> = paths[0].edge_values().copied().collect();
        assert_eq!(values, vec!["ab", "bc"]);
        assert_eq!(paths[0].node_ids(), vec![a, b, c]);
    }

    #[test]
    fn test_unconnected_pair_has_no_paths() {
        let mut graph: Graph<(), ()> = Graph::new();
        graph.add_node(());
        graph.add_node(());
        assert!(graph.hamiltonian_paths().is_empty());
    }

    #[test]
    fn test_empty_and_single_node_graphs() {
        let mut graph: Graph<(), ()> = Graph::new();
        assert!(graph.hamiltonian_paths().is_empty());

        let only = graph.add_node(());
        let paths = graph.hamiltonian_paths();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
        assert_eq!(paths[0].start(), only);
    }

    #[test]
    fn test_cycle_component_inside_chain() {
        // 1 -> {2 <-> 3} -> 4, with 2 -> 4 and 3 -> 4
        let mut graph: Graph<(), u8> = Graph::new();
        let n: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(0, n[0], n[1]);
        graph.add_edge(0, n[0], n[2]);
        graph.add_edge(0, n[1], n[2]);
        graph.add_edge(0, n[2], n[1]);
        graph.add_edge(0, n[1], n[3]);
        graph.add_edge(0, n[2], n[3]);

        let mut rendered: Vec<String> = graph
            .hamiltonian_paths()
            .iter()
            .map(|p| p.to_string())
            .collect();
        rendered.sort();
        assert_eq!(rendered, vec!["<1 -> 2 -> 3 -> 4>", "<1 -> 3 -> 2 -> 4>"]);
    }

    #[test]
    fn test_components_without_connecting_edge() {
        // 1 -> {2 <-> 3} -> 4: closures nest, but entering at 2 forces
        // leaving from 3 and only 2 -> 4 exists
        let mut graph: Graph<(), u8> = Graph::new();
        let n: Vec<NodeId> = (0..4).map(|_| graph.add_node(())).collect();
        graph.add_edge(0, n[0], n[1]);
        graph.add_edge(0, n[1], n[2]);
        graph.add_edge(0, n[2], n[1]);
        graph.add_edge(0, n[1], n[3]);

        assert_eq!(partition(&graph).map(|c| c.len()), Ok(3));
        assert!(graph.hamiltonian_paths().is_empty());

        graph.add_edge(0, n[2], n[3]);
        let paths = graph.hamiltonian_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].to_string(), "<1 -> 2 -> 3 -> 4>");
    }
}
