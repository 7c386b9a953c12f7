use std::collections::{BTreeMap, VecDeque};

use crate::graph::edge::Edge;
use crate::graph::model::Graph;
use crate::graph::types::{NodeId, NodeSet};

/// Every node reachable from `node` along outgoing edges, `node` included.
///
/// Breadth-first: the queue starts with the immediate successors and a node
/// already in the closure is never expanded again, so cycles terminate. A
/// node that is not part of the graph has an empty closure.
pub fn forward_closure<N, E>(graph: &Graph<N, E>, node: NodeId) -> NodeSet {
    let mut closure = NodeSet::new();
    if !graph.contains(node) {
        return closure;
    }
    closure.insert(node);

    let mut queue: VecDeque<NodeId> = graph.out_edges(node).map(Edge::end).collect();
    while let Some(next) = queue.pop_front() {
        if closure.insert(next) {
            queue.extend(graph.out_edges(next).map(Edge::end));
        }
    }

    closure
}

/// Forward closure of every node, keyed by node id
pub fn forward_closures<N, E>(graph: &Graph<N, E>) -> BTreeMap<NodeId, NodeSet> {
    graph
        .nodes()
        .map(|node| (node.id(), forward_closure(graph, node.id())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> NodeSet {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_closure_of_sink_is_itself() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge((), a, b);
        assert_eq!(forward_closure(&graph, b), ids(&[2]));
    }

    #[test]
    fn test_closure_follows_edges_transitively() {
        let mut graph: Graph<(), ()> = Graph::new();
        let n: Vec<NodeId> = (0..5).map(|_| graph.add_node(())).collect();
        graph.add_edge((), n[0], n[1]);
        graph.add_edge((), n[1], n[2]);
        graph.add_edge((), n[3], n[4]);

        assert_eq!(forward_closure(&graph, n[0]), ids(&[1, 2, 3]));
        assert_eq!(forward_closure(&graph, n[3]), ids(&[4, 5]));
    }

    #[test]
    fn test_closure_terminates_on_cycles() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        let c = graph.add_node(());
        graph.add_edge((), a, b);
        graph.add_edge((), b, a);
        graph.add_edge((), b, c);
        graph.add_edge((), c, c);

        assert_eq!(forward_closure(&graph, a), ids(&[1, 2, 3]));
        assert_eq!(forward_closure(&graph, b), ids(&[1, 2, 3]));
        assert_eq!(forward_closure(&graph, c), ids(&[3]));
    }

    #[test]
    fn test_closure_of_unknown_node_is_empty() {
        let graph: Graph<(), ()> = Graph::new();
        assert!(forward_closure(&graph, NodeId::new(1)).is_empty());
    }

    #[test]
    fn test_forward_closures_covers_every_node() {
        let mut graph: Graph<(), ()> = Graph::new();
        let a = graph.add_node(());
        let b = graph.add_node(());
        graph.add_edge((), a, b);

        let closures = forward_closures(&graph);
        assert_eq!(closures.len(), 2);
        assert_eq!(closures[&a].len(), 2);
        assert_eq!(closures[&b].len(), 1);
    }
}
