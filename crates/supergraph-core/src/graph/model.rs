use std::collections::BTreeMap;
use std::fmt;

use super::edge::Edge;
use super::node::Node;
use super::types::{EdgeIndex, NodeId, NodeSet};

/// Adjacency dictionary: source id -> destination id -> edges between them
pub type Adjacency<'g, E> = BTreeMap<NodeId, BTreeMap<NodeId, Vec<&'g Edge<E>>>>;

/// In-memory directed multigraph.
///
/// Nodes live in an arena indexed by `id - 1`; ids come from a counter owned
/// by the graph and are never reused. Edges live in a second arena and are
/// referenced from both endpoints' adjacency lists. There is no edge or node
/// removal.
#[derive(Debug)]
pub struct Graph<N, E> {
    next_id: u32,
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Graph {
            next_id: 1,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, E> Graph<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node holding `value` and return its freshly allocated id
    pub fn add_node(&mut self, value: N) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        assert!(!self.contains(id), "node id {id} allocated twice");
        self.nodes.push(Node::new(id, value));
        id
    }

    /// Connect `from` to `to` with an edge carrying `value`.
    ///
    /// Returns `false` without touching the graph when either endpoint is not
    /// a node of this graph. Adding an edge equal to an existing one (same
    /// value, same endpoints) succeeds but stores nothing new.
    pub fn add_edge(&mut self, value: E, from: NodeId, to: NodeId) -> bool
    where
        E: PartialEq,
    {
        let (Some(from_slot), Some(to_slot)) = (self.slot(from), self.slot(to)) else {
            tracing::debug!(%from, %to, "add_edge: endpoint not in graph");
            return false;
        };

        let edge = Edge::new(value, from, to);
        let exists = self.nodes[from_slot]
            .edges_out
            .iter()
            .any(|index| self.edges[index.0] == edge);
        if exists {
            return true;
        }

        let index = EdgeIndex(self.edges.len());
        self.edges.push(edge);
        self.nodes[from_slot].attach_out(index);
        self.nodes[to_slot].attach_in(index);
        true
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<usize> {
        id.slot().filter(|&slot| slot < self.nodes.len())
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<N>> {
        self.slot(id).map(|slot| &self.nodes[slot])
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node<N>> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> NodeSet {
        self.nodes.iter().map(Node::id).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    /// Every edge of the graph, recomputed from the nodes' outgoing
    /// adjacency: ordered by source id, then by insertion.
    pub fn edges(&self) -> Vec<&Edge<E>> {
        self.nodes
            .iter()
            .flat_map(|node| node.edges_out.iter().map(|index| &self.edges[index.0]))
            .collect()
    }

    /// Outgoing edges of `id` in insertion order (empty for non-members)
    pub fn out_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.node(id)
            .into_iter()
            .flat_map(move |node| node.edges_out.iter().map(move |index| &self.edges[index.0]))
    }

    /// Incoming edges of `id` in insertion order (empty for non-members)
    pub fn in_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.node(id)
            .into_iter()
            .flat_map(move |node| node.edges_in.iter().map(move |index| &self.edges[index.0]))
    }

    /// Destinations of the outgoing edges of `id`
    pub fn nodes_out(&self, id: NodeId) -> Option<&NodeSet> {
        let node = self.node(id)?;
        Some(node.nodes_out.get_or_init(|| {
            node.edges_out
                .iter()
                .map(|index| self.edges[index.0].end())
                .collect()
        }))
    }

    /// Sources of the incoming edges of `id`
    pub fn nodes_in(&self, id: NodeId) -> Option<&NodeSet> {
        let node = self.node(id)?;
        Some(node.nodes_in.get_or_init(|| {
            node.edges_in
                .iter()
                .map(|index| self.edges[index.0].start())
                .collect()
        }))
    }

    /// All edges leading from `from` to `to`, parallel edges included
    pub fn edges_between(&self, from: NodeId, to: NodeId) -> impl Iterator<Item = &Edge<E>> {
        self.out_edges(from).filter(move |edge| edge.end() == to)
    }

    /// Edges whose endpoints both lie in `subset`
    pub fn edges_within(&self, subset: &NodeSet) -> Vec<&Edge<E>> {
        subset
            .iter()
            .flat_map(|&id| self.out_edges(id))
            .filter(|edge| subset.contains(&edge.end()))
            .collect()
    }

    pub fn adjacency(&self) -> Adjacency<'_, E> {
        let mut adjacency: Adjacency<'_, E> = BTreeMap::new();
        for edge in self.edges() {
            adjacency
                .entry(edge.start())
                .or_default()
                .entry(edge.end())
                .or_default()
                .push(edge);
        }
        adjacency
    }
}

impl<N: fmt::Display, E> fmt::Display for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph description:")?;
        writeln!(f, "Nodes:")?;
        for node in &self.nodes {
            writeln!(f, "Node {}:\t{}", node.id(), node.value())?;
        }
        writeln!(f)?;

        writeln!(f, "Adjacency:")?;
        for node in &self.nodes {
            write!(f, "Node {:>3}:\t", node.id())?;
            for edge in self.out_edges(node.id()) {
                write!(f, "{} ", edge.end())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
