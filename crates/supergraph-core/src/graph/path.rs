//! Walks through a graph, as produced by the Hamiltonian search

use std::fmt;

use super::edge::Edge;
use super::types::NodeId;

/// A contiguous walk: each edge ends where the next one starts.
///
/// A path without edges stands for a single node, so `start == end`.
#[derive(Debug, PartialEq, Eq)]
pub struct Path<'g, E> {
    edges: Vec<&'g Edge<E>>,
    start: NodeId,
    end: NodeId,
}

impl<E> Clone for Path<'_, E> {
    fn clone(&self) -> Self {
        Path {
            edges: self.edges.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl<'g, E> Path<'g, E> {
    /// The zero-edge path sitting on `node`
    pub fn single(node: NodeId) -> Self {
        Path {
            edges: Vec::new(),
            start: node,
            end: node,
        }
    }

    /// Build a path from contiguous edges ending at `end`; with no edges the
    /// path is the single node `end`.
    pub(crate) fn from_edges(edges: Vec<&'g Edge<E>>, end: NodeId) -> Self {
        let start = edges.first().map_or(end, |edge| edge.start());
        debug_assert!(edges.windows(2).all(|w| w[0].end() == w[1].start()));
        debug_assert!(edges.last().is_none_or(|edge| edge.end() == end));
        Path { edges, start, end }
    }

    /// `self`, then `connector`, then `tail`
    pub(crate) fn join(&self, connector: &'g Edge<E>, tail: &Path<'g, E>) -> Self {
        debug_assert_eq!(connector.start(), self.end);
        debug_assert_eq!(connector.end(), tail.start);
        let mut edges = Vec::with_capacity(self.edges.len() + 1 + tail.edges.len());
        edges.extend_from_slice(&self.edges);
        edges.push(connector);
        edges.extend_from_slice(&tail.edges);
        Path {
            edges,
            start: self.start,
            end: tail.end,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn edges(&self) -> &[&'g Edge<E>] {
        &self.edges
    }

    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Visited nodes in order, `start` first
    pub fn node_ids(&self) -> Vec<NodeId> {
        std::iter::once(self.start)
            .chain(self.edges.iter().map(|edge| edge.end()))
            .collect()
    }

    pub fn edge_values(&self) -> impl Iterator<Item = &'g E> + '_ {
        self.edges.iter().map(|edge| edge.value())
    }
}

impl<E> fmt::Display for Path<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.start)?;
        for edge in &self.edges {
            write!(f, " -> {}", edge.end())?;
        }
        write!(f, ">")
    }
}
