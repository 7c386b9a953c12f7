use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

use super::types::{EdgeIndex, NodeId, NodeSet};

/// A node owned by a [`Graph`](super::Graph).
///
/// Nodes compare and hash by id only. Adjacency is stored as positions in
/// the owning graph's edge arena; the successor/predecessor id sets are
/// derived on first use and dropped whenever an edge touching the node is
/// added.
#[derive(Debug)]
pub struct Node<N> {
    id: NodeId,
    value: N,
    pub(crate) edges_out: Vec<EdgeIndex>,
    pub(crate) edges_in: Vec<EdgeIndex>,
    pub(crate) nodes_out: OnceCell<NodeSet>,
    pub(crate) nodes_in: OnceCell<NodeSet>,
}

impl<N> Node<N> {
    pub(crate) fn new(id: NodeId, value: N) -> Self {
        Node {
            id,
            value,
            edges_out: Vec::new(),
            edges_in: Vec::new(),
            nodes_out: OnceCell::new(),
            nodes_in: OnceCell::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &N {
        &self.value
    }

    pub fn out_degree(&self) -> usize {
        self.edges_out.len()
    }

    pub fn in_degree(&self) -> usize {
        self.edges_in.len()
    }

    pub(crate) fn attach_out(&mut self, edge: EdgeIndex) {
        self.edges_out.push(edge);
        self.nodes_out.take();
    }

    pub(crate) fn attach_in(&mut self, edge: EdgeIndex) {
        self.edges_in.push(edge);
        self.nodes_in.take();
    }
}

impl<N> PartialEq for Node<N> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<N> Eq for Node<N> {}

impl<N> Hash for Node<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
