//! Exhaustive Hamiltonian path search within a node subset.
//!
//! Backtracking over outgoing edges with a mutable "still to visit" bitset
//! and an edge stack; a finished walk is copied out once every subset node
//! has been reached. Cost is factorial in the subset size, so callers run it
//! per component rather than over a whole graph.

use crate::graph::edge::Edge;
use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::{NodeId, NodeSet};

/// Enumerates Hamiltonian paths of node subsets of one graph
pub struct HamiltonianEnumerator<'g, N, E> {
    graph: &'g Graph<N, E>,
}

impl<'g, N, E> HamiltonianEnumerator<'g, N, E> {
    pub fn new(graph: &'g Graph<N, E>) -> Self {
        HamiltonianEnumerator { graph }
    }

    /// Every walk that visits each node of `subset` exactly once, using only
    /// edges between subset nodes.
    ///
    /// An empty subset has no paths; a single node has one zero-edge path. A
    /// subset naming a node outside the graph has no paths.
    pub fn paths(&self, subset: &NodeSet) -> Vec<Path<'g, E>> {
        let Some(remaining) = Remaining::of(self.graph, subset) else {
            return Vec::new();
        };

        match remaining.len {
            0 => Vec::new(),
            1 => subset.iter().map(|&only| Path::single(only)).collect(),
            _ => {
                let mut found = Vec::new();
                for &start in subset {
                    let mut search = Search::new(self.graph, remaining.clone().without(start));
                    search.extend(start);
                    found.append(&mut search.found);
                }
                found
            }
        }
    }

    /// Walks that leave `before` and then visit exactly the nodes of
    /// `subset`, each once.
    ///
    /// `before` counts as visited already: if it belongs to `subset` it is not
    /// entered a second time. Nothing left to visit means no paths.
    pub fn paths_from(&self, subset: &NodeSet, before: NodeId) -> Vec<Path<'g, E>> {
        if !self.graph.contains(before) {
            return Vec::new();
        }
        let Some(remaining) = Remaining::of(self.graph, subset) else {
            return Vec::new();
        };
        let remaining = remaining.without(before);
        if remaining.is_empty() {
            return Vec::new();
        }

        let mut search = Search::new(self.graph, remaining);
        search.extend(before);
        search.found
    }
}

/// Subset nodes not yet on the current walk, indexed by arena slot
#[derive(Debug, Clone)]
struct Remaining {
    slots: Vec<bool>,
    len: usize,
}

impl Remaining {
    /// `None` when `subset` names a node outside the graph
    fn of<N, E>(graph: &Graph<N, E>, subset: &NodeSet) -> Option<Self> {
        let mut slots = vec![false; graph.node_count()];
        for &id in subset {
            slots[graph.slot(id)?] = true;
        }
        Some(Remaining {
            slots,
            len: subset.len(),
        })
    }

    fn without(mut self, id: NodeId) -> Self {
        self.take(id);
        self
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark `id` visited; `false` if it was not waiting to be visited
    fn take(&mut self, id: NodeId) -> bool {
        match id.slot().and_then(|slot| self.slots.get_mut(slot)) {
            Some(waiting) if *waiting => {
                *waiting = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    fn restore(&mut self, id: NodeId) {
        if let Some(waiting) = id.slot().and_then(|slot| self.slots.get_mut(slot)) {
            debug_assert!(!*waiting);
            *waiting = true;
            self.len += 1;
        }
    }
}

struct Search<'g, N, E> {
    graph: &'g Graph<N, E>,
    remaining: Remaining,
    stack: Vec<&'g Edge<E>>,
    found: Vec<Path<'g, E>>,
}

impl<'g, N, E> Search<'g, N, E> {
    fn new(graph: &'g Graph<N, E>, remaining: Remaining) -> Self {
        Search {
            graph,
            stack: Vec::with_capacity(remaining.len),
            remaining,
            found: Vec::new(),
        }
    }

    fn extend(&mut self, at: NodeId) {
        if self.remaining.is_empty() {
            self.found.push(Path::from_edges(self.stack.clone(), at));
            return;
        }

        let graph = self.graph;
        for edge in graph.out_edges(at) {
            let next = edge.end();
            if self.remaining.take(next) {
                self.stack.push(edge);
                self.extend(next);
                self.stack.pop();
                self.remaining.restore(next);
            }
        }
    }
}
