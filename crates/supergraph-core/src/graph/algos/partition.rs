//! Decomposition of a graph into components that a Hamiltonian path must
//! cross in order.
//!
//! If the graph has a Hamiltonian path `v1 .. vn`, the forward closures are
//! nested: `closure(vi) ⊇ closure(vj)` for `i < j`. Nodes sharing a closure
//! reach each other and therefore sit next to each other on the path, and
//! groups with larger closures come first. Sorting by closure size and
//! grouping equal sizes recovers that order; the nesting check afterwards
//! rejects graphs where the closures are not nested, which cannot have a
//! Hamiltonian path at all.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::closure::forward_closures;
use crate::graph::model::Graph;
use crate::graph::types::{NodeId, NodeSet};

/// Nodes sharing one forward closure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    nodes: NodeSet,
    closure_size: usize,
}

impl Component {
    fn new(first: NodeId, closure_size: usize) -> Self {
        Component {
            nodes: NodeSet::from([first]),
            closure_size,
        }
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Size of the forward closure shared by every node of the component
    pub fn closure_size(&self) -> usize {
        self.closure_size
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }
}

/// Why the closures of a graph rule out a Hamiltonian path
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionFailure {
    #[error("nodes {first} and {second} each reach {size} nodes, but not the same ones")]
    DivergentClosures {
        first: NodeId,
        second: NodeId,
        size: usize,
    },

    #[error("closure of node {outer} does not contain the closure of node {inner}")]
    NotNested { outer: NodeId, inner: NodeId },
}

/// Split `graph` into components ordered from largest closure to smallest.
///
/// An empty graph has no components.
pub fn partition<N, E>(graph: &Graph<N, E>) -> Result<Vec<Component>, PartitionFailure> {
    let closures = forward_closures(graph);

    let mut ranked: Vec<(NodeId, usize)> = closures
        .iter()
        .map(|(&id, closure)| (id, closure.len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let components = group_by_closure_size(&ranked);
    check_nesting(&components, &closures)?;

    tracing::debug!(
        nodes = ranked.len(),
        components = components.len(),
        "partition"
    );
    Ok(components)
}

/// Walk nodes sorted by descending closure size, opening a component each
/// time the size drops.
///
/// # Panics
///
/// Panics if a size increases: the input was not sorted.
fn group_by_closure_size(ranked: &[(NodeId, usize)]) -> Vec<Component> {
    let mut components: Vec<Component> = Vec::new();

    for &(id, size) in ranked {
        match components.last_mut() {
            Some(current) if size == current.closure_size => {
                current.nodes.insert(id);
            }
            Some(current) => {
                assert!(
                    size < current.closure_size,
                    "closure sizes out of order: node {id} reaches {size} nodes after a component reaching {}",
                    current.closure_size
                );
                components.push(Component::new(id, size));
            }
            None => components.push(Component::new(id, size)),
        }
    }

    components
}

fn check_nesting(
    components: &[Component],
    closures: &BTreeMap<NodeId, NodeSet>,
) -> Result<(), PartitionFailure> {
    let mut outer: Option<(NodeId, &NodeSet)> = None;

    for component in components {
        let mut members = component.nodes.iter();
        let Some(&representative) = members.next() else {
            continue;
        };
        let closure = &closures[&representative];

        for &other in members {
            if closures[&other] != *closure {
                return Err(PartitionFailure::DivergentClosures {
                    first: representative,
                    second: other,
                    size: component.closure_size,
                });
            }
        }

        if let Some((outer_id, outer_closure)) = outer {
            if !outer_closure.is_superset(closure) {
                return Err(PartitionFailure::NotNested {
                    outer: outer_id,
                    inner: representative,
                });
            }
        }
        outer = Some((representative, closure));
    }

    Ok(())
}
