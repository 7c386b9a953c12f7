use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Identity of a node within its graph.
///
/// Ids are positive, handed out by [`Graph::add_node`](super::Graph::add_node)
/// in strictly increasing order starting at 1, and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Arena slot for this id; `None` for the reserved id 0
    pub(crate) fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for NodeId {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(0) | Err(_) => crate::bail_invalid!("node id", s),
            Ok(raw) => Ok(NodeId(raw)),
        }
    }
}

/// Ordered set of node ids
pub type NodeSet = BTreeSet<NodeId>;

/// Position of an edge in the graph's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeIndex(pub(crate) usize);
