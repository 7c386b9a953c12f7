use std::fmt;

use serde::Serialize;

use super::types::NodeId;

/// A directed edge carrying a caller-supplied value.
///
/// Two edges are equal when their values and both endpoints are equal, so
/// parallel edges between the same nodes stay distinct as long as their
/// values differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<E> {
    value: E,
    start: NodeId,
    end: NodeId,
}

impl<E> Edge<E> {
    pub(crate) fn new(value: E, start: NodeId, end: NodeId) -> Self {
        Edge { value, start, end }
    }

    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn end(&self) -> NodeId {
        self.end
    }

    pub fn is_self_loop(&self) -> bool {
        self.start == self.end
    }
}

impl<E> fmt::Display for Edge<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
