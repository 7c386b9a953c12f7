//! SuperGraph Core Library
//!
//! Directed multigraphs with caller-supplied node and edge values, and an
//! exhaustive search for every Hamiltonian path through them.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod format;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, Node, NodeId, NodeSet, Path};
