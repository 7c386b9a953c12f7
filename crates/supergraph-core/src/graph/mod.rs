//! Directed multigraph and Hamiltonian path search
//!
//! Provides:
//! - `Graph`: nodes with caller values, value-carrying directed edges
//! - `Path`: contiguous walks returned by the search
//! - `algos`: closure, partition, enumeration and stitching stages

pub mod algos;
pub mod edge;
pub mod model;
pub mod node;
pub mod path;
pub mod types;

pub use algos::{
    forward_closure, forward_closures, hamiltonian_paths, partition, stitch, Component,
    HamiltonianEnumerator, PartitionFailure,
};
pub use edge::Edge;
pub use model::{Adjacency, Graph};
pub use node::Node;
pub use path::Path;
pub use types::{NodeId, NodeSet};
