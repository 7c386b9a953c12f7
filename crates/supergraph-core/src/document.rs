//! Graph documents: TOML or JSON files describing nodes and edges
//!
//! ```toml
//! [[nodes]]
//! value = "intro"
//!
//! [[nodes]]
//! value = "body"
//!
//! [[edges]]
//! from = 1
//! to = 2
//! value = "precedes"
//! ```
//!
//! Nodes are numbered from 1 in the order they appear; edges refer to those
//! numbers.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeEntry>,

    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeEntry {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default)]
    pub value: String,
}

impl GraphDocument {
    /// Load a document; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read graph document", path.display(), e))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let document = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| GraphError::invalid_document(path, e))?
        } else {
            toml::from_str(&content).map_err(|e| GraphError::invalid_document(path, e))?
        };

        tracing::debug!(path = %path.display(), json = is_json, "load_document");
        Ok(document)
    }

    /// Build the described graph.
    ///
    /// Fails when an edge names a node number the document does not define.
    pub fn build(&self) -> Result<Graph<String, String>> {
        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.value.clone());
        }

        for edge in &self.edges {
            if !graph.add_edge(edge.value.clone(), edge.from, edge.to) {
                let missing = if graph.contains(edge.from) {
                    edge.to
                } else {
                    edge.from
                };
                crate::bail_not_found!("node", missing);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "build_graph"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const CHAIN_TOML: &str = r#"
[[nodes]]
value = "a"

[[nodes]]
value = "b"

[[edges]]
from = 1
to = 2
value = "ab"
"#;

    #[test]
    fn test_load_toml_and_build() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chain.toml");
        fs::write(&path, CHAIN_TOML).unwrap();

        let graph = GraphDocument::load(&path).unwrap().build().unwrap();
        assert_eq!(graph.node_count(), 2);
        let edges = graph.edges();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].value(), "ab");
        assert_eq!(edges[0].to_string(), "1 -> 2");
    }

    #[test]
    fn test_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chain.json");
        fs::write(
            &path,
            r#"{"nodes": [{"value": "a"}, {}], "edges": [{"from": 2, "to": 1}]}"#,
        )
        .unwrap();

        let document = GraphDocument::load(&path).unwrap();
        assert_eq!(document.nodes[1].value, "");
        assert_eq!(document.edges[0].value, "");
        assert_eq!(document.edges[0].from, NodeId::new(2));
    }

    #[test]
    fn test_unknown_node_is_not_found() {
        let document = GraphDocument {
            nodes: vec![NodeEntry::default()],
            edges: vec![EdgeEntry {
                from: NodeId::new(1),
                to: NodeId::new(3),
                value: String::new(),
            }],
        };
        let err = document.build().unwrap_err();
        assert!(matches!(err, GraphError::NotFound { ref value, .. } if value == "3"));
    }

    #[test]
    fn test_malformed_document_is_data_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[[edges]]\nfrom = \"x\"\n").unwrap();

        let err = GraphDocument::load(&path).unwrap_err();
        assert!(matches!(err, GraphError::InvalidDocument { .. }));
    }

    #[test]
    fn test_missing_file_is_io_failure() {
        let dir = tempdir().unwrap();
        let err = GraphDocument::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GraphError::FailedOperationWithTarget { .. }));
    }

    #[test]
    fn test_empty_document_builds_empty_graph() {
        let document: GraphDocument = toml::from_str("").unwrap();
        assert!(document.build().unwrap().is_empty());
    }
}
