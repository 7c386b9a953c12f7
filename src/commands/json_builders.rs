//! Shared JSON building utilities for consistent JSON output formats

use supergraph_core::graph::{Edge, NodeSet, Path};

/// Build edge JSON object
pub fn build_edge_json(edge: &Edge<String>) -> serde_json::Value {
    serde_json::json!({
        "from": edge.start(),
        "to": edge.end(),
        "value": edge.value(),
    })
}

/// Build path JSON object: visited nodes in order plus the edges taken
pub fn build_path_json(path: &Path<'_, String>) -> serde_json::Value {
    let edges: Vec<_> = path.edges().iter().map(|e| build_edge_json(e)).collect();
    serde_json::json!({
        "nodes": path.node_ids(),
        "edges": edges,
    })
}

pub fn build_node_set_json(nodes: &NodeSet) -> serde_json::Value {
    serde_json::json!(nodes.iter().collect::<Vec<_>>())
}

/// Space-separated ids for human and records lines
pub fn join_ids<'a>(ids: impl IntoIterator<Item = &'a supergraph_core::graph::NodeId>) -> String {
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
