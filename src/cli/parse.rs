use supergraph_core::format::OutputFormat;
use supergraph_core::graph::NodeId;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a 1-based node id
pub fn parse_node_id(s: &str) -> std::result::Result<NodeId, String> {
    s.parse::<NodeId>().map_err(|e| e.to_string())
}
