//! Graphviz DOT output
//!
//! Reads only node identity (and optionally node values as labels) plus the
//! graph's `edges()` projection.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};
use crate::format::escape_string;
use crate::graph::Graph;

/// Renders graphs as `digraph` text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotWriter {
    name: String,
    label_nodes: bool,
}

impl DotWriter {
    pub fn new(name: impl Into<String>) -> Self {
        DotWriter {
            name: name.into(),
            label_nodes: false,
        }
    }

    /// Label each node with its value instead of leaving the bare id
    pub fn with_node_labels(mut self, label_nodes: bool) -> Self {
        self.label_nodes = label_nodes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render<N: fmt::Display, E>(&self, graph: &Graph<N, E>) -> String {
        let mut dot = format!("digraph {} {{", dot_id(&self.name));

        for node in graph.nodes() {
            if self.label_nodes {
                let label = escape_string(&node.value().to_string());
                dot.push_str(&format!("\n\t{} [label=\"{}\"];", node.id(), label));
            } else {
                dot.push_str(&format!("\n\t{};", node.id()));
            }
        }
        for edge in graph.edges() {
            dot.push_str(&format!("\n\t{} -> {};", edge.start(), edge.end()));
        }

        dot.push_str("\n}\n");
        dot
    }

    /// Write the rendered graph to `path`, creating its directory if needed
    pub fn write<N: fmt::Display, E>(&self, graph: &Graph<N, E>, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                fs::create_dir_all(parent).map_err(|e| {
                    GraphError::io_operation("create directory", parent.display(), e)
                })?;
            }
        }

        fs::write(path, self.render(graph))
            .map_err(|e| GraphError::io_operation("write", path.display(), e))?;
        tracing::debug!(path = %path.display(), nodes = graph.node_count(), "write_dot");
        Ok(())
    }
}

/// Render `graph` as a `digraph` named `name`, nodes unlabeled
pub fn to_dot<N: fmt::Display, E>(graph: &Graph<N, E>, name: &str) -> String {
    DotWriter::new(name).render(graph)
}

pub fn write_dot<N: fmt::Display, E>(graph: &Graph<N, E>, name: &str, path: &Path) -> Result<()> {
    DotWriter::new(name).write(graph, path)
}

/// Reserved words of the DOT grammar, matched case-insensitively
const DOT_KEYWORDS: [&str; 6] = ["strict", "graph", "digraph", "node", "edge", "subgraph"];

/// Graph names that are not plain DOT identifiers, or are keywords, get quoted
fn dot_id(name: &str) -> String {
    let plain = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !DOT_KEYWORDS
            .iter()
            .any(|keyword| keyword.eq_ignore_ascii_case(name));
    if plain {
        name.to_string()
    } else {
        format!("\"{}\"", escape_string(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Graph<&'static str, ()> {
        let mut graph = Graph::new();
        let a = graph.add_node("alpha");
        let b = graph.add_node("say \"b\"");
        graph.add_node("lonely");
        graph.add_edge((), a, b);
        graph.add_edge((), b, a);
        graph
    }

    #[test]
    fn test_render_ids_and_edges() {
        let dot = DotWriter::new("G").render(&sample());
        assert_eq!(
            dot,
            "digraph G {\n\t1;\n\t2;\n\t3;\n\t1 -> 2;\n\t2 -> 1;\n}\n"
        );
    }

    #[test]
    fn test_to_dot_empty_graph() {
        let graph: Graph<u8, ()> = Graph::new();
        assert_eq!(to_dot(&graph, "Empty"), "digraph Empty {\n}\n");
    }

    #[test]
    fn test_render_with_labels() {
        let dot = DotWriter::new("G").with_node_labels(true).render(&sample());
        assert!(dot.contains("\t1 [label=\"alpha\"];"));
        assert!(dot.contains("\t2 [label=\"say \\\"b\\\"\"];"));
    }

    #[test]
    fn test_label_backslashes_and_newlines_are_escaped() {
        let mut graph: Graph<&str, ()> = Graph::new();
        graph.add_node(r"C:\dir\");
        graph.add_node("two\nlines");

        let dot = DotWriter::new("G").with_node_labels(true).render(&graph);
        assert!(dot.contains("\t1 [label=\"C:\\\\dir\\\\\"];"));
        assert!(dot.contains("\t2 [label=\"two\\nlines\"];"));
        assert_eq!(dot.lines().count(), 4);
    }

    #[test]
    fn test_graph_name_quoting() {
        assert_eq!(dot_id("typing_order"), "typing_order");
        assert_eq!(dot_id("typing order"), "\"typing order\"");
        assert_eq!(dot_id("1st"), "\"1st\"");
        assert_eq!(dot_id(""), "\"\"");
    }

    #[test]
    fn test_keyword_graph_names_are_quoted() {
        assert_eq!(dot_id("graph"), "\"graph\"");
        assert_eq!(dot_id("Node"), "\"Node\"");
        assert_eq!(dot_id("STRICT"), "\"STRICT\"");
        assert_eq!(dot_id("graphs"), "graphs");

        let graph: Graph<u8, ()> = Graph::new();
        assert_eq!(to_dot(&graph, "digraph"), "digraph \"digraph\" {\n}\n");
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("graph.dot");

        write_dot(&sample(), "G", &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("digraph G {"));
        assert!(written.ends_with("}\n"));
    }
}
