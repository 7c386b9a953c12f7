//! `supergraph describe` command - nodes, edges and adjacency

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::commands::json_builders::{build_edge_json, build_node_set_json, join_ids};
use crate::output_by_format_result;
use supergraph_core::error::Result;
use supergraph_core::format::escape_string;
use supergraph_core::graph::{Graph, NodeSet};

/// Execute the describe command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;

    output_by_format_result!(ctx.format,
        json => output_json(&graph),
        human => {
            print!("{}", graph);
        },
        records => {
            output_records(file, &graph);
        }
    )
}

fn output_json(graph: &Graph<String, String>) -> Result<()> {
    let empty = NodeSet::new();
    let nodes: Vec<_> = graph
        .nodes()
        .map(|node| {
            serde_json::json!({
                "id": node.id(),
                "value": node.value(),
                "out": build_node_set_json(graph.nodes_out(node.id()).unwrap_or(&empty)),
                "in": build_node_set_json(graph.nodes_in(node.id()).unwrap_or(&empty)),
            })
        })
        .collect();
    let edges: Vec<_> = graph.edges().into_iter().map(build_edge_json).collect();

    print_json(&serde_json::json!({
        "nodes": nodes,
        "edges": edges,
    }))
}

fn output_records(file: &Path, graph: &Graph<String, String>) {
    println!(
        "H supergraph=1 records=1 mode=describe file={} nodes={} edges={}",
        file.display(),
        graph.node_count(),
        graph.edge_count()
    );

    for node in graph.nodes() {
        let out = match graph.nodes_out(node.id()) {
            Some(ids) if !ids.is_empty() => join_ids(ids).replace(' ', ","),
            _ => "-".to_string(),
        };
        println!(
            "N {} \"{}\" out={}",
            node.id(),
            escape_string(node.value()),
            out
        );
    }
    for edge in graph.edges() {
        println!(
            "E {} {} \"{}\"",
            edge.start(),
            edge.end(),
            escape_string(edge.value())
        );
    }
}
