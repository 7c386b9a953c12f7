//! `supergraph closure` command - nodes reachable from one node

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::commands::json_builders::{build_node_set_json, join_ids};
use crate::output_by_format_result;
use supergraph_core::bail_not_found;
use supergraph_core::error::Result;
use supergraph_core::graph::{forward_closure, NodeId};

/// Execute the closure command
pub fn execute(ctx: &CommandContext, file: &Path, node: NodeId) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    if !graph.contains(node) {
        bail_not_found!("node", node);
    }

    let closure = forward_closure(&graph, node);

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({
            "node": node,
            "size": closure.len(),
            "closure": build_node_set_json(&closure),
        })),
        human => {
            if ctx.cli.quiet {
                println!("{}", join_ids(&closure));
            } else {
                println!("Closure of {} ({} node(s)): {}", node, closure.len(), join_ids(&closure));
            }
        },
        records => {
            println!(
                "H supergraph=1 records=1 mode=closure node={} size={}",
                node,
                closure.len()
            );
            for id in &closure {
                println!("N {}", id);
            }
        }
    )
}
