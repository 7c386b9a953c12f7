//! `supergraph dot` command - Graphviz export
//!
//! Without `--output` the DOT text goes to stdout whatever the format; with
//! it, the format decides how the written file is reported.

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::output_by_format_result;
use supergraph_core::error::Result;

/// Execute the dot command
pub fn execute(
    ctx: &CommandContext,
    file: &Path,
    name: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let writer = ctx.config.dot_writer(name);

    let Some(output) = output else {
        print!("{}", writer.render(&graph));
        return Ok(());
    };

    writer.write(&graph, output)?;

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({
            "output": output.display().to_string(),
            "name": writer.name(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        })),
        human => {
            if !ctx.cli.quiet {
                println!("Wrote {}", output.display());
            }
        },
        records => {
            println!(
                "H supergraph=1 records=1 mode=dot output={} nodes={} edges={}",
                output.display(),
                graph.node_count(),
                graph.edge_count()
            );
        }
    )
}
