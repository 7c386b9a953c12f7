//! `supergraph paths` command - every Hamiltonian path through a graph

use std::path::Path as FsPath;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::commands::json_builders::{build_path_json, join_ids};
use crate::output_by_format_result;
use supergraph_core::error::Result;
use supergraph_core::format::escape_string;
use supergraph_core::graph::Path;

/// Execute the paths command
pub fn execute(ctx: &CommandContext, file: &FsPath) -> Result<()> {
    let graph = ctx.load_graph(file)?;
    let paths = graph.hamiltonian_paths();
    tracing::debug!(elapsed = ?ctx.start.elapsed(), paths = paths.len(), "hamiltonian_paths");

    output_by_format_result!(ctx.format,
        json => {
            let items: Vec<_> = paths.iter().map(build_path_json).collect();
            print_json(&serde_json::json!({
                "count": paths.len(),
                "paths": items,
            }))
        },
        human => {
            output_human(ctx, &paths);
        },
        records => {
            output_records(file, &paths);
        }
    )
}

fn output_human(ctx: &CommandContext, paths: &[Path<'_, String>]) {
    if paths.is_empty() {
        if !ctx.cli.quiet {
            println!("No Hamiltonian paths");
        }
        return;
    }

    for path in paths {
        println!("{}", path);
    }
    if !ctx.cli.quiet {
        println!();
        println!("{} path(s)", paths.len());
    }
}

fn output_records(file: &FsPath, paths: &[Path<'_, String>]) {
    println!(
        "H supergraph=1 records=1 mode=paths file={} paths={}",
        file.display(),
        paths.len()
    );
    for (index, path) in paths.iter().enumerate() {
        let index = index + 1;
        println!("P {} {}", index, join_ids(&path.node_ids()));
        for edge in path.edges() {
            println!(
                "E {} {} {} \"{}\"",
                index,
                edge.start(),
                edge.end(),
                escape_string(edge.value())
            );
        }
    }
}
