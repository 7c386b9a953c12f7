//! `supergraph components` command - closure-size components in path order
//!
//! A graph whose closures are not nested has no components; the reason is
//! reported instead and the command still succeeds.

use std::path::Path;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::commands::json_builders::{build_node_set_json, join_ids};
use crate::output_by_format_result;
use supergraph_core::error::Result;
use supergraph_core::format::escape_string;
use supergraph_core::graph::{partition, Component};

/// Execute the components command
pub fn execute(ctx: &CommandContext, file: &Path) -> Result<()> {
    let graph = ctx.load_graph(file)?;

    let (components, failure) = match partition(&graph) {
        Ok(components) => (components, None),
        Err(failure) => (Vec::new(), Some(failure.to_string())),
    };

    output_by_format_result!(ctx.format,
        json => {
            let items: Vec<_> = components
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "nodes": build_node_set_json(c.nodes()),
                        "closure_size": c.closure_size(),
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "components": items,
                "failure": failure,
            }))
        },
        human => {
            output_human(&components, failure.as_deref());
        },
        records => {
            output_records(&components, failure.as_deref());
        }
    )
}

fn output_human(components: &[Component], failure: Option<&str>) {
    if let Some(reason) = failure {
        println!("No components: {}", reason);
        return;
    }

    for (index, component) in components.iter().enumerate() {
        println!(
            "Component {} (closure {}): {}",
            index + 1,
            component.closure_size(),
            join_ids(component.nodes())
        );
    }
}

fn output_records(components: &[Component], failure: Option<&str>) {
    match failure {
        Some(reason) => println!(
            "H supergraph=1 records=1 mode=components components=0 failure=\"{}\"",
            escape_string(reason)
        ),
        None => println!(
            "H supergraph=1 records=1 mode=components components={}",
            components.len()
        ),
    }

    for (index, component) in components.iter().enumerate() {
        for id in component.nodes() {
            println!(
                "N {} component={} closure={}",
                id,
                index + 1,
                component.closure_size()
            );
        }
    }
}
