//! `supergraph init` command - write a default configuration file

use std::env;
use std::path::PathBuf;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::print_json;
use crate::output_by_format_result;
use supergraph_core::config::{Config, CONFIG_FILE_NAME};
use supergraph_core::error::{GraphError, Result};

/// Execute the init command
pub fn execute(ctx: &CommandContext, force: bool) -> Result<()> {
    let cwd = env::current_dir()
        .map_err(|e| GraphError::io_operation("resolve", "working directory", e))?;
    let path: PathBuf = cwd.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        return Err(GraphError::UsageError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    tracing::debug!(path = %path.display(), "init_config");

    output_by_format_result!(ctx.format,
        json => print_json(&serde_json::json!({
            "config": path.display().to_string(),
        })),
        human => {
            if !ctx.cli.quiet {
                println!("Wrote {}", path.display());
            }
        },
        records => {
            println!("H supergraph=1 records=1 mode=init config={}", path.display());
        }
    )
}
