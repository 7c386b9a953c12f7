//! Command dispatch logic for supergraph

use std::time::Instant;

use crate::cli::Cli;
use supergraph_core::config::Config;
use supergraph_core::error::Result;
use supergraph_core::format::OutputFormat;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::Command;

pub fn run(cli: &Cli, config: &Config, format: OutputFormat, start: Instant) -> Result<()> {
    debug!(elapsed = ?start.elapsed(), %format, "resolve_config");

    let ctx = CommandContext::new(cli, config, format, start);
    cli.command.execute(&ctx)
}
