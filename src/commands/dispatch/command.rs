//! Command trait and context for dispatching commands

use std::path::Path;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use supergraph_core::config::Config;
use supergraph_core::document::GraphDocument;
use supergraph_core::error::Result;
use supergraph_core::format::OutputFormat;
use supergraph_core::graph::Graph;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, format: OutputFormat, start: Instant) -> Self {
        Self {
            cli,
            config,
            format,
            start,
        }
    }

    /// Load and build the graph described by `file`
    pub fn load_graph(&self, file: &Path) -> Result<Graph<String, String>> {
        let graph = GraphDocument::load(file)?.build()?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Paths { file } => commands::paths::execute(ctx, file),
            Commands::Closure { file, node } => commands::closure::execute(ctx, file, *node),
            Commands::Components { file } => commands::components::execute(ctx, file),
            Commands::Describe { file } => commands::describe::execute(ctx, file),
            Commands::Dot { file, name, output } => {
                commands::dot::execute(ctx, file, name.as_deref(), output.as_deref())
            }
            Commands::Init { force } => commands::init::execute(ctx, *force),
        }
    }
}
