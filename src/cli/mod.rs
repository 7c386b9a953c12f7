//! CLI argument parsing for supergraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parse::{parse_node_id, parse_output_format};
use supergraph_core::config::Config;
use supergraph_core::error::Result;
use supergraph_core::format::OutputFormat;
use supergraph_core::graph::NodeId;

/// SuperGraph - Hamiltonian paths through directed multigraphs
#[derive(Parser, Debug)]
#[command(name = "supergraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json or records (default: config, then human)
    #[arg(long, global = true, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "supergraph_core=trace")
    #[arg(long, global = true, env = "SUPERGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (default: ./supergraph.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every Hamiltonian path through the graph
    Paths {
        /// Graph document (.toml or .json)
        file: PathBuf,
    },

    /// Show the nodes reachable from a node
    Closure {
        /// Graph document (.toml or .json)
        file: PathBuf,

        /// Node id (1-based, in document order)
        #[arg(value_parser = parse_node_id)]
        node: NodeId,
    },

    /// Show the closure-size components the path search works through
    Components {
        /// Graph document (.toml or .json)
        file: PathBuf,
    },

    /// Describe the graph's nodes and adjacency
    Describe {
        /// Graph document (.toml or .json)
        file: PathBuf,
    },

    /// Export the graph in Graphviz DOT format
    Dot {
        /// Graph document (.toml or .json)
        file: PathBuf,

        /// Graph name (default: [export] graph_name, then "G")
        #[arg(long)]
        name: Option<String>,

        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Write a default supergraph.toml in the working directory
    Init {
        /// Overwrite an existing supergraph.toml
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Load `--config`, or discover `supergraph.toml` in the working directory
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => {
                let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Config::discover(&cwd)
            }
        }
    }

    /// `--format` wins over the config file
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format.or(config.format).unwrap_or_default()
    }
}
