//! SuperGraph - Hamiltonian path enumeration for directed multigraphs
//!
//! Loads a graph document (TOML or JSON) and answers path, closure,
//! component and export queries about it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use supergraph_core::error::{ExitCode as GraphExitCode, GraphError};
use supergraph_core::format::OutputFormat;
use supergraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is global, but clap may fail before `Cli.format` exists.
            // If the user asked for JSON, emit the structured error envelope.
            if argv_format_json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        GraphError::UsageError(err.to_string())
                    }
                    _ => GraphError::Other(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.resolve_format(&config);

    let log_level = cli.log_level.as_deref().or(config.log.level.as_deref());
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, cli.log_json || config.log.json)
    {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, &config, format, start) {
        Ok(()) => ExitCode::from(GraphExitCode::Success as u8),
        Err(e) => report(&e, format, cli.quiet),
    }
}

fn report(error: &GraphError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
