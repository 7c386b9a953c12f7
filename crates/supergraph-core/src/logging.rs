use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", components = groups.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => "supergraph=debug,supergraph_core=debug",
        (false, None) => "supergraph=warn,supergraph_core=warn",
        (_, Some(level)) => return init_with_level(level, log_json),
    };

    init_with_level(level, log_json)
}

/// Expand a bare level ("debug") into directives for both crates; anything
/// containing `=` is taken as a full filter directive.
fn filter_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("supergraph={level},supergraph_core={level}")
    }
}

fn init_with_level(level: &str, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    // SUPERGRAPH_LOG overrides when RUST_LOG is unset
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("SUPERGRAPH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
