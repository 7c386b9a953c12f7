//! Format output dispatch helpers

/// Dispatch output by format with minimal boilerplate.
///
/// Use when the json branch returns `Result` and human/records return `()`.
///
/// ```rust,ignore
/// output_by_format_result!(ctx.format,
///     json => output_json(&paths),
///     human => { output_human(&paths); },
///     records => { output_records(&paths); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            supergraph_core::format::OutputFormat::Json => $json,
            supergraph_core::format::OutputFormat::Human => {
                $human;
                Ok(())
            }
            supergraph_core::format::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}

/// Print a JSON value the way every command does
pub fn print_json(value: &serde_json::Value) -> supergraph_core::error::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
