//! Output format handling for supergraph
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts (`H`, `N`, `E`, `P` lines)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Output format for supergraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records output
    Records,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Escape a value for a double-quoted records field or DOT string.
///
/// Backslashes and quotes are backslash-escaped; line breaks become `\n` and
/// `\r` so a value never spans lines.
pub fn escape_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str(r"\\"),
            '"' => escaped.push_str(r#"\""#),
            '\n' => escaped.push_str(r"\n"),
            '\r' => escaped.push_str(r"\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(
            "records".parse::<OutputFormat>().unwrap(),
            OutputFormat::Records
        );
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, GraphError::UnknownFormat(ref s) if s == "xml"));
    }

    #[test]
    fn test_display_matches_parse() {
        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Records] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_escape_string() {
        assert_eq!(escape_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_string(r"C:\dir\"), r"C:\\dir\\");
        assert_eq!(escape_string("two\nlines\r"), r"two\nlines\r");
        assert_eq!(escape_string("plain"), "plain");
    }
}
