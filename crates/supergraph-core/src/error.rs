//! Error types and exit codes for supergraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unreadable graph document, unknown node id, etc.)
//!
//! Conditions that merely produce no result (an edge between nodes that are
//! not in the graph, a graph without a Hamiltonian path) are not errors and
//! never surface here.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the supergraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid document, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading, querying or exporting graphs
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph document
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        GraphError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::InvalidDocument { .. } | GraphError::NotFound { .. } => ExitCode::Data,

            GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::FailedOperationWithTarget { .. }
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::InvalidDocument { .. } => "invalid_document",
            GraphError::NotFound { .. } => "not_found",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for supergraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
