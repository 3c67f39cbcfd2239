//! Error types and exit codes for secpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including failed verification runs)
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (missing nodes, malformed datasets)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the secpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing node, malformed dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during secpath operations
#[derive(Error, Debug)]
pub enum SecpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    /// Mutually exclusive flags, such as two graph sources
    #[error("{0}")]
    ConflictingArguments(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("{role} node {node} is not in the graph")]
    NodeNotFound { role: &'static str, node: NodeId },

    #[error("invalid dataset {path:?}: {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("verification failed: {failed} of {total} cases did not pass")]
    VerificationFailed { failed: usize, total: usize },

    #[error("{0}")]
    Other(String),
}

impl SecpathError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        SecpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        SecpathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        SecpathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a dataset file that could not be interpreted
    pub fn invalid_dataset(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        SecpathError::InvalidDataset {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SecpathError::UnknownFormat(_)
            | SecpathError::UsageError(_)
            | SecpathError::ConflictingArguments(_)
            | SecpathError::InvalidValue { .. }
            | SecpathError::Unsupported { .. } => ExitCode::Usage,

            SecpathError::NodeNotFound { .. }
            | SecpathError::InvalidDataset { .. }
            | SecpathError::NotFound { .. } => ExitCode::Data,

            SecpathError::Io(_)
            | SecpathError::Json(_)
            | SecpathError::Toml(_)
            | SecpathError::Csv(_)
            | SecpathError::VerificationFailed { .. }
            | SecpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            SecpathError::UnknownFormat(_) => "unknown_format",
            SecpathError::UsageError(_) => "usage_error",
            SecpathError::ConflictingArguments(_) => "conflicting_arguments",
            SecpathError::InvalidValue { .. } => "invalid_value",
            SecpathError::Unsupported { .. } => "unsupported",
            SecpathError::NodeNotFound { .. } => "node_not_found",
            SecpathError::InvalidDataset { .. } => "invalid_dataset",
            SecpathError::NotFound { .. } => "not_found",
            SecpathError::Io(_) => "io_error",
            SecpathError::Json(_) => "json_error",
            SecpathError::Toml(_) => "toml_error",
            SecpathError::Csv(_) => "csv_error",
            SecpathError::VerificationFailed { .. } => "verification_failed",
            SecpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for secpath operations
pub type Result<T> = std::result::Result<T, SecpathError>;
