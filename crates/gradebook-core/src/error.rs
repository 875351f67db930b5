//! Error types and exit codes for gradebook
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing record file, unknown template, invalid score)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing record file, invalid references (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[derive(Error, Debug)]
pub enum GradebookError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid score: {value:?} (expected a number in 0..=10, or '-' for absent)")]
    InvalidScore { value: String },

    // Data errors (exit code 3)
    #[error("record file not found: {path:?}")]
    RecordsNotFound { path: PathBuf },

    #[error("invalid record file {path:?}: {reason}")]
    InvalidRecords { path: PathBuf, reason: String },

    #[error("unknown grade template: {id}")]
    UnknownTemplate { id: String },

    #[error("score {value} out of range (expected 0..=10)")]
    ScoreOutOfRange { value: f64 },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GradebookError>;

impl GradebookError {
    pub fn not_found(context: impl Into<String>, value: impl ToString) -> Self {
        GradebookError::NotFound {
            context: context.into(),
            value: value.to_string(),
        }
    }

    pub fn invalid_value(context: impl Into<String>, value: impl ToString) -> Self {
        GradebookError::InvalidValue {
            context: context.into(),
            value: value.to_string(),
        }
    }

    /// Map this error to its process exit code
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            GradebookError::UnknownFormat(_)
            | GradebookError::DuplicateFormat
            | GradebookError::UsageError(_)
            | GradebookError::InvalidScore { .. } => ExitCode::Usage,

            // Data errors
            GradebookError::RecordsNotFound { .. }
            | GradebookError::InvalidRecords { .. }
            | GradebookError::UnknownTemplate { .. }
            | GradebookError::ScoreOutOfRange { .. }
            | GradebookError::NotFound { .. }
            | GradebookError::InvalidValue { .. } => ExitCode::Data,

            // Generic failures
            GradebookError::Io(_)
            | GradebookError::Json(_)
            | GradebookError::Toml(_)
            | GradebookError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable machine-readable identifier for the error kind
    fn error_type(&self) -> &'static str {
        match self {
            GradebookError::UnknownFormat(_) => "unknown_format",
            GradebookError::DuplicateFormat => "duplicate_format",
            GradebookError::UsageError(_) => "usage_error",
            GradebookError::InvalidScore { .. } => "invalid_score",
            GradebookError::RecordsNotFound { .. } => "records_not_found",
            GradebookError::InvalidRecords { .. } => "invalid_records",
            GradebookError::UnknownTemplate { .. } => "unknown_template",
            GradebookError::ScoreOutOfRange { .. } => "score_out_of_range",
            GradebookError::NotFound { .. } => "not_found",
            GradebookError::InvalidValue { .. } => "invalid_value",
            GradebookError::Io(_) => "io_error",
            GradebookError::Json(_) => "json_error",
            GradebookError::Toml(_) => "toml_error",
            GradebookError::Other(_) => "other",
        }
    }

    /// Structured error envelope for `--format json` consumers
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
