// Error types for the classifier, its input boundary, configuration and reports.

use std::path::PathBuf;
use thiserror::Error;

/// Rejections produced while turning raw text into a number to classify.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("empty input: expected an integer")]
    Empty,

    #[error("'{input}' is not an integer")]
    NotAnInteger { input: String },

    #[error("'{input}' is not a finite number")]
    NotFinite { input: String },

    #[error("'{input}' does not fit in a 64-bit signed integer")]
    OutOfRange { input: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("range {start}..={end} is empty (start must not exceed end)")]
    EmptyRange { start: i64, end: i64 },

    #[error("range {start}..={end} holds more than {max} numbers")]
    RangeTooLarge { start: i64, end: i64, max: u64 },

    #[error("failed to serialize entry: {0}")]
    Json(#[from] serde_json::Error),
}

/// Umbrella error for callers that touch more than one layer (the CLI).
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

pub type Result<T> = std::result::Result<T, Error>;
