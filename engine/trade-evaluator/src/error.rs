//! Error types for the trade evaluator

use thiserror::Error;

/// Result type for trade evaluator operations
pub type Result<T> = std::result::Result<T, EvaluatorError>;

/// Errors raised while loading the asset catalog
///
/// Any of these is fatal to the load: no partial catalog is ever produced.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: missing required value for column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("Row {row}: invalid value '{value}' in column '{column}'")]
    InvalidValue { row: usize, column: &'static str, value: String },

    #[error("Duplicate asset label: {label}")]
    DuplicateLabel { label: String },
}

/// Errors that can occur in the trade evaluator
#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for EvaluatorError {
    fn from(err: toml::de::Error) -> Self {
        EvaluatorError::Config(err.to_string())
    }
}
