use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Schema violation at {path}: {reason}")]
    SchemaViolation { path: String, reason: String },

    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),

    #[error("Unknown quant level: {0}")]
    UnknownQuant(String),

    #[error("Unknown export format: {0}")]
    UnknownExportFormat(String),
}

impl ErrorCore {
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ErrorCore::SchemaViolation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
