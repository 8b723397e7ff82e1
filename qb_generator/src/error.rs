use qb_core::error::ErrorCore;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, crate::error::ErrorGenerator>;

#[derive(Debug, Error)]
pub enum ErrorGenerator {
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Baseline configuration contains no models")]
    EmptyBaseline,

    #[error("Invalid baseline for '{slug}': {reason}")]
    InvalidBaseline { slug: String, reason: String },

    #[error("Seed must be in 1..{max}, got {seed}")]
    InvalidSeed { seed: u64, max: u64 },

    #[error("Generated document is invalid: {0}")]
    InvalidOutput(#[source] ErrorCore),
}
