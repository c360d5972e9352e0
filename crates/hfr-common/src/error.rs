//! Error types for the HF-radar gridding crates.

use thiserror::Error;

/// Result type alias using HfrError.
pub type HfrResult<T> = Result<T, HfrError>;

/// Primary error type for HF-radar processing operations.
#[derive(Debug, Error)]
pub enum HfrError {
    // === Input Errors ===
    #[error("Failed to parse numeric value for '{field}': '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Unknown table kind: {0}")]
    UnknownKind(String),

    #[error("Row {row} has {actual} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    // === Configuration Errors ===
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),
}
