//! Unified error types for tile_engine

use thiserror::Error;

/// Main error type for tile_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Export format errors ===
    #[error("Document is empty")]
    EmptyDocument,

    #[error("Row {row} has an odd number of hex digits ({len})")]
    OddRowLength { row: usize, len: usize },

    #[error("Invalid hex digit '{text}' in row {row}")]
    InvalidHexDigit { row: usize, text: String },

    #[error("Row {row} is {found} cells wide, expected {expected}")]
    RowWidthMismatch { row: usize, expected: usize, found: usize },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for tile_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }
}
