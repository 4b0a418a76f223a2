use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised during classification, extraction and block building
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("input grid has no rows")]
    EmptyGrid,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("pixel buffer holds {found} samples, expected {expected}")]
    TruncatedData { expected: usize, found: usize },

    #[error("thickness must be positive, got {0}")]
    InvalidThickness(f64),

    #[error("base elevation must be finite and non-negative, got {0}")]
    InvalidElevation(f64),
}
