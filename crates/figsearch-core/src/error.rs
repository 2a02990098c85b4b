//! Error types for figsearch-core
//!
//! Provides a unified error type for bitmap construction and cell access.
//! Each variant captures enough context for diagnostics without exposing
//! the buffer layout.

use thiserror::Error;

/// figsearch-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Declared shape does not match the supplied cells
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        /// Declared (height, width)
        expected: (usize, usize),
        /// Observed (rows, columns) or (cells, 1) for flat input
        actual: (usize, usize),
    },

    /// Cell coordinates outside the bitmap
    #[error("cell ({row}, {col}) out of range for {height}x{width} bitmap")]
    OutOfRange {
        row: i64,
        col: i64,
        height: u32,
        width: u32,
    },

    /// Cell value other than 0 or 1
    #[error("invalid cell value {value} at ({row}, {col}): expected 0 or 1")]
    InvalidCellValue { row: u32, col: u32, value: u8 },

    /// Dimension that signed cell coordinates cannot address
    #[error("bitmap too large: {height}x{width}, at most {max} rows and columns")]
    TooLarge { height: u32, width: u32, max: u32 },
}

/// Result type alias for figsearch-core operations
pub type Result<T> = std::result::Result<T, Error>;
