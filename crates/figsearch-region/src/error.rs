//! Error types for figsearch-region

use figsearch_core::{Bitmap, MAX_DIMENSION};
use thiserror::Error;

/// Errors that can occur during figure detection
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] figsearch_core::Error),

    /// A zero-sized or oversized bitmap reached a scanner
    #[error("invalid image: {height}x{width} bitmap is empty or too large")]
    InvalidImage { height: u32, width: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Reject bitmaps that are empty or whose cells lack `i32` coordinates.
pub(crate) fn ensure_scannable(bitmap: &Bitmap) -> RegionResult<()> {
    if bitmap.is_empty() || bitmap.height() > MAX_DIMENSION || bitmap.width() > MAX_DIMENSION {
        return Err(RegionError::InvalidImage {
            height: bitmap.height(),
            width: bitmap.width(),
        });
    }
    Ok(())
}
