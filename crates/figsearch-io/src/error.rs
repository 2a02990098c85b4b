//! I/O error types
//!
//! Provides a unified error type for all bitmap I/O operations.
//! Each format-specific module maps its underlying errors into
//! `IoError` variants so that callers only need to handle one error type.

use thiserror::Error;

/// Error type for bitmap I/O operations.
///
/// Wraps format-specific decoding/encoding errors as well as
/// standard I/O and core-library errors. Loaders do not distinguish
/// a missing file from malformed content beyond the variant itself.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bitmap data is structurally invalid
    #[error("invalid bitmap data: {0}")]
    InvalidData(String),

    /// A format-specific decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format-specific encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. shape mismatch)
    #[error("core error: {0}")]
    Core(#[from] figsearch_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
