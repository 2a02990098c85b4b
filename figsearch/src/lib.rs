//! figsearch - Figure search in binary bitmaps
//!
//! Finds the longest horizontal line, the longest vertical line and the
//! largest solid square of 1-cells in a bitmap, and reports them as
//! `x1 y1 x2 y2` (row, column of the first and last cell).
//!
//! # Example
//!
//! ```
//! use figsearch::region::{FigureKind, find_figure, format_figure};
//!
//! let bitmap = figsearch::io::read_bitmap_mem(b"2 3\n0 1 1\n0 1 1\n").unwrap();
//! let square = find_figure(&bitmap, FigureKind::Square).unwrap();
//! assert_eq!(format_figure(square.as_ref()).to_string(), "0 1 1 2");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use figsearch_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use figsearch_io as io;
pub use figsearch_region as region;

pub mod cli;
pub mod commands;
pub mod logging;
