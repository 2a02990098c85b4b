//! figsearch-region - Figure detection for figsearch
//!
//! This crate provides the scanning functionality:
//!
//! - **Line detection** - Maximal runs of 1-cells along rows or columns
//! - **Square detection** - The largest axis-aligned square of 1-cells
//! - **Result formatting** - `x1 y1 x2 y2` tuples or `Not found`
//! - **Rendering** - Masks of detected figures
//! - **Generation** - Seeded random bitmaps
//!
//! # Examples
//!
//! ## Finding the longest horizontal line
//!
//! ```
//! use figsearch_region::{Orientation, format_line, longest_run};
//! use figsearch_core::Bitmap;
//!
//! let bitmap = Bitmap::from_rows(1, 5, &[[1u8, 1, 0, 1, 1]]).unwrap();
//! let run = longest_run(&bitmap, Orientation::Horizontal).unwrap();
//! assert_eq!(format_line(run.as_ref()).to_string(), "0 0 0 1");
//! ```
//!
//! ## Finding the largest square
//!
//! ```
//! use figsearch_region::{FigureKind, find_figure, format_figure};
//! use figsearch_core::Bitmap;
//!
//! let bitmap = Bitmap::from_rows(3, 3, &[[1u8, 1, 1], [1, 1, 1], [1, 1, 1]]).unwrap();
//! let square = find_figure(&bitmap, FigureKind::Square).unwrap();
//! assert_eq!(format_figure(square.as_ref()).to_string(), "0 0 2 2");
//! ```

pub mod error;
pub mod figure;
pub mod generate;
pub mod line;
pub mod render;
pub mod report;
pub mod square;

// Re-export core types
pub use figsearch_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export line types and functions
pub use line::{LineRun, Orientation, Runs, find_all_runs, longest_run, runs};

// Re-export square types and functions
pub use square::{Square, is_solid_square, largest_square};

// Re-export figure types and functions
pub use figure::{Figure, FigureKind, find_figure};

// Re-export formatting types and functions
pub use report::{FigureReport, NOT_FOUND, format_figure, format_line, format_square};

// Re-export rendering functions
pub use render::render_figure;

// Re-export generation types and functions
pub use generate::{
    DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH, RandomBitmapOptions, generate_random_bitmap,
};
