//! figsearch-core - Basic data structures for figure detection
//!
//! This crate provides the fundamental data structures used throughout
//! figsearch:
//!
//! - [`Bitmap`] / [`BitmapMut`] - The binary grid container (immutable / mutable)
//! - [`Point`] - Cell coordinates (`x` = row, `y` = column)
//! - [`Error`] - Construction and access errors

pub mod bitmap;
pub mod error;
pub mod point;

pub use bitmap::{Bitmap, BitmapMut, MAX_DIMENSION};
pub use error::{Error, Result};
pub use point::Point;
