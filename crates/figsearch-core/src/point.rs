//! Point - Cell coordinates
//!
//! Points address cells of a [`Bitmap`](crate::Bitmap). The labeling is
//! fixed by the output format: `x` is the row index and `y` is the column
//! index, both 0-based.

use std::fmt;

/// A cell coordinate pair
///
/// This is a simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// Row index
    pub x: i32,
    /// Column index
    pub y: i32,
}

impl Point {
    /// Create a new point from a row and a column index.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a point from unsigned bitmap coordinates.
    ///
    /// Exact for every cell of a bitmap within
    /// [`MAX_DIMENSION`](crate::MAX_DIMENSION); larger coordinates saturate
    /// at `i32::MAX`.
    pub fn from_cell(row: u32, col: u32) -> Self {
        Self {
            x: i32::try_from(row).unwrap_or(i32::MAX),
            y: i32::try_from(col).unwrap_or(i32::MAX),
        }
    }

    /// Return this point shifted by `dx` rows and `dy` columns.
    ///
    /// Saturates at the `i32` bounds.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}
