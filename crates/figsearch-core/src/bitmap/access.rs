//! Cell access functions
//!
//! Bounds-checked and unchecked reads and writes of individual cells.
//!
//! # Coordinates
//!
//! Accessors take `(row, col)`. The signed accessors ([`Bitmap::cell`],
//! [`Bitmap::cell_at`]) report negative coordinates as out of range
//! instead of wrapping.

use super::{Bitmap, BitmapMut};
use crate::error::{Error, Result};
use crate::point::Point;

#[inline]
fn offset(width: u32, row: u32, col: u32) -> usize {
    (row as usize) * (width as usize) + col as usize
}

impl Bitmap {
    /// Get a cell value at signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either coordinate is negative or
    /// `row >= height` or `col >= width`.
    pub fn cell(&self, row: i32, col: i32) -> Result<u8> {
        let out_of_range = || Error::OutOfRange {
            row: row.into(),
            col: col.into(),
            height: self.height(),
            width: self.width(),
        };
        let r = u32::try_from(row).map_err(|_| out_of_range())?;
        let c = u32::try_from(col).map_err(|_| out_of_range())?;
        self.get(r, c).ok_or_else(out_of_range)
    }

    /// Get the cell addressed by a [`Point`] (`x` = row, `y` = column).
    ///
    /// # Errors
    ///
    /// Same as [`Bitmap::cell`].
    #[inline]
    pub fn cell_at(&self, point: Point) -> Result<u8> {
        self.cell(point.x, point.y)
    }

    /// Get a cell value.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.get_unchecked(row, col))
    }

    /// Get a cell value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset is outside the buffer.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.data()[offset(self.width(), row, col)]
    }
}

impl BitmapMut {
    /// Get a cell value.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row >= self.inner.height || col >= self.inner.width {
            return None;
        }
        Some(self.inner.cells[offset(self.inner.width, row, col)])
    }

    /// Set a cell value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if coordinates are out of bounds and
    /// [`Error::InvalidCellValue`] if `value` is not 0 or 1.
    pub fn set_cell(&mut self, row: u32, col: u32, value: u8) -> Result<()> {
        if row >= self.inner.height || col >= self.inner.width {
            return Err(Error::OutOfRange {
                row: row.into(),
                col: col.into(),
                height: self.inner.height,
                width: self.inner.width,
            });
        }
        if value > 1 {
            return Err(Error::InvalidCellValue { row, col, value });
        }
        let idx = offset(self.inner.width, row, col);
        self.inner.cells[idx] = value;
        Ok(())
    }

    /// Set every cell of a row-major rectangle to 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the rectangle leaves the bitmap.
    pub fn fill_rect(&mut self, row: u32, col: u32, rows: u32, cols: u32) -> Result<()> {
        for r in row..row.saturating_add(rows) {
            for c in col..col.saturating_add(cols) {
                self.set_cell(r, c, 1)?;
            }
        }
        Ok(())
    }
}
