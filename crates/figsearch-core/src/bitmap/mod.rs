//! Bitmap - The binary grid container
//!
//! The `Bitmap` structure is the fundamental input type for figure
//! detection: a rectangular grid of cells that are each 0 or 1.
//!
//! # Cell layout
//!
//! - Cells are stored in one contiguous buffer, one byte per cell
//! - The buffer is row-major: cell `(row, col)` lives at `row * width + col`
//! - Every row has exactly `width` cells
//!
//! # Ownership model
//!
//! `Bitmap` uses `Arc` for cheap cloning (shared, read-only ownership).
//! To modify cells, convert to `BitmapMut` via [`Bitmap::try_into_mut`]
//! or [`Bitmap::to_mut`], then convert back with `Into<Bitmap>`.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Largest height or width whose cells all have `i32` coordinates
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Internal bitmap data
#[derive(Debug, Clone, PartialEq, Eq)]
struct BitmapData {
    /// Number of rows
    height: u32,
    /// Number of columns
    width: u32,
    /// Row-major cells, each 0 or 1
    cells: Vec<u8>,
}

impl BitmapData {
    fn zeroed(height: u32, width: u32) -> Self {
        let size = (height as usize) * (width as usize);
        Self {
            height,
            width,
            cells: vec![0u8; size],
        }
    }
}

/// Bitmap - Immutable binary grid
///
/// # Examples
///
/// ```
/// use figsearch_core::Bitmap;
///
/// let bitmap = Bitmap::from_rows(2, 3, &[[1u8, 1, 0], [0, 1, 1]]).unwrap();
/// assert_eq!(bitmap.height(), 2);
/// assert_eq!(bitmap.width(), 3);
/// assert_eq!(bitmap.get(1, 2), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    inner: Arc<BitmapData>,
}

impl Bitmap {
    /// Create an all-zero bitmap with `height` rows and `width` columns.
    ///
    /// Zero-sized bitmaps are allowed; the scanners reject them, as well as
    /// bitmaps with a dimension above [`MAX_DIMENSION`].
    pub fn new(height: u32, width: u32) -> Self {
        Bitmap {
            inner: Arc::new(BitmapData::zeroed(height, width)),
        }
    }

    /// Create a bitmap from a flat row-major cell buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooLarge`] if a dimension exceeds [`MAX_DIMENSION`],
    /// [`Error::ShapeMismatch`] if `cells.len() != height * width`,
    /// or [`Error::InvalidCellValue`] if any cell is not 0 or 1.
    pub fn from_cells(height: u32, width: u32, cells: Vec<u8>) -> Result<Self> {
        if height > MAX_DIMENSION || width > MAX_DIMENSION {
            return Err(Error::TooLarge {
                height,
                width,
                max: MAX_DIMENSION,
            });
        }
        let expected = (height as usize) * (width as usize);
        if cells.len() != expected {
            return Err(Error::ShapeMismatch {
                expected: (height as usize, width as usize),
                actual: (cells.len(), 1),
            });
        }

        if let Some(pos) = cells.iter().position(|&v| v > 1) {
            // width > 0 here: a non-empty buffer matched height * width
            let w = width as usize;
            return Err(Error::InvalidCellValue {
                row: (pos / w) as u32,
                col: (pos % w) as u32,
                value: cells[pos],
            });
        }

        Ok(Bitmap {
            inner: Arc::new(BitmapData {
                height,
                width,
                cells,
            }),
        })
    }

    /// Create a bitmap from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the number of rows differs from
    /// `height` or any row's length differs from `width`, and
    /// [`Error::InvalidCellValue`] if any cell is not 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(height: u32, width: u32, rows: &[R]) -> Result<Self> {
        if rows.len() != height as usize {
            return Err(Error::ShapeMismatch {
                expected: (height as usize, width as usize),
                actual: (rows.len(), rows.first().map_or(0, |r| r.as_ref().len())),
            });
        }

        let mut cells = Vec::with_capacity((height as usize) * (width as usize));
        for row in rows {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::ShapeMismatch {
                    expected: (height as usize, width as usize),
                    actual: (rows.len(), row.len()),
                });
            }
            cells.extend_from_slice(row);
        }

        Self::from_cells(height, width, cells)
    }

    /// Get the number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Check whether the bitmap has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.width == 0 || self.inner.height == 0
    }

    /// Get raw access to the row-major cell buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.cells
    }

    /// Get the cells of one row.
    ///
    /// Returns `None` if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> Option<&[u8]> {
        if row >= self.inner.height {
            return None;
        }
        let start = (row as usize) * (self.inner.width as usize);
        Some(&self.inner.cells[start..start + self.inner.width as usize])
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.inner.height).filter_map(move |r| self.row(r))
    }

    /// Count the 1-cells.
    pub fn count_ones(&self) -> usize {
        self.inner.cells.iter().filter(|&&v| v == 1).count()
    }

    /// Check if two bitmaps have the same height and width.
    pub fn sizes_equal(&self, other: &Bitmap) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Try to convert into a mutable bitmap without copying.
    ///
    /// Fails (returning `self`) if other references to the data exist.
    pub fn try_into_mut(self) -> std::result::Result<BitmapMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(BitmapMut { inner: data }),
            Err(arc) => Err(Bitmap { inner: arc }),
        }
    }

    /// Create a mutable copy of this bitmap.
    pub fn to_mut(&self) -> BitmapMut {
        BitmapMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Create an all-zero bitmap with the same shape.
    pub fn create_template(&self) -> Self {
        Self::new(self.inner.height, self.inner.width)
    }
}

/// Mutable bitmap
///
/// Allows modification of cells. Convert back to an immutable
/// [`Bitmap`] with `Into<Bitmap>` once construction is done.
#[derive(Debug)]
pub struct BitmapMut {
    inner: BitmapData,
}

impl BitmapMut {
    /// Get the number of columns.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the number of rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the row-major cell buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.cells
    }
}

impl From<BitmapMut> for Bitmap {
    fn from(bitmap_mut: BitmapMut) -> Self {
        Bitmap {
            inner: Arc::new(bitmap_mut.inner),
        }
    }
}
