//! Line detection
//!
//! This module finds maximal runs of 1-cells along one axis of a bitmap.
//! A run starts at the first 1-cell after a 0-cell (or the start of the
//! axis) and closes at the next 0-cell (or the end of the axis).
//!
//! Runs are produced in scan order:
//!
//! - [`Orientation::Horizontal`]: row-major (increasing row, then column)
//! - [`Orientation::Vertical`]: column-major (increasing column, then row)

use crate::error::{RegionResult, ensure_scannable};
use figsearch_core::{Bitmap, Point};
use tracing::{debug, trace};

/// Offset from the first to the last of `length` cells.
///
/// Saturates at `i32::MAX`, which no bitmap accepted by the scanners reaches.
pub(crate) fn last_offset(length: u32) -> i32 {
    i32::try_from(length.saturating_sub(1)).unwrap_or(i32::MAX)
}

/// Axis along which runs are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Runs lie on a single row
    #[default]
    Horizontal,
    /// Runs lie on a single column
    Vertical,
}

impl Orientation {
    /// Number of fixed-axis lines and cells per line for this orientation.
    fn extents(self, bitmap: &Bitmap) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (bitmap.height(), bitmap.width()),
            Orientation::Vertical => (bitmap.width(), bitmap.height()),
        }
    }

    /// Bitmap coordinates of position `pos` on fixed-axis line `fixed`.
    #[inline]
    fn cell(self, fixed: u32, pos: u32) -> (u32, u32) {
        match self {
            Orientation::Horizontal => (fixed, pos),
            Orientation::Vertical => (pos, fixed),
        }
    }
}

/// A maximal run of 1-cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRun {
    /// First cell of the run
    pub start: Point,
    /// Number of cells in the run (at least 1)
    pub length: u32,
    /// Axis the run lies on
    pub orientation: Orientation,
}

impl LineRun {
    /// Create a new run
    pub fn new(start: Point, length: u32, orientation: Orientation) -> Self {
        Self {
            start,
            length,
            orientation,
        }
    }

    /// Last cell of the run.
    ///
    /// A horizontal run keeps `x` fixed and extends `y`; a vertical run
    /// keeps `y` fixed and extends `x`.
    pub fn end(&self) -> Point {
        let span = last_offset(self.length);
        match self.orientation {
            Orientation::Horizontal => self.start.offset(0, span),
            Orientation::Vertical => self.start.offset(span, 0),
        }
    }

    /// Iterate over the cells covered by the run, start to end.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.length).map(move |i| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            match self.orientation {
                Orientation::Horizontal => self.start.offset(0, i),
                Orientation::Vertical => self.start.offset(i, 0),
            }
        })
    }
}

/// Iterator over the maximal runs of a bitmap in scan order
///
/// Created by [`runs`].
#[derive(Debug, Clone)]
pub struct Runs<'a> {
    bitmap: &'a Bitmap,
    orientation: Orientation,
    /// Current fixed-axis line
    fixed: u32,
    /// Next position to examine on the current line
    pos: u32,
    fixed_len: u32,
    scan_len: u32,
}

impl Runs<'_> {
    #[inline]
    fn is_set(&self, pos: u32) -> bool {
        let (row, col) = self.orientation.cell(self.fixed, pos);
        self.bitmap.get_unchecked(row, col) == 1
    }
}

impl Iterator for Runs<'_> {
    type Item = LineRun;

    fn next(&mut self) -> Option<LineRun> {
        while self.fixed < self.fixed_len {
            while self.pos < self.scan_len && !self.is_set(self.pos) {
                self.pos += 1;
            }

            if self.pos >= self.scan_len {
                self.fixed += 1;
                self.pos = 0;
                continue;
            }

            let start = self.pos;
            while self.pos < self.scan_len && self.is_set(self.pos) {
                self.pos += 1;
            }

            let (row, col) = self.orientation.cell(self.fixed, start);
            return Some(LineRun::new(
                Point::from_cell(row, col),
                self.pos - start,
                self.orientation,
            ));
        }
        None
    }
}

/// Iterate over every maximal run along `orientation`
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`](crate::RegionError::InvalidImage)
/// if the bitmap has no cells.
pub fn runs(bitmap: &Bitmap, orientation: Orientation) -> RegionResult<Runs<'_>> {
    ensure_scannable(bitmap)?;
    let (fixed_len, scan_len) = orientation.extents(bitmap);
    Ok(Runs {
        bitmap,
        orientation,
        fixed: 0,
        pos: 0,
        fixed_len,
        scan_len,
    })
}

/// Collect every maximal run along `orientation`, in scan order
pub fn find_all_runs(bitmap: &Bitmap, orientation: Orientation) -> RegionResult<Vec<LineRun>> {
    Ok(runs(bitmap, orientation)?.collect())
}

/// Find the longest run along `orientation`
///
/// On a length tie the run found first in scan order is kept.
/// Returns `None` when the bitmap has no 1-cells.
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`](crate::RegionError::InvalidImage)
/// if the bitmap has no cells.
pub fn longest_run(bitmap: &Bitmap, orientation: Orientation) -> RegionResult<Option<LineRun>> {
    let mut best: Option<LineRun> = None;
    let mut count = 0usize;

    for run in runs(bitmap, orientation)? {
        trace!(?run, "run");
        count += 1;
        if best.is_none_or(|b| run.length > b.length) {
            best = Some(run);
        }
    }

    debug!(?orientation, runs = count, ?best, "longest run");
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegionError;
    use figsearch_core::MAX_DIMENSION;

    fn bitmap(rows: &[&[u8]]) -> Bitmap {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        Bitmap::from_rows(height, width, rows).unwrap()
    }

    #[test]
    fn test_all_ones_first_row_wins() {
        let b = bitmap(&[&[1, 1, 1], &[1, 1, 1], &[1, 1, 1]]);
        let run = longest_run(&b, Orientation::Horizontal).unwrap().unwrap();
        assert_eq!(run.start, Point::new(0, 0));
        assert_eq!(run.end(), Point::new(0, 2));
        assert_eq!(run.length, 3);

        let run = longest_run(&b, Orientation::Vertical).unwrap().unwrap();
        assert_eq!(run.start, Point::new(0, 0));
        assert_eq!(run.end(), Point::new(2, 0));
    }

    #[test]
    fn test_end_of_long_run_saturates() {
        let run = LineRun::new(Point::new(0, 0), MAX_DIMENSION, Orientation::Horizontal);
        assert_eq!(run.end(), Point::new(0, i32::MAX - 1));
        let run = LineRun::new(Point::new(0, 0), u32::MAX, Orientation::Vertical);
        assert_eq!(run.end(), Point::new(i32::MAX, 0));
        assert_eq!(last_offset(0), 0);
    }

    #[test]
    fn test_tie_broken_by_scan_order() {
        let b = bitmap(&[&[1, 1, 0, 1, 1]]);
        let run = longest_run(&b, Orientation::Horizontal).unwrap().unwrap();
        assert_eq!((run.start, run.end()), (Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    fn test_longer_later_run_replaces() {
        let b = bitmap(&[&[1, 0, 1, 1, 1, 0, 1, 1]]);
        let run = longest_run(&b, Orientation::Horizontal).unwrap().unwrap();
        assert_eq!(run.start, Point::new(0, 2));
        assert_eq!(run.length, 3);
    }

    #[test]
    fn test_all_zero_not_found() {
        let b = Bitmap::new(4, 4);
        assert_eq!(longest_run(&b, Orientation::Horizontal).unwrap(), None);
        assert_eq!(longest_run(&b, Orientation::Vertical).unwrap(), None);
        assert!(find_all_runs(&b, Orientation::Horizontal).unwrap().is_empty());
    }

    #[test]
    fn test_single_cells_are_lines() {
        let b = bitmap(&[&[1, 0], &[0, 1]]);
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let run = longest_run(&b, orientation).unwrap().unwrap();
            assert_eq!(run.length, 1);
            assert_eq!(run.start, Point::new(0, 0));
            assert_eq!(run.end(), Point::new(0, 0));
        }
    }

    #[test]
    fn test_vertical_runs_column_major() {
        let b = bitmap(&[&[0, 1, 1], &[1, 1, 0], &[1, 0, 1], &[0, 0, 1]]);
        let all = find_all_runs(&b, Orientation::Vertical).unwrap();
        let spans: Vec<_> = all.iter().map(|r| (r.start, r.end())).collect();
        assert_eq!(
            spans,
            vec![
                (Point::new(1, 0), Point::new(2, 0)),
                (Point::new(0, 1), Point::new(1, 1)),
                (Point::new(0, 2), Point::new(0, 2)),
                (Point::new(2, 2), Point::new(3, 2)),
            ]
        );
        let best = longest_run(&b, Orientation::Vertical).unwrap().unwrap();
        assert_eq!(best.start, Point::new(1, 0));
    }

    #[test]
    fn test_horizontal_runs_row_major() {
        let b = bitmap(&[&[1, 1, 0, 1], &[0, 0, 0, 0], &[0, 1, 1, 1]]);
        let all = find_all_runs(&b, Orientation::Horizontal).unwrap();
        let starts: Vec<_> = all.iter().map(|r| (r.start, r.length)).collect();
        assert_eq!(
            starts,
            vec![
                (Point::new(0, 0), 2),
                (Point::new(0, 3), 1),
                (Point::new(2, 1), 3)
            ]
        );
    }

    #[test]
    fn test_run_closes_at_end_of_axis() {
        let b = bitmap(&[&[0, 1, 1, 1]]);
        let run = longest_run(&b, Orientation::Horizontal).unwrap().unwrap();
        assert_eq!(run.start, Point::new(0, 1));
        assert_eq!(run.end(), Point::new(0, 3));
    }

    #[test]
    fn test_empty_bitmap_is_invalid() {
        let b = Bitmap::new(0, 3);
        assert!(matches!(
            longest_run(&b, Orientation::Horizontal),
            Err(RegionError::InvalidImage {
                height: 0,
                width: 3
            })
        ));
        assert!(runs(&Bitmap::new(2, 0), Orientation::Vertical).is_err());
    }

    #[test]
    fn test_cells() {
        let run = LineRun::new(Point::new(1, 2), 3, Orientation::Vertical);
        let cells: Vec<_> = run.cells().collect();
        assert_eq!(
            cells,
            vec![Point::new(1, 2), Point::new(2, 2), Point::new(3, 2)]
        );
    }
}
