//! Square detection
//!
//! Finds the largest axis-aligned square whose cells are all 1.
//!
//! The scan keeps one row of the classic maximal-square table: `dp[col]`
//! is the side of the largest solid square whose bottom-right corner is
//! at `(row, col)`. A 1-cell extends the smallest of its up, left and
//! up-left neighbours by one. The previous row's value at `col - 1` is
//! carried in a single variable before it is overwritten, so the scan runs
//! in O(rows * cols) time with O(cols) extra space.

use crate::error::{RegionResult, ensure_scannable};
use crate::line::last_offset;
use figsearch_core::{Bitmap, Point};
use tracing::debug;

/// An axis-aligned square region
///
/// The corners are public, so a value may be inverted or have unequal row
/// and column spans. Such a value has [`side`](Square::side) 0 and is never
/// solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    /// Corner with the smallest row and column
    pub top_left: Point,
    /// Corner with the largest row and column
    pub bottom_right: Point,
}

impl Square {
    /// Create a square from its top-left corner and side length (>= 1).
    pub fn new(top_left: Point, side: u32) -> Self {
        let span = last_offset(side);
        Self {
            top_left,
            bottom_right: top_left.offset(span, span),
        }
    }

    /// Create a square from its bottom-right corner and side length (>= 1).
    pub fn from_bottom_right(bottom_right: Point, side: u32) -> Self {
        let span = last_offset(side);
        Self {
            top_left: bottom_right.offset(-span, -span),
            bottom_right,
        }
    }

    /// Side length in cells, or 0 if the corners do not span a square
    pub fn side(&self) -> u32 {
        let rows = i64::from(self.bottom_right.x) - i64::from(self.top_left.x) + 1;
        let cols = i64::from(self.bottom_right.y) - i64::from(self.top_left.y) + 1;
        if rows != cols {
            return 0;
        }
        u32::try_from(rows).unwrap_or(0)
    }

    /// Check that the corners span a square of at least one cell
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.side() > 0
    }

    /// Number of cells covered
    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.side()) * u64::from(self.side())
    }

    /// Check if a point lies inside the square
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y <= self.bottom_right.y
    }

    /// Iterate over the covered cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        (self.top_left.x..=self.bottom_right.x)
            .flat_map(move |x| (self.top_left.y..=self.bottom_right.y).map(move |y| Point::new(x, y)))
    }
}

/// Find the largest solid square
///
/// On a tie in side length the square whose top-left corner comes first
/// in row-major order wins. Returns `None` when the bitmap has no 1-cells.
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`](crate::RegionError::InvalidImage)
/// if the bitmap has no cells.
pub fn largest_square(bitmap: &Bitmap) -> RegionResult<Option<Square>> {
    ensure_scannable(bitmap)?;

    let mut dp = vec![0u32; bitmap.width() as usize];
    let mut best_side = 0u32;
    let mut best_corner = (0u32, 0u32);

    for (row, cells) in bitmap.rows().enumerate() {
        // dp value of the previous row one column to the left
        let mut up_left = 0u32;
        for (col, &cell) in cells.iter().enumerate() {
            let up = dp[col];
            let side = if cell == 0 {
                0
            } else {
                let left = if col > 0 { dp[col - 1] } else { 0 };
                1 + up.min(left).min(up_left)
            };
            up_left = up;
            dp[col] = side;

            // Strictly greater: the first bottom-right corner in row-major
            // order of a maximum square is also the first top-left corner.
            if side > best_side {
                best_side = side;
                best_corner = (row as u32, col as u32);
            }
        }
    }

    let best = (best_side > 0).then(|| {
        Square::from_bottom_right(Point::from_cell(best_corner.0, best_corner.1), best_side)
    });
    debug!(side = best_side, ?best, "largest square");
    Ok(best)
}

/// Check that `square` is a valid square whose cells all lie inside the
/// bitmap and are 1
pub fn is_solid_square(bitmap: &Bitmap, square: &Square) -> bool {
    square.is_valid() && square.cells().all(|p| bitmap.cell_at(p) == Ok(1))
}


/// Property-based checks against an exhaustive search.
#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_bitmap() -> impl Strategy<Value = Bitmap> {
        (1u32..9, 1u32..9).prop_flat_map(|(h, w)| {
            proptest::collection::vec(0u8..=1, (h * w) as usize)
                .prop_map(move |cells| Bitmap::from_cells(h, w, cells).unwrap())
        })
    }

    /// Largest side first, then top-left corners in row-major order.
    fn brute_force(bitmap: &Bitmap) -> Option<Square> {
        let max_side = bitmap.height().min(bitmap.width());
        (1..=max_side).rev().find_map(|side| {
            (0..=bitmap.height() - side).find_map(|row| {
                (0..=bitmap.width() - side)
                    .map(|col| Square::new(Point::from_cell(row, col), side))
                    .find(|sq| is_solid_square(bitmap, sq))
            })
        })
    }

    proptest! {
        #[test]
        fn largest_square_matches_exhaustive_search(bitmap in arb_bitmap()) {
            prop_assert_eq!(largest_square(&bitmap).unwrap(), brute_force(&bitmap));
        }

        #[test]
        fn largest_square_is_none_only_without_ones(bitmap in arb_bitmap()) {
            let found = largest_square(&bitmap).unwrap();
            prop_assert_eq!(found.is_none(), bitmap.count_ones() == 0);
        }
    }
}
