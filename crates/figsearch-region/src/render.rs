//! Figure rendering
//!
//! Produces a mask bitmap of the same shape as the searched bitmap whose
//! 1-cells are exactly the cells of a detected figure.

use crate::error::{RegionError, RegionResult, ensure_scannable};
use crate::figure::Figure;
use crate::line::Orientation;
use figsearch_core::{Bitmap, Error};

/// Render a figure as a mask over `bitmap`'s shape
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`](crate::RegionError::InvalidImage)
/// for a zero-sized bitmap, [`RegionError::InvalidParameters`] for a square
/// whose corners do not span a square, and a core `OutOfRange` error if
/// the figure does not fit inside the bitmap.
pub fn render_figure(bitmap: &Bitmap, figure: &Figure) -> RegionResult<Bitmap> {
    ensure_scannable(bitmap)?;

    let (origin, rows, cols) = match figure {
        Figure::Line(run) => match run.orientation {
            Orientation::Horizontal => (run.start, 1, run.length),
            Orientation::Vertical => (run.start, run.length, 1),
        },
        Figure::Square(square) => {
            if !square.is_valid() {
                return Err(RegionError::InvalidParameters(format!(
                    "corners {} and {} do not span a square",
                    square.top_left, square.bottom_right
                )));
            }
            (square.top_left, square.side(), square.side())
        }
    };
    let (row, col) = match (u32::try_from(origin.x), u32::try_from(origin.y)) {
        (Ok(row), Ok(col)) => (row, col),
        _ => {
            return Err(Error::OutOfRange {
                row: origin.x.into(),
                col: origin.y.into(),
                height: bitmap.height(),
                width: bitmap.width(),
            }
            .into());
        }
    };

    let mut mask = bitmap.create_template().to_mut();
    mask.fill_rect(row, col, rows, cols)?;
    Ok(mask.into())
}
