//! Figure selection
//!
//! Ties the scanners to an explicit figure kind so that callers (the CLI
//! in particular) dispatch on a value instead of on strings.

use crate::error::RegionResult;
use crate::line::{LineRun, Orientation, longest_run};
use crate::square::{Square, largest_square};
use figsearch_core::{Bitmap, Point};
use std::fmt;

/// Kind of figure to search for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    /// Longest run on a single row
    HorizontalLine,
    /// Longest run on a single column
    VerticalLine,
    /// Largest solid square
    Square,
}

impl FigureKind {
    /// Short command-style name (`hline`, `vline`, `square`)
    pub fn name(self) -> &'static str {
        match self {
            FigureKind::HorizontalLine => "hline",
            FigureKind::VerticalLine => "vline",
            FigureKind::Square => "square",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A detected figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    /// A horizontal or vertical run
    Line(LineRun),
    /// A solid square
    Square(Square),
}

impl Figure {
    /// First and last cell of the figure.
    ///
    /// For a line these are the run's start and end; for a square the
    /// top-left and bottom-right corners.
    pub fn endpoints(&self) -> (Point, Point) {
        match self {
            Figure::Line(run) => (run.start, run.end()),
            Figure::Square(square) => (square.top_left, square.bottom_right),
        }
    }

    /// All cells covered by the figure
    pub fn cells(&self) -> Vec<Point> {
        match self {
            Figure::Line(run) => run.cells().collect(),
            Figure::Square(square) => square.cells().collect(),
        }
    }
}

/// Search a bitmap for the requested figure kind
///
/// # Errors
///
/// Returns [`RegionError::InvalidImage`](crate::RegionError::InvalidImage)
/// if the bitmap has no cells.
pub fn find_figure(bitmap: &Bitmap, kind: FigureKind) -> RegionResult<Option<Figure>> {
    let figure = match kind {
        FigureKind::HorizontalLine => {
            longest_run(bitmap, Orientation::Horizontal)?.map(Figure::Line)
        }
        FigureKind::VerticalLine => longest_run(bitmap, Orientation::Vertical)?.map(Figure::Line),
        FigureKind::Square => largest_square(bitmap)?.map(Figure::Square),
    };
    Ok(figure)
}
