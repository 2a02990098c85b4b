//! Result formatting
//!
//! Converts a detected figure into the fixed `x1 y1 x2 y2` coordinate
//! tuple, or into the `Not found` sentinel. Formatting is pure: writing
//! the text to a stream is left to the caller.

use crate::figure::Figure;
use crate::line::LineRun;
use crate::square::Square;
use figsearch_core::Point;
use std::fmt;

/// Text emitted when no figure of the requested kind exists
pub const NOT_FOUND: &str = "Not found";

/// Formatted outcome of a figure search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureReport {
    /// A figure spanning `start` to `end`
    Found { start: Point, end: Point },
    /// No figure of the requested kind
    NotFound,
}

impl FigureReport {
    /// The four output integers `(start.x, start.y, end.x, end.y)`
    pub fn coordinates(&self) -> Option<[i32; 4]> {
        match *self {
            FigureReport::Found { start, end } => Some([start.x, start.y, end.x, end.y]),
            FigureReport::NotFound => None,
        }
    }

    /// Check whether a figure was found
    pub fn is_found(&self) -> bool {
        matches!(self, FigureReport::Found { .. })
    }
}

impl fmt::Display for FigureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureReport::Found { start, end } => write!(f, "{} {}", start, end),
            FigureReport::NotFound => f.write_str(NOT_FOUND),
        }
    }
}

/// Format the result of any figure search
pub fn format_figure(figure: Option<&Figure>) -> FigureReport {
    match figure {
        Some(figure) => {
            let (start, end) = figure.endpoints();
            FigureReport::Found { start, end }
        }
        None => FigureReport::NotFound,
    }
}

/// Format the result of a line search
pub fn format_line(run: Option<&LineRun>) -> FigureReport {
    format_figure(run.map(|r| Figure::Line(*r)).as_ref())
}

/// Format the result of a square search
pub fn format_square(square: Option<&Square>) -> FigureReport {
    format_figure(square.map(|s| Figure::Square(*s)).as_ref())
}
