//! Axis-aligned match rectangle.

use std::cmp::Ordering;
use std::fmt;

/// Region of the main image covered by a match.
///
/// `(row1, col1)` is the top-left corner and `(row2, col2)` the bottom-right
/// corner, so `width = col2 - col1` and `height = row2 - row1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MatchRect {
    pub row1: usize,
    pub col1: usize,
    pub row2: usize,
    pub col2: usize,
}

impl MatchRect {
    /// Creates the rectangle of a `width x height` window anchored at `(row, col)`.
    pub fn new(row: usize, col: usize, width: usize, height: usize) -> Self {
        Self {
            row1: row,
            col1: col,
            row2: row + height,
            col2: col + width,
        }
    }

    /// Returns `col2 - col1`.
    pub fn width(&self) -> usize {
        self.col2 - self.col1
    }

    /// Returns `row2 - row1`.
    pub fn height(&self) -> usize {
        self.row2 - self.row1
    }

    /// Returns true unless one rectangle lies entirely above, below, left or
    /// right of the other. Both axes use closed intervals, so rectangles that
    /// only share an edge coordinate intersect.
    pub fn intersects(&self, other: &MatchRect) -> bool {
        !(self.row1 > other.row2
            || self.row2 < other.row1
            || self.col1 > other.col2
            || self.col2 < other.col1)
    }

    /// Returns true when the rectangle fits inside a `width x height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.row2 <= height && self.col2 <= width
    }
}

impl Ord for MatchRect {
    /// Top-to-bottom, then left-to-right.
    fn cmp(&self, other: &Self) -> Ordering {
        self.row1
            .cmp(&other.row1)
            .then_with(|| self.col1.cmp(&other.col1))
            .then_with(|| self.row2.cmp(&other.row2))
            .then_with(|| self.col2.cmp(&other.col2))
    }
}

impl PartialOrd for MatchRect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MatchRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sub-image matched at: {}, {}, {}, {}",
            self.row1, self.col1, self.row2, self.col2
        )
    }
}
