//! The [`Site`] coordinate type.
//!
//! Sites are addressed 0-based, row-major: `row` 0 is the top edge and
//! `row == n - 1` the bottom edge of an `n`-by-`n` grid. This is the only
//! coordinate convention in the workspace.

use std::fmt;

/// A `(row, col)` position on a square percolation grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Site {
    /// Create a site at `(row, col)`.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this site lies inside an `n`-by-`n` grid.
    pub fn in_bounds(&self, n: usize) -> bool {
        self.row < n && self.col < n
    }

    /// Row-major flat index of this site in an `n`-by-`n` grid.
    ///
    /// Does not check bounds; pair with [`in_bounds`](Self::in_bounds).
    pub fn flat_index(&self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// Inverse of [`flat_index`](Self::flat_index).
    ///
    /// # Panics
    ///
    /// Panics if `n` is 0.
    pub fn from_flat_index(index: usize, n: usize) -> Self {
        Self {
            row: index / n,
            col: index % n,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Site {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
