//! Error types for the Seep percolation toolkit.
//!
//! Organized by subsystem: forest, grid, and estimator. Every error
//! classifies into an [`ErrorKind`], which maps onto the two caller-facing
//! failure categories: a bad argument at construction time, or an index
//! outside the valid range. Operations validate before they mutate, so an
//! error never leaves a structure partially updated.

use std::error::Error;
use std::fmt;

use crate::site::Site;

/// Coarse classification shared by all Seep errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A size, count, or configuration value is not acceptable
    /// (e.g. zero grid size or zero trials).
    InvalidArgument,
    /// An element index or site coordinate lies outside the valid range.
    IndexOutOfBounds,
    /// Failure of the runtime itself rather than of the caller's input.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::IndexOutOfBounds => write!(f, "index out of bounds"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

// ── ForestError ────────────────────────────────────────────────────

/// Errors from disjoint-set forest construction and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForestError {
    /// Attempted to construct a forest with zero elements.
    Empty,
    /// The element arrays for `len` elements could not be allocated.
    TooLarge {
        /// The requested number of elements.
        len: usize,
    },
    /// An element index is outside `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements in the forest.
        len: usize,
    },
}

impl ForestError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty | Self::TooLarge { .. } => ErrorKind::InvalidArgument,
            Self::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }
}

impl fmt::Display for ForestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "forest must have at least one element"),
            Self::TooLarge { len } => write!(f, "cannot allocate a forest of {len} elements"),
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "element {index} out of bounds: [0, {len})")
            }
        }
    }
}

impl Error for ForestError {}

// ── GridError ──────────────────────────────────────────────────────

/// Errors from percolation grid construction and site access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with side length zero.
    EmptyGrid,
    /// The side length is so large that `n * n + 2` overflows `usize`, or
    /// the site and forest arrays for it cannot be allocated.
    TooLarge {
        /// The requested side length.
        size: usize,
    },
    /// A site coordinate is outside `[0, size) x [0, size)`.
    SiteOutOfBounds {
        /// The offending site.
        site: Site,
        /// Side length of the grid.
        size: usize,
    },
    /// An internal forest operation failed.
    Forest(ForestError),
}

impl GridError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyGrid | Self::TooLarge { .. } => ErrorKind::InvalidArgument,
            Self::SiteOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
            Self::Forest(_) => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid size must be at least 1"),
            Self::TooLarge { size } => {
                write!(f, "grid size {size} is too large to allocate")
            }
            Self::SiteOutOfBounds { site, size } => {
                write!(f, "site {site} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::Forest(e) => write!(f, "forest: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Forest(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ForestError> for GridError {
    fn from(e: ForestError) -> Self {
        Self::Forest(e)
    }
}

// ── EstimateError ──────────────────────────────────────────────────

/// Errors from Monte Carlo threshold estimation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EstimateError {
    /// Estimator configuration or call arguments are invalid.
    InvalidArgument {
        /// Human-readable description of what's wrong.
        reason: String,
    },
    /// Building or driving a trial grid failed.
    Grid(GridError),
    /// A trial worker thread could not be spawned or did not finish.
    WorkerFailed {
        /// Description of the failure.
        reason: String,
    },
}

impl EstimateError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::Grid(e) => e.kind(),
            Self::WorkerFailed { .. } => ErrorKind::Internal,
        }
    }
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::WorkerFailed { reason } => write!(f, "trial worker failed: {reason}"),
        }
    }
}

impl Error for EstimateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for EstimateError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
