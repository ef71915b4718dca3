//! Per-site state as observed through the grid predicates.

use std::fmt;

/// The observable state of one site.
///
/// `Full` implies open: the grid never reports a closed site as full.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteState {
    /// Not yet opened.
    Closed,
    /// Open but not connected to the top row.
    Open,
    /// Open and connected to the top row through open sites.
    Full,
}

impl SiteState {
    /// Build a state from the two grid predicates.
    ///
    /// `full` is ignored for a closed site.
    pub fn from_flags(open: bool, full: bool) -> Self {
        match (open, full) {
            (false, _) => Self::Closed,
            (true, false) => Self::Open,
            (true, true) => Self::Full,
        }
    }

    /// Whether the site is open (including full).
    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Single-character rendering used by grid dumps: `#` closed,
    /// `.` open, `~` full.
    pub fn glyph(self) -> char {
        match self {
            Self::Closed => '#',
            Self::Open => '.',
            Self::Full => '~',
        }
    }
}

impl fmt::Display for SiteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "closed"),
            Self::Open => write!(f, "open"),
            Self::Full => write!(f, "full"),
        }
    }
}
