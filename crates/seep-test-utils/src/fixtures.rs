//! Reusable grid fixtures.
//!
//! Expected states are written as one string per row using the
//! [`SiteState::glyph`] alphabet: `#` closed, `.` open, `~` full.
//!
//! ```
//! use seep_test_utils::{parse_state, scripted_grid, grid_state};
//!
//! let mut grid = scripted_grid(2, &[(0, 0), (1, 1)]);
//! assert_eq!(grid_state(&mut grid), parse_state(&["~#", "#."]));
//! ```

use proptest::prelude::*;
use seep_grid::{PercolationGrid, SiteState};

/// Open every `(row, col)` in order, panicking on an out-of-bounds site.
pub fn open_all(grid: &mut PercolationGrid, sites: &[(usize, usize)]) {
    for &(row, col) in sites {
        grid.open(row, col)
            .unwrap_or_else(|e| panic!("open({row}, {col}) failed: {e}"));
    }
}

/// A fresh `n`-by-`n` grid with `sites` opened in order.
pub fn scripted_grid(n: usize, sites: &[(usize, usize)]) -> PercolationGrid {
    let mut grid = PercolationGrid::new(n).expect("fixture grid size must be positive");
    open_all(&mut grid, sites);
    grid
}

/// Observable state of every site, row-major.
pub fn grid_state(grid: &mut PercolationGrid) -> Vec<Vec<SiteState>> {
    let n = grid.size();
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| grid.state(row, col).expect("in-bounds site"))
                .collect()
        })
        .collect()
}

/// Parse a text picture into a state matrix.
///
/// Panics on any character outside `#`, `.`, `~`.
pub fn parse_state(rows: &[&str]) -> Vec<Vec<SiteState>> {
    rows.iter()
        .map(|row| {
            row.chars()
                .map(|ch| match ch {
                    '#' => SiteState::Closed,
                    '.' => SiteState::Open,
                    '~' => SiteState::Full,
                    other => panic!("unknown site glyph {other:?}"),
                })
                .collect()
        })
        .collect()
}

/// Render a state matrix back to text, one line per row.
pub fn render_state(state: &[Vec<SiteState>]) -> String {
    state
        .iter()
        .map(|row| row.iter().map(|s| s.glyph()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A grid side length in `1..max_n` paired with up to `max_opens` in-bounds
/// sites to open.
pub fn arb_grid_opens(
    max_n: usize,
    max_opens: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1..max_n).prop_flat_map(move |n| {
        let opens = prop::collection::vec((0..n, 0..n), 0..max_opens);
        (Just(n), opens)
    })
}
