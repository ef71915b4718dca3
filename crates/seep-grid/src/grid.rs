//! The percolation grid and its two union-find forests.

use seep_core::{ForestError, GridError, Site};
use seep_forest::DisjointSetForest;
use smallvec::SmallVec;

use crate::state::SiteState;

/// An `n`-by-`n` grid of sites, each closed or open.
///
/// Sites are addressed 0-based as `(row, col)` with row 0 at the top. A
/// site moves from closed to open at most once; nothing ever closes it
/// again, so [`percolates`](Self::percolates) can only go from `false` to
/// `true`.
///
/// Internally the site at `(row, col)` is element `row * n + col` of two
/// forests:
///
/// - the percolation forest, `n * n + 2` elements, where `n * n` is the
///   virtual top and `n * n + 1` the virtual bottom;
/// - the full-site forest, `n * n + 1` elements, where `n * n` is the
///   virtual top and there is no bottom.
///
/// Top-row sites join the virtual top in both forests. Bottom-row sites
/// join the virtual bottom in the percolation forest only. Adjacent open
/// sites are joined in both.
///
/// # Examples
///
/// ```
/// use seep_grid::PercolationGrid;
///
/// let mut grid = PercolationGrid::new(2).unwrap();
/// grid.open(0, 0).unwrap();
/// grid.open(1, 1).unwrap();
/// assert!(!grid.percolates());
///
/// grid.open(1, 0).unwrap();
/// assert!(grid.percolates());
/// assert!(grid.is_full(1, 1).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct PercolationGrid {
    size: usize,
    open: Vec<bool>,
    open_count: usize,
    percolation: DisjointSetForest,
    full: DisjointSetForest,
}

impl PercolationGrid {
    /// Create an `n`-by-`n` grid with every site closed.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `n` is 0, or
    /// `Err(GridError::TooLarge)` if `n * n + 2` overflows `usize` or the
    /// site and forest arrays cannot be allocated.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::EmptyGrid);
        }
        let too_large = GridError::TooLarge { size: n };
        let sites = n
            .checked_mul(n)
            .filter(|sites| sites.checked_add(2).is_some())
            .ok_or_else(|| too_large.clone())?;
        let mut open = Vec::new();
        open.try_reserve_exact(sites).map_err(|_| too_large.clone())?;
        open.resize(sites, false);
        Ok(Self {
            size: n,
            open,
            open_count: 0,
            percolation: forest(sites + 2, &too_large)?,
            full: forest(sites + 1, &too_large)?,
        })
    }

    /// Side length `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of sites, `n * n`.
    pub fn site_count(&self) -> usize {
        self.open.len()
    }

    /// Open the site at `(row, col)`.
    ///
    /// Returns `Ok(true)` if the site was closed and is now open, `Ok(false)`
    /// if it was already open (no state changes). Coordinates are checked
    /// before anything is touched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.open_site(Site::new(row, col))
    }

    /// [`open`](Self::open) addressed by [`Site`].
    pub fn open_site(&mut self, site: Site) -> Result<bool, GridError> {
        let index = self.index_of(site)?;
        if self.open[index] {
            return Ok(false);
        }
        self.open[index] = true;
        self.open_count += 1;

        let top = self.virtual_top();
        if site.row == 0 {
            self.percolation.union(index, top)?;
            self.full.union(index, top)?;
        }
        if site.row == self.size - 1 {
            // Never mirrored into the full-site forest.
            let bottom = self.virtual_bottom();
            self.percolation.union(index, bottom)?;
        }
        for neighbour in self.neighbours(site) {
            let other = neighbour.flat_index(self.size);
            if self.open[other] {
                self.percolation.union(index, other)?;
                self.full.union(index, other)?;
            }
        }
        Ok(true)
    }

    /// Whether the site at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.is_open_site(Site::new(row, col))
    }

    /// [`is_open`](Self::is_open) addressed by [`Site`].
    pub fn is_open_site(&self, site: Site) -> Result<bool, GridError> {
        let index = self.index_of(site)?;
        Ok(self.open[index])
    }

    /// Whether the site at `(row, col)` is full: open and connected to the
    /// top row through open sites.
    ///
    /// Answered from the full-site forest only, so a bottom-row site is
    /// never reported full merely because the grid percolates elsewhere.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.is_full_site(Site::new(row, col))
    }

    /// [`is_full`](Self::is_full) addressed by [`Site`].
    pub fn is_full_site(&mut self, site: Site) -> Result<bool, GridError> {
        let index = self.index_of(site)?;
        if !self.open[index] {
            return Ok(false);
        }
        let top = self.virtual_top();
        Ok(self.full.connected(index, top)?)
    }

    /// Combined open/full state of the site at `(row, col)`.
    pub fn state(&mut self, row: usize, col: usize) -> Result<SiteState, GridError> {
        let site = Site::new(row, col);
        let open = self.is_open_site(site)?;
        let full = self.is_full_site(site)?;
        Ok(SiteState::from_flags(open, full))
    }

    /// Whether an open path connects the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.virtual_top(), self.virtual_bottom());
        let connected = self.percolation.connected(top, bottom);
        debug_assert!(connected.is_ok(), "virtual nodes out of range: {connected:?}");
        connected.unwrap_or(false)
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of sites that are open, in `[0, 1]`.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.site_count() as f64
    }

    fn virtual_top(&self) -> usize {
        self.open.len()
    }

    fn virtual_bottom(&self) -> usize {
        self.open.len() + 1
    }

    fn index_of(&self, site: Site) -> Result<usize, GridError> {
        if !site.in_bounds(self.size) {
            return Err(GridError::SiteOutOfBounds {
                site,
                size: self.size,
            });
        }
        Ok(site.flat_index(self.size))
    }

    /// In-bounds 4-connected neighbours (N/S/W/E) of `site`.
    fn neighbours(&self, site: Site) -> SmallVec<[Site; 4]> {
        let mut result = SmallVec::new();
        if site.row > 0 {
            result.push(Site::new(site.row - 1, site.col));
        }
        if site.row + 1 < self.size {
            result.push(Site::new(site.row + 1, site.col));
        }
        if site.col > 0 {
            result.push(Site::new(site.row, site.col - 1));
        }
        if site.col + 1 < self.size {
            result.push(Site::new(site.row, site.col + 1));
        }
        result
    }
}

/// Build a forest of `len` elements, reporting allocation failure as
/// `too_large`.
fn forest(len: usize, too_large: &GridError) -> Result<DisjointSetForest, GridError> {
    DisjointSetForest::new(len).map_err(|e| match e {
        ForestError::TooLarge { .. } => too_large.clone(),
        other => other.into(),
    })
}
