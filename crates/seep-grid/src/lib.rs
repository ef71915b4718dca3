//! Site percolation on an `n`-by-`n` grid for the Seep toolkit.
//!
//! [`PercolationGrid`] opens sites one at a time and answers two questions
//! in near-constant time: does the grid percolate (is there an open path
//! from the top row to the bottom row), and is a given site full (is it
//! connected to the top row through open sites).
//!
//! # Backwash
//!
//! Percolation is detected with a virtual top node and a virtual bottom
//! node in one [`DisjointSetForest`](seep_forest::DisjointSetForest). Once
//! the grid percolates, every open bottom-row site shares a root with the
//! virtual top through the virtual bottom, so that forest cannot answer
//! "is this site full". A second forest with a virtual top only answers
//! fullness; the bottom row is never joined to anything in it except its
//! open neighbours.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod state;

pub use grid::PercolationGrid;
pub use seep_core::{GridError, Site};
pub use state::SiteState;
