//! Test utilities for Seep development.
//!
//! Provides fixtures for driving a [`PercolationGrid`] through scripted
//! open sequences and comparing its observable state against a compact
//! text picture, plus [`proptest`] strategies for random open sequences.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    arb_grid_opens, grid_state, open_all, parse_state, render_state, scripted_grid,
};
