//! Disjoint-set forest (union-find) for the Seep percolation toolkit.
//!
//! [`DisjointSetForest`] partitions `n` integer-labelled elements into
//! disjoint trees. `find` compresses paths with an iterative two-pass walk
//! and `union` attaches the smaller tree under the larger one, giving
//! near-constant amortized cost per operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod forest;

pub use forest::DisjointSetForest;
pub use seep_core::ForestError;
