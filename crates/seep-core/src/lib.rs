//! Core types for the Seep percolation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the forest, grid, and estimator crates: the
//! [`Site`] coordinate type and the per-subsystem error enums, all of
//! which classify into the two-way [`ErrorKind`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod site;

pub use error::{ErrorKind, EstimateError, ForestError, GridError};
pub use site::Site;
