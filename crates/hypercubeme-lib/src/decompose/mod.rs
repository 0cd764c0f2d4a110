//! Hypercube decomposition pipeline
//!
//! This module implements the dimension-by-dimension search:
//! 1. Parse the genotype panel into a sorted sequence store
//! 2. Seed dimension 0 with the whole store under the empty diagonal key
//! 3. Lift every diagonal group by one dimension (recursive partitioning,
//!    pair emission at single positions)
//! 4. Sort the groups and emit the dimension
//! 5. Repeat until every group holds exactly one vertex

pub mod combinations;
pub mod config;
pub mod decomposer;
pub mod lifter;
pub mod parse;
pub mod partition;

pub use config::DecomposeConfiguration;
pub use decomposer::HypercubeDecomposer;
pub use lifter::{lift_dimension, DimensionSummary};
pub use parse::load_sequence_store;
