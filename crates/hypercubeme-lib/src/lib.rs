// HypercubeME: hypercube decomposition of genotype panels
//
// Splits a panel of equal-length genotypes into diagonal groups of
// growing dimension, from single-position edges up to maximal hypercubes.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod constants;
pub mod genotype;
pub mod label;
pub mod dataset;
pub mod store;
pub mod decompose;
pub mod output;
pub mod verify;

// Re-export common types at crate root
pub use genotype::Genotype;
pub use label::{DiagonalKey, TransitionLabel};
pub use dataset::Dataset;
pub use store::{SequenceStore, StoreError};
pub use decompose::{DecomposeConfiguration, DimensionSummary, HypercubeDecomposer};
pub use output::DimensionWriter;

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}
