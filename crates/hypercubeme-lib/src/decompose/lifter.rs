//! Dimension lifting
//!
//! Turns the diagonal groups of dimension `d - 1` into those of dimension
//! `d` by partitioning every group on the positions after its last label.
//!
//! ## Parallelism
//!
//! Groups are independent, so they are partitioned in parallel with rayon.
//! Each worker folds into its own local [`Dataset`]; local datasets are then
//! merged pairwise. Merge order depends on scheduling, so callers must sort
//! the groups of the returned dataset before using or writing it.

use rayon::prelude::*;
use tracing::{debug, info};

use super::partition::partition_diagonal;
use crate::dataset::Dataset;

/// Counters reported for one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionSummary {
    /// Dimension these counters describe (1 = edges)
    pub dimension: usize,
    /// Number of diagonal groups
    pub num_diagonals: usize,
    /// Number of vertices, the sum of all group sizes
    pub num_hypercubes: usize,
    /// Size of the largest group
    pub max_group_size: usize,
}

impl DimensionSummary {
    /// Compute the counters of `dataset`
    pub fn from_dataset(dimension: usize, dataset: &Dataset) -> Self {
        Self {
            dimension,
            num_diagonals: dataset.num_groups(),
            num_hypercubes: dataset.num_vertices(),
            max_group_size: dataset.max_group_size(),
        }
    }

    /// Whether no further dimension can be extracted
    #[inline]
    pub fn is_fixed_point(&self) -> bool {
        self.num_diagonals == self.num_hypercubes
    }

    /// Log the counters via tracing
    pub fn print_summary(&self, verbose: bool) {
        info!(
            "Number of {:2} dimensional diagonals: {:10}",
            self.dimension, self.num_diagonals
        );
        info!(
            "Number of {:2} dimensional hypercubes: {:9}",
            self.dimension, self.num_hypercubes
        );
        if verbose {
            info!("  Largest group: {}", self.max_group_size);
        }
    }
}

/// Lift every diagonal group of `dataset` by one dimension
///
/// Returns the union of the groups found; group contents are unsorted.
pub fn lift_dimension(dataset: &Dataset, seq_len: usize) -> Dataset {
    debug!(
        "Lifting {} groups ({} vertices)",
        dataset.num_groups(),
        dataset.num_vertices()
    );

    dataset
        .par_iter()
        .fold(Dataset::new, |mut local, (key, group)| {
            partition_diagonal(key, group, seq_len, &mut local);
            local
        })
        .reduce(Dataset::new, Dataset::merge)
}
