//! Decomposition orchestration
//!
//! Runs the dimension-lifting loop from the sorted sequence store up to the
//! fixed point:
//!
//! ```text
//! Running(1) --lift, sort, emit--> Running(2) --> ... --> Terminated
//! ```
//!
//! A dimension moves to the next one while its group count differs from its
//! vertex count. The dimension at which they are equal is still emitted.

use anyhow::Result;
use tracing::{debug, info};

use super::config::DecomposeConfiguration;
use super::lifter::{lift_dimension, DimensionSummary};
use crate::dataset::Dataset;
use crate::output::DimensionWriter;
use crate::store::SequenceStore;

/// Driver of the dimension-by-dimension decomposition
pub struct HypercubeDecomposer {
    config: DecomposeConfiguration,
}

impl HypercubeDecomposer {
    /// Create a new decomposer with the given configuration
    pub fn new(config: DecomposeConfiguration) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Run the decomposition, handing each completed dimension to `on_dimension`
    ///
    /// Groups passed to `on_dimension` are sorted. An error from
    /// `on_dimension` aborts the run.
    ///
    /// # Parallelism
    /// The number of threads is controlled by `config.num_threads`:
    /// - `0` — use all available CPU cores (rayon default)
    /// - `N` — use exactly N threads
    ///
    /// # Returns
    /// The summary of every dimension computed, in order
    pub fn run<F>(&self, store: &SequenceStore, on_dimension: F) -> Result<Vec<DimensionSummary>>
    where
        F: FnMut(&DimensionSummary, &Dataset) -> Result<()> + Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.num_threads)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create thread pool: {e}"))?;

        pool.install(|| self.run_inner(store, on_dimension))
    }

    fn run_inner<F>(
        &self,
        store: &SequenceStore,
        mut on_dimension: F,
    ) -> Result<Vec<DimensionSummary>>
    where
        F: FnMut(&DimensionSummary, &Dataset) -> Result<()>,
    {
        self.config.print();
        info!(
            "Decomposing {} genotypes of length {}",
            store.len(),
            store.seq_len()
        );

        let seq_len = store.seq_len();
        let mut dataset = Dataset::seed(store.genotypes().to_vec());
        let mut summaries = Vec::new();
        let mut dimension = 1;

        loop {
            dataset = lift_dimension(&dataset, seq_len);
            dataset.sort_groups();

            let summary = DimensionSummary::from_dataset(dimension, &dataset);
            summary.print_summary(self.config.verbose);
            on_dimension(&summary, &dataset)?;
            summaries.push(summary);

            if summary.is_fixed_point() {
                debug!("Fixed point reached at dimension {}", dimension);
                break;
            }
            if self.config.max_dimension == Some(dimension) {
                info!("Stopping at max_dimension = {}", dimension);
                break;
            }
            dimension += 1;
        }

        Ok(summaries)
    }

    /// Run the decomposition, writing `hypercubes_<d>.txt` for every dimension
    /// into `config.dst_dirname`
    pub fn decompose_to_dir(&self, store: &SequenceStore) -> Result<Vec<DimensionSummary>> {
        let writer = DimensionWriter::create(&self.config.dst_dirname)?;
        self.run(store, |summary, dataset| {
            let path = writer.write_dimension(summary.dimension, dataset)?;
            debug!("Wrote {}", path.display());
            Ok(())
        })
    }

    /// Run the decomposition, keeping every dimension's dataset in memory
    pub fn decompose_in_memory(
        &self,
        store: &SequenceStore,
    ) -> Result<Vec<(DimensionSummary, Dataset)>> {
        let mut dimensions = Vec::new();
        self.run(store, |summary, dataset| {
            dimensions.push((*summary, dataset.clone()));
            Ok(())
        })?;
        Ok(dimensions)
    }
}
