//! Configuration for hypercube decomposition
//!
//! Parameters for the dimension-lifting run: thread pool size, an optional
//! dimension cap and where result files go.

use crate::constants::DEFAULT_DST_DIRNAME;
use std::path::PathBuf;

/// Configuration parameters for a decomposition run
#[derive(Debug, Clone)]
pub struct DecomposeConfiguration {
    /// Number of threads for parallel operations (0 = all available cores)
    pub num_threads: usize,

    /// Stop after this many dimensions even if the fixed point has not been
    /// reached (None = run to the fixed point)
    pub max_dimension: Option<usize>,

    /// Directory receiving one result file per dimension
    pub dst_dirname: PathBuf,

    /// Log extra per-dimension statistics
    pub verbose: bool,
}

impl Default for DecomposeConfiguration {
    fn default() -> Self {
        Self {
            num_threads: 0,
            max_dimension: None,
            dst_dirname: PathBuf::from(DEFAULT_DST_DIRNAME),
            verbose: false,
        }
    }
}

impl DecomposeConfiguration {
    /// Create a configuration writing into `dst_dirname`
    pub fn new(dst_dirname: impl Into<PathBuf>) -> Result<Self, String> {
        let config = Self {
            dst_dirname: dst_dirname.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.max_dimension == Some(0) {
            return Err("max_dimension must be at least 1".to_string());
        }

        if self.dst_dirname.as_os_str().is_empty() {
            return Err("destination directory must not be empty".to_string());
        }

        Ok(())
    }

    /// Log configuration parameters via tracing
    pub fn print(&self) {
        tracing::info!("Decompose Configuration:");
        if self.num_threads == 0 {
            tracing::info!("  num_threads = all available cores");
        } else {
            tracing::info!("  num_threads = {}", self.num_threads);
        }
        match self.max_dimension {
            Some(d) => tracing::info!("  max_dimension = {}", d),
            None => tracing::info!("  max_dimension = until fixed point"),
        }
        tracing::info!("  dst_dirname = {:?}", self.dst_dirname);
        tracing::debug!("  verbose = {}", self.verbose);
    }
}
