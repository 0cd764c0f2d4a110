//! Per-dimension result files
//!
//! # File Format
//!
//! One file per dimension, `hypercubes_<d>.txt`, one line per
//! (diagonal key, genotype) pair:
//!
//! ```text
//! <label>:<label>:...<TAB><genotype>
//! ```
//!
//! Each label renders as `from ++ position ++ to` (e.g. `021`). Lines are
//! ordered by diagonal key, then by genotype inside the group, so two runs
//! over the same panel produce byte-identical files.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::constants::{output_file_name, FIELD_SEPARATOR};
use crate::dataset::Dataset;

/// Write every (key, genotype) line of `dataset`
///
/// Groups must already be sorted (see [`Dataset::sort_groups`]); keys are
/// ordered here.
///
/// # Returns
/// Number of lines written
pub fn write_dataset<W: Write>(writer: &mut W, dataset: &Dataset) -> io::Result<usize> {
    let mut num_lines = 0;
    for (key, group) in dataset.sorted_groups() {
        debug_assert!(group.windows(2).all(|w| w[0] <= w[1]), "unsorted group {}", key);
        for genotype in group {
            key.write_to(writer)?;
            writer.write_all(&[FIELD_SEPARATOR])?;
            writer.write_all(genotype.as_bytes())?;
            writer.write_all(b"\n")?;
            num_lines += 1;
        }
    }
    Ok(num_lines)
}

/// Writes one result file per dimension into a destination directory
#[derive(Debug, Clone)]
pub struct DimensionWriter {
    dst_dir: PathBuf,
}

impl DimensionWriter {
    /// Use `dst_dir` as destination, creating it if missing
    pub fn create<P: AsRef<Path>>(dst_dir: P) -> Result<Self> {
        let dst_dir = dst_dir.as_ref();
        fs::create_dir_all(dst_dir)
            .with_context(|| format!("Failed to create output directory: {}", dst_dir.display()))?;
        Ok(Self {
            dst_dir: dst_dir.to_path_buf(),
        })
    }

    /// Path of the result file for `dimension`
    pub fn path_for(&self, dimension: usize) -> PathBuf {
        self.dst_dir.join(output_file_name(dimension))
    }

    /// Write the result file of `dimension`, replacing any previous one
    ///
    /// # Returns
    /// Path of the written file
    pub fn write_dimension(&self, dimension: usize, dataset: &Dataset) -> Result<PathBuf> {
        let path = self.path_for(dimension);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create result file: {}", path.display()))?;
        let mut writer = BufWriter::with_capacity(1024 * 1024, file);

        write_dataset(&mut writer, dataset)
            .and_then(|_| writer.flush())
            .with_context(|| format!("Failed to write result file: {}", path.display()))?;

        Ok(path)
    }
}
