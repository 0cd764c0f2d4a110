//! Sorted, length-checked genotype panel
//!
//! The store is built once per run. Sorting happens here and nowhere else:
//! every later stage only ever splits groups stably, so the order established
//! here decides which endpoint of a pair is the `from` side of its label.

use thiserror::Error;
use tracing::debug;

use crate::genotype::Genotype;

/// Error type for building a sequence store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No genotypes were supplied
    #[error("Genotype panel is empty")]
    Empty,
    /// A genotype has no symbols
    #[error("Genotype {index} is empty")]
    EmptyGenotype {
        /// Index of the offending genotype in input order
        index: usize,
    },
    /// Genotypes do not all have the same length
    #[error("Genotype length mismatch at index {index}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Index of the offending genotype in input order
        index: usize,
        /// Length of the first genotype
        expected: usize,
        /// Length of the offending genotype
        actual: usize,
    },
}

/// Lexicographically sorted panel of equal-length genotypes
#[derive(Debug, Clone)]
pub struct SequenceStore {
    genotypes: Vec<Genotype>,
    seq_len: usize,
}

impl SequenceStore {
    /// Validate and sort a panel of genotypes
    ///
    /// Duplicates are kept.
    ///
    /// # Errors
    /// Returns error if the panel is empty, if a genotype is empty, or if
    /// the genotypes do not all share the length of the first one.
    pub fn new<I, G>(genotypes: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = G>,
        G: Into<Genotype>,
    {
        let mut genotypes: Vec<Genotype> = genotypes.into_iter().map(Into::into).collect();

        let seq_len = match genotypes.first() {
            Some(first) => first.len(),
            None => return Err(StoreError::Empty),
        };
        for (index, genotype) in genotypes.iter().enumerate() {
            if genotype.is_empty() {
                return Err(StoreError::EmptyGenotype { index });
            }
            if genotype.len() != seq_len {
                return Err(StoreError::LengthMismatch {
                    index,
                    expected: seq_len,
                    actual: genotype.len(),
                });
            }
        }

        genotypes.sort_unstable();
        debug!(
            "Sequence store: {} genotypes of length {}",
            genotypes.len(),
            seq_len
        );

        Ok(Self { genotypes, seq_len })
    }

    /// Shared genotype length `L`
    #[inline]
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Number of genotypes, duplicates included
    #[inline]
    pub fn len(&self) -> usize {
        self.genotypes.len()
    }

    /// Always false for a constructed store
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genotypes.is_empty()
    }

    /// Genotypes in sorted order
    #[inline]
    pub fn genotypes(&self) -> &[Genotype] {
        &self.genotypes
    }
}
