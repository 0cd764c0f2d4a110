//! Brute-force reference for dimension 1
//!
//! Compares every pair of genotypes directly. Quadratic in the panel size,
//! so only meant for checking the partitioner on small and medium panels.

use tracing::debug;

use crate::dataset::Dataset;
use crate::genotype::Genotype;
use crate::label::{DiagonalKey, TransitionLabel};
use crate::store::SequenceStore;

/// Dimension-1 dataset built by pairwise comparison
///
/// For every pair `(a, b)` of the sorted store with `a` before `b` that
/// differs at exactly one position `p`, `b` is recorded under the label
/// `a[p] -> b[p]`. Groups are sorted.
pub fn pairwise_edges(store: &SequenceStore) -> Dataset {
    let genotypes = store.genotypes();
    let mut dataset = Dataset::new();

    for (i, a) in genotypes.iter().enumerate() {
        for b in &genotypes[i + 1..] {
            if a.hamming_distance(b) != 1 {
                continue;
            }
            if let Some(position) = (0..a.len()).find(|&p| a.symbol(p) != b.symbol(p)) {
                let label = TransitionLabel::new(a.symbol(position), position, b.symbol(position));
                dataset.push(DiagonalKey::new().extended(label), b.clone());
            }
        }
    }

    dataset.sort_groups();
    debug!(
        "Pairwise reference: {} diagonals, {} edges",
        dataset.num_groups(),
        dataset.num_vertices()
    );
    dataset
}

/// Outcome of comparing a computed dataset with a reference one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeCheck {
    /// Number of (key, genotype) entries in the reference
    pub num_expected: usize,
    /// Entries of the reference absent from the computed dataset
    pub missing: Vec<(DiagonalKey, Genotype)>,
    /// Entries of the computed dataset absent from the reference
    pub unexpected: Vec<(DiagonalKey, Genotype)>,
}

impl EdgeCheck {
    /// Whether both datasets hold exactly the same entries
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Compare two datasets entry by entry, as multisets
pub fn compare_datasets(expected: &Dataset, actual: &Dataset) -> EdgeCheck {
    let expected = entries(expected);
    let actual = entries(actual);

    let mut check = EdgeCheck {
        num_expected: expected.len(),
        ..EdgeCheck::default()
    };

    let (mut i, mut j) = (0, 0);
    while i < expected.len() && j < actual.len() {
        match expected[i].cmp(&actual[j]) {
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
            std::cmp::Ordering::Less => {
                check.missing.push(expected[i].clone());
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                check.unexpected.push(actual[j].clone());
                j += 1;
            }
        }
    }
    check.missing.extend_from_slice(&expected[i..]);
    check.unexpected.extend_from_slice(&actual[j..]);
    check
}

fn entries(dataset: &Dataset) -> Vec<(DiagonalKey, Genotype)> {
    let mut entries: Vec<(DiagonalKey, Genotype)> = dataset
        .iter()
        .flat_map(|(key, group)| group.iter().map(move |g| (key.clone(), g.clone())))
        .collect();
    entries.sort_unstable();
    entries
}
