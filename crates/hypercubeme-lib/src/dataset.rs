//! Diagonal groups of one dimension
//!
//! A [`Dataset`] maps every [`DiagonalKey`] discovered at a dimension to the
//! genotypes reached through it. It is rebuilt from scratch at each dimension
//! and dropped once the next dimension has been lifted out of it.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::genotype::Genotype;
use crate::label::DiagonalKey;

/// Mapping from diagonal key to the group of genotypes reached through it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    groups: HashMap<DiagonalKey, Vec<Genotype>>,
}

impl Dataset {
    /// Create an empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimension-0 dataset: the empty key mapped to the whole panel
    pub fn seed(genotypes: Vec<Genotype>) -> Self {
        let mut groups = HashMap::with_capacity(1);
        groups.insert(DiagonalKey::new(), genotypes);
        Self { groups }
    }

    /// Append `genotype` to the group of `key`, creating the group if absent
    #[inline]
    pub fn push(&mut self, key: DiagonalKey, genotype: Genotype) {
        self.groups.entry(key).or_default().push(genotype);
    }

    /// Group of `key`, if present
    pub fn get(&self, key: &DiagonalKey) -> Option<&[Genotype]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of diagonal groups
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Total number of vertices (sum of group sizes)
    pub fn num_vertices(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Size of the largest group
    pub fn max_group_size(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Whether the dataset has no groups
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether every group has collapsed to exactly one vertex
    ///
    /// An empty dataset is at its fixed point too.
    pub fn is_fixed_point(&self) -> bool {
        self.num_groups() == self.num_vertices()
    }

    /// Iterate over groups in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&DiagonalKey, &[Genotype])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Parallel iterator over groups in arbitrary order
    pub fn par_iter(&self) -> impl ParallelIterator<Item = (&DiagonalKey, &Vec<Genotype>)> {
        self.groups.par_iter()
    }

    /// Groups ordered by key
    pub fn sorted_groups(&self) -> Vec<(&DiagonalKey, &[Genotype])> {
        let mut groups: Vec<_> = self.iter().collect();
        groups.par_sort_unstable_by(|a, b| a.0.cmp(b.0));
        groups
    }

    /// Sort the genotypes inside every group
    ///
    /// Pair roles in the next dimension and the order of output lines both
    /// depend on this.
    pub fn sort_groups(&mut self) {
        self.groups
            .par_iter_mut()
            .for_each(|(_, group)| group.sort_unstable());
    }

    /// Merge `other` into `self`, concatenating groups that share a key
    ///
    /// Concatenation order is unspecified; call [`Dataset::sort_groups`]
    /// before relying on group order.
    pub fn merge(mut self, mut other: Dataset) -> Dataset {
        if self.groups.len() < other.groups.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (key, mut group) in other.groups {
            self.groups.entry(key).or_default().append(&mut group);
        }
        self
    }
}
