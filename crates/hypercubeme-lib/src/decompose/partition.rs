//! Recursive divide-and-conquer search for single-position differences
//!
//! Finds every pair of a group that differs at exactly one position of a
//! free range without comparing pairs position by position.
//!
//! ## Algorithm
//!
//! Members are first split by their symbols over the matched range; only
//! members sharing that range can still form an edge. The free range is then
//! halved at `mid`, and since it is unknown which half holds the single
//! differing position, both hypotheses are explored:
//!
//! ```text
//! free = [s, e), mid = (s + e) / 2
//!   differs in right half:  matched = [s, mid),  free = [mid, e)
//!   differs in left half:   matched = [mid, e),  free = [s, mid)
//! ```
//!
//! A free range of one position hands the sub-group to
//! [`add_combinations`]; an empty free range yields nothing. A pair that
//! differs at exactly one position `p` stays together along exactly one
//! path (the one that never fixes the half holding `p`), so it is recorded
//! exactly once. A pair differing at two or more positions is split apart
//! once a fixed half contains one of them.
//!
//! ## Recursion depth
//!
//! Each level halves the free range, so the depth is `⌈log2(L)⌉ + 1`: about
//! 65 frames for the longest representable genotype. No explicit stack is
//! needed.

use std::collections::HashMap;
use std::ops::Range;

use super::combinations::add_combinations;
use crate::dataset::Dataset;
use crate::genotype::Genotype;
use crate::label::DiagonalKey;

/// Record all single-position differences of `group` inside `free`
///
/// Members of `group` must already agree on every position outside
/// `matched` and `free` that matters to the caller. Sub-groups are formed
/// stably, so sorted input stays sorted down to [`add_combinations`].
pub fn partition(
    key: &DiagonalKey,
    group: &[&Genotype],
    matched: Range<usize>,
    free: Range<usize>,
    result: &mut Dataset,
) {
    if group.len() < 2 {
        return;
    }

    if matched.is_empty() {
        explore(key, group, free, result);
        return;
    }

    let mut subgroups: HashMap<&[u8], Vec<&Genotype>> = HashMap::new();
    for &genotype in group {
        subgroups
            .entry(genotype.slice(matched.start, matched.end))
            .or_default()
            .push(genotype);
    }

    for subgroup in subgroups.values() {
        if subgroup.len() > 1 {
            explore(key, subgroup, free.clone(), result);
        }
    }
}

fn explore(key: &DiagonalKey, group: &[&Genotype], free: Range<usize>, result: &mut Dataset) {
    match free.len() {
        0 => {}
        1 => add_combinations(key, group, free.start, result),
        _ => {
            let mid = (free.start + free.end) / 2;
            partition(key, group, free.start..mid, mid..free.end, result);
            partition(key, group, mid..free.end, free.start..mid, result);
        }
    }
}

/// Partition one diagonal group of the previous dimension
///
/// The positions up to and including the last label of `key` are fixed;
/// the search covers the rest of the genotype.
pub fn partition_diagonal(
    key: &DiagonalKey,
    group: &[Genotype],
    seq_len: usize,
    result: &mut Dataset,
) {
    let matched_end = key.next_free_start();
    debug_assert!(matched_end <= seq_len);

    let members: Vec<&Genotype> = group.iter().collect();
    partition(key, &members, 0..matched_end, matched_end..seq_len, result);
}
