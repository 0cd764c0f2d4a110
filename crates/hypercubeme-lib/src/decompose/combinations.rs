//! Pair emission at a single position
//!
//! Base case of the partitioner. Every member of the group agrees with
//! every other member everywhere except, possibly, at `position`, so each
//! pair whose symbols differ there is one hypercube edge.

use crate::dataset::Dataset;
use crate::genotype::Genotype;
use crate::label::{DiagonalKey, TransitionLabel};

/// Record one diagonal entry for every pair of `group` that differs at `position`
///
/// `group` must be in sorted order: for a pair `(j, i)` with `j < i` the
/// label reads `group[j][position] -> group[i][position]` and `group[i]` is
/// appended to the group of `key + label` in `result`. Pairs with equal
/// symbols at `position` (literal duplicates) are skipped.
///
/// Quadratic in the group size; groups reaching this point are tiny
/// (two members, or at most one per symbol of the alphabet plus duplicates).
pub fn add_combinations(
    key: &DiagonalKey,
    group: &[&Genotype],
    position: usize,
    result: &mut Dataset,
) {
    debug_assert!(
        agree_outside(group, position),
        "group reaching position {} disagrees elsewhere",
        position
    );

    for i in 1..group.len() {
        let to = group[i].symbol(position);
        for j in 0..i {
            let from = group[j].symbol(position);
            if from == to {
                continue;
            }
            let label = TransitionLabel::new(from, position, to);
            result.push(key.extended(label), group[i].clone());
        }
    }
}

/// Whether all members share every symbol except the one at `position`
fn agree_outside(group: &[&Genotype], position: usize) -> bool {
    let Some(first) = group.first() else {
        return true;
    };
    let len = first.len();
    group.iter().all(|g| {
        g.len() == len
            && g.slice(0, position) == first.slice(0, position)
            && g.slice(position + 1, len) == first.slice(position + 1, len)
    })
}
