#![deny(missing_docs)]
#![doc = "Resolution of numeric sequences into every rank-order permutation \
consistent with their values."]

use std::collections::BTreeMap;

use itertools::Itertools;
use mps_core::Permutation;

/// Resolves a matching sequence into every permutation consistent with its
/// value ordering.
///
/// Zero entries are structurally absent matching sizes and are stripped; a
/// leading 1 is the empty-matching count and carries no ordering
/// information, so it is dropped as well. What remains is the working
/// sequence.
///
/// Distinct values rank by position in the sorted working sequence. A value
/// occurring at m positions owns a block of m consecutive ranks, and every
/// assignment of the block to those positions is consistent, so the group
/// contributes m! branches; the result is the Cartesian product across
/// groups. The tie-break is exact integer ranking; groups of any size are
/// enumerated in full.
///
/// Always returns at least one permutation; an empty working sequence
/// resolves to the empty permutation. Branches assign distinct rank
/// vectors, so the returned vector is duplicate-free; set-level
/// deduplication across sequences is the caller's concern.
pub fn resolve_sequence(entries: &[u64]) -> Vec<Permutation> {
    let working = working_sequence(entries);
    if working.is_empty() {
        return vec![Permutation::empty()];
    }

    // Value -> positions, ascending by value; each group owns the next
    // block of consecutive ranks.
    let mut groups: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    for (position, &value) in working.iter().enumerate() {
        groups.entry(value).or_default().push(position);
    }

    let mut branches: Vec<Vec<Vec<(usize, u32)>>> = Vec::with_capacity(groups.len());
    let mut next_rank = 1u32;
    for positions in groups.values() {
        let block: Vec<u32> = (next_rank..next_rank + positions.len() as u32).collect();
        next_rank += positions.len() as u32;
        let orderings: Vec<Vec<(usize, u32)>> = block
            .iter()
            .copied()
            .permutations(block.len())
            .map(|ordering| positions.iter().copied().zip(ordering).collect())
            .collect();
        branches.push(orderings);
    }

    branches
        .into_iter()
        .multi_cartesian_product()
        .map(|assignment| {
            let mut ranks = vec![0u32; working.len()];
            for group in assignment {
                for (position, rank) in group {
                    ranks[position] = rank;
                }
            }
            Permutation::from_rank_vector(ranks)
        })
        .collect()
}

/// Strips zero entries and a leading empty-matching 1.
fn working_sequence(entries: &[u64]) -> Vec<u64> {
    let mut working: Vec<u64> = entries.iter().copied().filter(|&value| value != 0).collect();
    if working.first() == Some(&1) {
        working.remove(0);
    }
    working
}
