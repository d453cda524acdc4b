use itertools::Itertools;
use mps_core::Constellation;
use mps_seq::matching_sequence;
use proptest::prelude::*;

/// Direct subset-enumeration oracle: entry i is the sum over i-element
/// subsets of the product of the chosen sizes.
fn subset_oracle(sizes: &[u32]) -> Vec<u64> {
    (0..=sizes.len())
        .map(|cardinality| {
            sizes
                .iter()
                .combinations(cardinality)
                .map(|subset| subset.into_iter().map(|&s| u64::from(s)).product::<u64>())
                .sum()
        })
        .collect()
}

proptest! {
    #[test]
    fn convolution_agrees_with_subset_enumeration(sizes in proptest::collection::vec(1u32..12, 0..8)) {
        let constellation = Constellation::new(sizes.clone()).unwrap();
        let sequence = matching_sequence(&constellation);
        let expected = subset_oracle(constellation.sizes());
        prop_assert_eq!(sequence.entries(), expected.as_slice());
    }

    #[test]
    fn invariant_under_reordering(sizes in proptest::collection::vec(1u32..12, 0..8), seed in any::<u64>()) {
        let mut shuffled = sizes.clone();
        // Cheap deterministic shuffle driven by the seed.
        if !shuffled.is_empty() {
            for idx in (1..shuffled.len()).rev() {
                let swap = (seed.wrapping_mul(idx as u64 + 1) % (idx as u64 + 1)) as usize;
                shuffled.swap(idx, swap);
            }
        }
        let original = Constellation::new(sizes).unwrap();
        let reordered = Constellation::new(shuffled).unwrap();
        prop_assert_eq!(matching_sequence(&original), matching_sequence(&reordered));
    }

    #[test]
    fn length_and_leading_entry(sizes in proptest::collection::vec(1u32..12, 0..8)) {
        let constellation = Constellation::new(sizes).unwrap();
        let sequence = matching_sequence(&constellation);
        prop_assert_eq!(sequence.entries().len(), constellation.num_stars() + 1);
        prop_assert_eq!(sequence.entries()[0], 1);
    }
}

#[test]
fn isomorphic_constellations_share_sequences() {
    let a = Constellation::new(vec![3, 1, 4, 1, 5, 9]).unwrap();
    let b = Constellation::new(vec![9, 5, 4, 3, 1, 1]).unwrap();
    assert_eq!(matching_sequence(&a), matching_sequence(&b));
}
