use std::collections::BTreeSet;

use mps_stars::constellations;
use proptest::prelude::*;

fn binomial(n: u64, k: u64) -> u64 {
    let k = k.min(n - k);
    let mut value = 1u64;
    for step in 0..k {
        value = value * (n - step) / (step + 1);
    }
    value
}

proptest! {
    #[test]
    fn family_size_matches_the_bijection(n in 1u32..8) {
        let family = constellations(n).unwrap();
        let expected = binomial(2 * u64::from(n) - 1, u64::from(n) - 1);
        prop_assert_eq!(family.len() as u64, expected);
    }

    #[test]
    fn every_member_has_n_bounded_stars(n in 1u32..7) {
        for constellation in constellations(n).unwrap() {
            prop_assert_eq!(constellation.num_stars(), n as usize);
            prop_assert!(constellation.sizes().iter().all(|&s| (1..=n).contains(&s)));
        }
    }
}

#[test]
fn family_members_are_distinct_multisets() {
    let family = constellations(4).expect("family");
    let distinct: BTreeSet<_> = family.iter().cloned().collect();
    assert_eq!(distinct.len(), family.len());
}
