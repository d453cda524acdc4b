#![deny(missing_docs)]
#![doc = "Matching sequence computation for constellations."]

use mps_core::{Constellation, MatchingSequence};

/// Computes the matching sequence of a constellation.
///
/// A size-i matching in a disjoint union of stars picks i stars and one edge
/// from each, so entry i is the i-th elementary symmetric polynomial of the
/// star sizes. The coefficients are accumulated by convolving the factors of
/// the product of (1 + s*x) over all star sizes s, one star at a time, which
/// keeps the cost quadratic in the number of stars.
///
/// The result has length `constellation.num_stars() + 1` and entry 0 is 1.
pub fn matching_sequence(constellation: &Constellation) -> MatchingSequence {
    let mut coefficients: Vec<u64> = Vec::with_capacity(constellation.num_stars() + 1);
    coefficients.push(1);
    for &size in constellation.sizes() {
        coefficients.push(0);
        for degree in (1..coefficients.len()).rev() {
            coefficients[degree] += coefficients[degree - 1] * u64::from(size);
        }
    }
    MatchingSequence::from_coefficients(coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mps_core::Constellation;

    #[test]
    fn three_single_edge_stars() {
        let constellation = Constellation::new(vec![1, 1, 1]).expect("constellation");
        assert_eq!(matching_sequence(&constellation).entries(), &[1, 3, 3, 1]);
    }

    #[test]
    fn single_star() {
        let constellation = Constellation::new(vec![5]).expect("constellation");
        assert_eq!(matching_sequence(&constellation).entries(), &[1, 5]);
    }

    #[test]
    fn empty_constellation_counts_only_the_empty_matching() {
        let constellation = Constellation::new(vec![]).expect("constellation");
        assert_eq!(matching_sequence(&constellation).entries(), &[1]);
    }

    #[test]
    fn mixed_sizes() {
        // (1 + 2x)(1 + 3x) = 1 + 5x + 6x^2
        let constellation = Constellation::new(vec![2, 3]).expect("constellation");
        assert_eq!(matching_sequence(&constellation).entries(), &[1, 5, 6]);
    }
}
