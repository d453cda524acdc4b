#![deny(missing_docs)]
#![doc = "Core types for the matching-permutation survey engine."]

use serde::{Deserialize, Serialize};

pub mod errors;

pub use errors::{ErrorInfo, MpsError};

/// A constellation: a disjoint union of stars, recorded as the multiset of
/// star edge-counts.
///
/// The sizes are sorted at construction, so two orderings of the same
/// multiset compare equal and serialize identically. Every size is strictly
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Constellation(Vec<u32>);

impl Constellation {
    /// Builds a constellation from star sizes, rejecting zero sizes.
    pub fn new(mut sizes: Vec<u32>) -> Result<Self, MpsError> {
        if let Some(position) = sizes.iter().position(|&size| size == 0) {
            return Err(MpsError::Constellation(
                ErrorInfo::new("zero-star-size", "star sizes must be strictly positive")
                    .with_context("position", position.to_string()),
            ));
        }
        sizes.sort_unstable();
        Ok(Self(sizes))
    }

    /// Returns the star sizes in canonical (ascending) order.
    pub fn sizes(&self) -> &[u32] {
        &self.0
    }

    /// Returns the number of stars.
    pub fn num_stars(&self) -> usize {
        self.0.len()
    }
}

/// Counts of matchings by size for some graph, indexed from zero.
///
/// Entry 0 is always 1 (the empty matching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSequence(Vec<u64>);

impl MatchingSequence {
    /// Wraps an explicit entry list, enforcing the leading 1.
    pub fn from_entries(entries: Vec<u64>) -> Result<Self, MpsError> {
        match entries.first() {
            Some(1) => Ok(Self(entries)),
            Some(other) => Err(MpsError::Sequence(
                ErrorInfo::new("bad-empty-count", "entry 0 must count the empty matching")
                    .with_context("entry0", other.to_string()),
            )),
            None => Err(MpsError::Sequence(ErrorInfo::new(
                "empty-sequence",
                "a matching sequence has at least the empty-matching entry",
            ))),
        }
    }

    /// Wraps coefficients already known to start with the empty-matching 1.
    ///
    /// Callers guarantee the leading entry; this is checked only in debug
    /// builds.
    pub fn from_coefficients(entries: Vec<u64>) -> Self {
        debug_assert_eq!(entries.first(), Some(&1));
        Self(entries)
    }

    /// Returns the raw entries.
    pub fn entries(&self) -> &[u64] {
        &self.0
    }
}

/// A permutation of 1..=k in one-line notation.
///
/// Orders lexicographically so it can key a `BTreeSet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Permutation(Vec<u32>);

impl Permutation {
    /// Builds a permutation from one-line notation, validating that the
    /// entries are exactly 1..=k with no repeats or gaps.
    pub fn from_one_line(images: Vec<u32>) -> Result<Self, MpsError> {
        if !is_one_line(&images) {
            return Err(MpsError::Sequence(
                ErrorInfo::new("not-a-permutation", "entries must be a permutation of 1..=k")
                    .with_context("len", images.len().to_string()),
            ));
        }
        Ok(Self(images))
    }

    /// Wraps a rank vector already known to be a permutation of 1..=k.
    ///
    /// Callers guarantee validity; this is checked only in debug builds.
    pub fn from_rank_vector(ranks: Vec<u32>) -> Self {
        debug_assert!(is_one_line(&ranks));
        Self(ranks)
    }

    /// The empty permutation (k = 0).
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Returns the one-line notation entries.
    pub fn one_line(&self) -> &[u32] {
        &self.0
    }

    /// Returns k, the number of ranked positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true for the empty permutation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_one_line(images: &[u32]) -> bool {
    let mut seen = vec![false; images.len()];
    for &image in images {
        let Some(slot) = (image as usize).checked_sub(1) else {
            return false;
        };
        if slot >= seen.len() || seen[slot] {
            return false;
        }
        seen[slot] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constellation_canonical_order() {
        let a = Constellation::new(vec![3, 1, 4, 1, 5, 9]).expect("constellation");
        let b = Constellation::new(vec![9, 5, 4, 3, 1, 1]).expect("constellation");
        assert_eq!(a, b);
        assert_eq!(a.sizes(), &[1, 1, 3, 4, 5, 9]);
    }

    #[test]
    fn constellation_rejects_zero_sizes() {
        let err = Constellation::new(vec![2, 0, 1]).unwrap_err();
        assert_eq!(err.info().code, "zero-star-size");
    }

    #[test]
    fn matching_sequence_requires_leading_one() {
        assert!(MatchingSequence::from_entries(vec![1, 3, 3, 1]).is_ok());
        let err = MatchingSequence::from_entries(vec![2, 3]).unwrap_err();
        assert_eq!(err.info().code, "bad-empty-count");
        assert!(MatchingSequence::from_entries(vec![]).is_err());
    }

    #[test]
    fn permutation_validation() {
        assert!(Permutation::from_one_line(vec![2, 4, 3, 1]).is_ok());
        assert!(Permutation::from_one_line(vec![]).is_ok());
        assert!(Permutation::from_one_line(vec![1, 1]).is_err());
        assert!(Permutation::from_one_line(vec![2, 3]).is_err());
        assert!(Permutation::from_one_line(vec![0, 1]).is_err());
    }
}
