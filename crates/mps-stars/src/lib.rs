#![deny(missing_docs)]
#![doc = "Constellation family enumeration via the stars-and-bars bijection."]

use itertools::Itertools;
use mps_core::{Constellation, ErrorInfo, MpsError};

/// Enumerates the constellation search space for the size bound `n`.
///
/// Every choice of n-1 divider positions among 2n-1 slots encodes a
/// composition (c_1, ..., c_n) of n; c_k is read as "c_k stars of size k".
/// The family therefore holds C(2n-1, n-1) constellations, each with exactly
/// n stars of size at most n. This is the lower-bound search space: the full
/// family of constellations with matching number n is infinite.
pub fn constellations(n: u32) -> Result<Vec<Constellation>, MpsError> {
    if n == 0 {
        return Err(MpsError::Constellation(
            ErrorInfo::new("empty-bound", "constellation enumeration requires n >= 1")
                .with_hint("the survey starts at n = 1 (a single one-edge star)"),
        ));
    }
    let parts = n as usize;
    let slots = 2 * parts - 1;
    let mut family = Vec::new();
    for dividers in (0..slots).combinations(parts - 1) {
        let mut sizes = Vec::with_capacity(parts);
        let mut consumed = 0usize;
        for (part, &divider) in dividers.iter().enumerate() {
            push_stars(&mut sizes, part + 1, divider - consumed);
            consumed = divider + 1;
        }
        push_stars(&mut sizes, parts, slots - consumed);
        family.push(Constellation::new(sizes)?);
    }
    Ok(family)
}

fn push_stars(sizes: &mut Vec<u32>, size: usize, copies: usize) {
    for _ in 0..copies {
        sizes.push(size as u32);
    }
}
