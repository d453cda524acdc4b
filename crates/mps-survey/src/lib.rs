#![deny(missing_docs)]
#![doc = "Survey driver composing constellation enumeration, matching \
sequences and rank resolution into per-size permutation sets."]

use std::collections::BTreeSet;

use mps_core::{ErrorInfo, MpsError, Permutation};
use mps_rank::resolve_sequence;
use mps_seq::matching_sequence;
use mps_stars::constellations;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Report assembly for surveyed size ranges.
pub mod report;
/// Canonical JSON helpers for survey reports.
pub mod serde_io;

pub use report::{SurveyCount, SurveySummary};
pub use serde_io::{from_json_slice, to_canonical_json_bytes};

/// Options governing survey execution.
#[derive(Debug, Clone)]
pub struct SurveyOpts {
    /// Number of worker threads; 0 lets the pool size itself.
    pub threads: usize,
}

impl Default for SurveyOpts {
    fn default() -> Self {
        Self { threads: 0 }
    }
}

/// Permutation set realized by the constellation family for one size bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyResult {
    /// The surveyed size bound.
    pub n: u32,
    /// Number of constellations in the family.
    pub family_size: usize,
    /// Deduplicated matching permutations realized by the family.
    pub permutations: BTreeSet<Permutation>,
}

impl SurveyResult {
    /// Number of distinct matching permutations found.
    pub fn distinct_permutations(&self) -> usize {
        self.permutations.len()
    }
}

/// Surveys the constellation family for `n` and collects every matching
/// permutation it realizes.
///
/// Each constellation is an independent unit of work: its matching sequence
/// is computed, resolved into permutations, and the per-thread sets are
/// merged at the end. Deduplication across constellations (and across
/// tie-break branches) happens in this merge.
pub fn survey(n: u32, opts: &SurveyOpts) -> Result<SurveyResult, MpsError> {
    let family = constellations(n)?;
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(opts.threads)
        .build()
        .map_err(|err| MpsError::Survey(ErrorInfo::new("thread-pool", err.to_string())))?;

    let permutations = pool.install(|| {
        family
            .par_iter()
            .fold(BTreeSet::new, |mut acc, constellation| {
                let sequence = matching_sequence(constellation);
                acc.extend(resolve_sequence(sequence.entries()));
                acc
            })
            .reduce(BTreeSet::new, |mut left, right| {
                left.extend(right);
                left
            })
    });

    Ok(SurveyResult {
        n,
        family_size: family.len(),
        permutations,
    })
}

/// Surveys every size bound in `lo..=hi` in ascending order.
pub fn survey_range(lo: u32, hi: u32, opts: &SurveyOpts) -> Result<Vec<SurveyResult>, MpsError> {
    if lo > hi {
        return Err(MpsError::Survey(
            ErrorInfo::new("empty-range", "survey range lower bound exceeds upper bound")
                .with_context("lo", lo.to_string())
                .with_context("hi", hi.to_string()),
        ));
    }
    (lo..=hi).map(|n| survey(n, opts)).collect()
}
