use serde::{Deserialize, Serialize};

use crate::SurveyResult;

/// Per-size entry in a survey summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCount {
    /// Surveyed size bound.
    pub n: u32,
    /// Number of constellations examined for this bound.
    pub families: usize,
    /// Number of distinct matching permutations realized.
    pub permutations: usize,
}

/// Count sequence extracted from a range of survey results, the shape the
/// reporting harness renders for catalog comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    /// One entry per surveyed size, in ascending order of n.
    pub entries: Vec<SurveyCount>,
}

impl SurveySummary {
    /// Condenses full survey results into their count sequence.
    pub fn from_results(results: &[SurveyResult]) -> Self {
        let entries = results
            .iter()
            .map(|result| SurveyCount {
                n: result.n,
                families: result.family_size,
                permutations: result.distinct_permutations(),
            })
            .collect();
        Self { entries }
    }

    /// Returns the permutation counts as a bare integer sequence.
    pub fn count_sequence(&self) -> Vec<usize> {
        self.entries.iter().map(|entry| entry.permutations).collect()
    }
}
