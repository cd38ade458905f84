//! Candidate module - papers ranked by mechanism richness

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum mechanism richness score
pub const MAX_SCORE: u8 = 10;

/// A paper scored for mechanism richness.
///
/// Invariant: `score == min(categories.len() + bonus, 10)` where the
/// bonus adds +1 at three or more matched categories and +1 more at
/// five or more. Candidates are immutable once computed; a new scoring
/// pass regenerates the whole artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Identifier of the scored paper (owned by the papers store)
    pub paper_id: i64,

    /// Mechanism richness score in `[0, 10]`
    pub score: u8,

    /// Matched category labels, in first-match order
    pub categories: Vec<String>,
}

impl ScoredCandidate {
    /// Ordering for ranked output: score descending, then paper id
    /// ascending so equal scores are reproducible across runs.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.paper_id.cmp(&other.paper_id))
    }
}

/// Compute the bonus-adjusted score for `k` matched categories.
///
/// Breadth across categories is rewarded over depth in any one of them,
/// capped at [`MAX_SCORE`] to keep scores comparable across runs.
pub fn richness_score(matched_categories: usize) -> u8 {
    let mut score = matched_categories;
    if matched_categories >= 3 {
        score += 1;
    }
    if matched_categories >= 5 {
        score += 1;
    }
    score.min(MAX_SCORE as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_richness_score_table() {
        // k -> min(k + bonus(k), 10)
        assert_eq!(richness_score(0), 0);
        assert_eq!(richness_score(1), 1);
        assert_eq!(richness_score(2), 2);
        assert_eq!(richness_score(3), 4);
        assert_eq!(richness_score(4), 5);
        assert_eq!(richness_score(5), 7);
        assert_eq!(richness_score(6), 8);
        assert_eq!(richness_score(9), 10);
        assert_eq!(richness_score(10), 10);
    }

    #[test]
    fn test_ranking_order() {
        let a = ScoredCandidate {
            paper_id: 7,
            score: 5,
            categories: vec![],
        };
        let b = ScoredCandidate {
            paper_id: 3,
            score: 8,
            categories: vec![],
        };
        let c = ScoredCandidate {
            paper_id: 1,
            score: 5,
            categories: vec![],
        };

        let mut ranked = vec![a.clone(), b.clone(), c.clone()];
        ranked.sort_by(|x, y| x.ranking_cmp(y));

        // Highest score first, ties by ascending paper id
        assert_eq!(ranked, vec![b, c, a]);
    }

    proptest! {
        #[test]
        fn prop_score_bounded(k in 0usize..64) {
            let score = richness_score(k);
            prop_assert!(score <= MAX_SCORE);
        }

        #[test]
        fn prop_score_monotone(k in 0usize..63) {
            prop_assert!(richness_score(k) <= richness_score(k + 1));
        }
    }
}
