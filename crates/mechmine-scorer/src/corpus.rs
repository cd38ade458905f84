//! Corpus-level scoring statistics
//!
//! Summarizes a full scoring pass: score distribution, per-domain
//! averages, and which domains are worth mining for mechanisms.

use mechmine_domain::candidate::MAX_SCORE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualitative tier for a domain's average mechanism richness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainAssessment {
    /// Average score at or above 5.0
    Excellent,
    /// Average score in [3.5, 5.0)
    Good,
    /// Average score in [2.0, 3.5)
    Fair,
    /// Average score below 2.0
    Poor,
}

impl DomainAssessment {
    /// Assessment tier for an average score
    pub fn from_avg(avg_score: f64) -> Self {
        if avg_score >= 5.0 {
            DomainAssessment::Excellent
        } else if avg_score >= 3.5 {
            DomainAssessment::Good
        } else if avg_score >= 2.0 {
            DomainAssessment::Fair
        } else {
            DomainAssessment::Poor
        }
    }

    /// Tier name as displayed in summaries
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainAssessment::Excellent => "EXCELLENT",
            DomainAssessment::Good => "GOOD",
            DomainAssessment::Fair => "FAIR",
            DomainAssessment::Poor => "POOR",
        }
    }
}

/// Scoring statistics for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainStats {
    /// Domain label
    pub domain: String,

    /// Papers scored in this domain
    pub paper_count: usize,

    /// Mean mechanism richness score
    pub avg_score: f64,

    /// Papers at or above the high-value threshold
    pub high_value_count: usize,

    /// High-value papers as a percentage of the domain
    pub high_value_pct: f64,

    /// Qualitative tier for the domain
    pub assessment: DomainAssessment,
}

/// Statistics for a full scoring pass over the corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Papers scored
    pub papers_scored: usize,

    /// Mean score across the corpus
    pub avg_score: f64,

    /// Score threshold counted as high-value
    pub high_value_threshold: u8,

    /// Papers at or above the threshold
    pub high_value_count: usize,

    /// High-value papers as a percentage of the corpus
    pub high_value_pct: f64,

    /// Count of papers at each score 0..=10
    pub score_distribution: Vec<usize>,

    /// Per-domain statistics, ascending by domain name
    pub domains: Vec<DomainStats>,
}

impl CorpusStats {
    /// Build statistics from (domain, score) pairs.
    ///
    /// An empty input produces zeroed statistics rather than dividing
    /// by zero.
    pub fn from_scores<'a, I>(scores: I, high_value_threshold: u8) -> Self
    where
        I: IntoIterator<Item = (&'a str, u8)>,
    {
        let mut distribution = vec![0usize; MAX_SCORE as usize + 1];
        let mut by_domain: BTreeMap<String, Vec<u8>> = BTreeMap::new();
        let mut total: u64 = 0;
        let mut count: usize = 0;
        let mut high_value_count: usize = 0;

        for (domain, score) in scores {
            distribution[score.min(MAX_SCORE) as usize] += 1;
            by_domain.entry(domain.to_string()).or_default().push(score);
            total += u64::from(score);
            count += 1;
            if score >= high_value_threshold {
                high_value_count += 1;
            }
        }

        let domains = by_domain
            .into_iter()
            .map(|(domain, scores)| {
                let paper_count = scores.len();
                let avg_score =
                    scores.iter().map(|&s| f64::from(s)).sum::<f64>() / paper_count as f64;
                let high = scores
                    .iter()
                    .filter(|&&s| s >= high_value_threshold)
                    .count();
                DomainStats {
                    domain,
                    paper_count,
                    avg_score,
                    high_value_count: high,
                    high_value_pct: high as f64 / paper_count as f64 * 100.0,
                    assessment: DomainAssessment::from_avg(avg_score),
                }
            })
            .collect();

        let avg_score = if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        };
        let high_value_pct = if count > 0 {
            high_value_count as f64 / count as f64 * 100.0
        } else {
            0.0
        };

        Self {
            papers_scored: count,
            avg_score,
            high_value_threshold,
            high_value_count,
            high_value_pct,
            score_distribution: distribution,
            domains,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_tiers() {
        assert_eq!(DomainAssessment::from_avg(6.0), DomainAssessment::Excellent);
        assert_eq!(DomainAssessment::from_avg(5.0), DomainAssessment::Excellent);
        assert_eq!(DomainAssessment::from_avg(4.0), DomainAssessment::Good);
        assert_eq!(DomainAssessment::from_avg(2.5), DomainAssessment::Fair);
        assert_eq!(DomainAssessment::from_avg(1.0), DomainAssessment::Poor);
    }

    #[test]
    fn test_empty_corpus_is_zeroed() {
        let stats = CorpusStats::from_scores(std::iter::empty(), 5);
        assert_eq!(stats.papers_scored, 0);
        assert_eq!(stats.avg_score, 0.0);
        assert_eq!(stats.high_value_pct, 0.0);
        assert!(stats.domains.is_empty());
    }

    #[test]
    fn test_distribution_and_domain_split() {
        let scores = vec![("nlin", 7u8), ("nlin", 3), ("econ", 5), ("econ", 5)];
        let stats = CorpusStats::from_scores(scores.iter().map(|(d, s)| (*d, *s)), 5);

        assert_eq!(stats.papers_scored, 4);
        assert_eq!(stats.high_value_count, 3);
        assert_eq!(stats.score_distribution[5], 2);
        assert_eq!(stats.score_distribution[7], 1);
        assert_eq!(stats.score_distribution[3], 1);

        // BTreeMap ordering: econ before nlin
        assert_eq!(stats.domains[0].domain, "econ");
        assert_eq!(stats.domains[0].avg_score, 5.0);
        assert_eq!(stats.domains[0].assessment, DomainAssessment::Excellent);
        assert_eq!(stats.domains[1].domain, "nlin");
        assert_eq!(stats.domains[1].avg_score, 5.0);
        assert_eq!(stats.domains[1].high_value_count, 1);
        assert_eq!(stats.domains[1].high_value_pct, 50.0);
    }
}
