//! Precision report module - per-bucket and overall statistics

use crate::Rating;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Rating counters for one evaluation stratum.
///
/// Counters are rebuilt from scratch on every aggregation run; the full
/// reviewed sample is re-scanned so the report can never drift from the
/// source-of-truth labels. Invariant:
/// `excellent + good + weak + fp == total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketStats {
    /// Rated matches in this bucket
    pub total: u64,

    /// Matches rated excellent
    pub excellent: u64,

    /// Matches rated good
    pub good: u64,

    /// Matches rated weak
    pub weak: u64,

    /// Matches rated false_positive
    pub fp: u64,
}

impl BucketStats {
    /// Create empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one rated match
    pub fn record(&mut self, rating: Rating) {
        self.total += 1;
        match rating {
            Rating::Excellent => self.excellent += 1,
            Rating::Good => self.good += 1,
            Rating::Weak => self.weak += 1,
            Rating::FalsePositive => self.fp += 1,
        }
    }

    /// Fold another bucket's counters into this one
    pub fn merge(&mut self, other: &BucketStats) {
        self.total += other.total;
        self.excellent += other.excellent;
        self.good += other.good;
        self.weak += other.weak;
        self.fp += other.fp;
    }

    /// Precision = (excellent + good) / total.
    ///
    /// Undefined (`None`) for an empty bucket; callers never divide by
    /// zero.
    pub fn precision(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some((self.excellent + self.good) as f64 / self.total as f64)
    }

    /// Count of one rating category
    pub fn count(&self, rating: Rating) -> u64 {
        match rating {
            Rating::Excellent => self.excellent,
            Rating::Good => self.good,
            Rating::Weak => self.weak,
            Rating::FalsePositive => self.fp,
        }
    }
}

/// Overall statistics across every bucket.
///
/// Serialized with the long `false_positive` key and an explicit
/// `precision` field, matching the report artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    /// Rated matches across all buckets
    pub total: u64,

    /// Matches rated excellent
    pub excellent: u64,

    /// Matches rated good
    pub good: u64,

    /// Matches rated weak
    pub weak: u64,

    /// Matches rated false_positive
    pub false_positive: u64,

    /// Overall precision; null when no matches were rated
    pub precision: Option<f64>,
}

impl From<BucketStats> for OverallStats {
    fn from(stats: BucketStats) -> Self {
        Self {
            total: stats.total,
            excellent: stats.excellent,
            good: stats.good,
            weak: stats.weak,
            false_positive: stats.fp,
            precision: stats.precision(),
        }
    }
}

impl OverallStats {
    /// View the overall counters as plain [`BucketStats`]
    pub fn as_bucket_stats(&self) -> BucketStats {
        BucketStats {
            total: self.total,
            excellent: self.excellent,
            good: self.good,
            weak: self.weak,
            fp: self.false_positive,
        }
    }
}

/// The precision report: one [`BucketStats`] per bucket plus the
/// overall aggregate. Buckets are kept in a `BTreeMap` so serialization
/// and display order is always ascending by bucket name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecisionReport {
    /// Per-bucket counters, keyed by bucket name
    pub buckets: BTreeMap<String, BucketStats>,

    /// Counters summed across all buckets
    pub overall: OverallStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_record_increments_total_and_one_counter() {
        let mut stats = BucketStats::new();
        stats.record(Rating::Excellent);
        stats.record(Rating::FalsePositive);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.excellent, 1);
        assert_eq!(stats.fp, 1);
        assert_eq!(stats.good, 0);
        assert_eq!(stats.weak, 0);
    }

    #[test]
    fn test_precision_undefined_for_empty_bucket() {
        assert_eq!(BucketStats::new().precision(), None);
    }

    #[test]
    fn test_precision_counts_excellent_and_good() {
        let mut stats = BucketStats::new();
        stats.record(Rating::Excellent);
        stats.record(Rating::Weak);
        assert_eq!(stats.precision(), Some(0.5));
    }

    #[test]
    fn test_overall_serializes_long_key() {
        let mut stats = BucketStats::new();
        stats.record(Rating::FalsePositive);
        let overall = OverallStats::from(stats);

        let json = serde_json::to_value(overall).unwrap();
        assert_eq!(json["false_positive"].as_u64(), Some(1));
        assert_eq!(json["precision"].as_f64(), Some(0.0));
    }

    proptest! {
        #[test]
        fn prop_counters_conserve_total(ratings in proptest::collection::vec(0u8..4, 0..100)) {
            let mut stats = BucketStats::new();
            for r in &ratings {
                let rating = match r {
                    0 => Rating::Excellent,
                    1 => Rating::Good,
                    2 => Rating::Weak,
                    _ => Rating::FalsePositive,
                };
                stats.record(rating);
            }

            prop_assert_eq!(
                stats.excellent + stats.good + stats.weak + stats.fp,
                stats.total
            );
            if let Some(p) = stats.precision() {
                prop_assert!((0.0..=1.0).contains(&p));
            }
        }
    }
}
