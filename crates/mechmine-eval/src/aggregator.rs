//! Precision aggregation over reviewed samples

use crate::EvalError;
use mechmine_domain::traits::ReportSink;
use mechmine_domain::{BucketStats, OverallStats, PrecisionReport, ReviewedMatch};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Aggregate a reviewed sample into a precision report.
///
/// Matches without a rating are skipped entirely; they create no bucket
/// and touch no counter. Buckets come into existence on the first rated
/// match naming them. The overall counters are the sum of the per-bucket
/// counters, so `overall.total == Σ bucket.total` holds by construction.
///
/// The full sample is re-scanned on every call; nothing is incrementally
/// updated, so the report cannot drift from the source labels.
pub fn aggregate(matches: &[ReviewedMatch]) -> PrecisionReport {
    let mut buckets: BTreeMap<String, BucketStats> = BTreeMap::new();

    for m in matches {
        let Some(rating) = m.manual_rating else {
            continue;
        };
        buckets.entry(m.bucket.clone()).or_default().record(rating);
    }

    let mut overall = BucketStats::new();
    for stats in buckets.values() {
        overall.merge(stats);
    }

    debug!(
        matches = matches.len(),
        rated = overall.total,
        buckets = buckets.len(),
        "Aggregated reviewed sample"
    );

    PrecisionReport {
        buckets,
        overall: OverallStats::from(overall),
    }
}

/// Aggregate a sample and persist the report through the given sink.
///
/// Persistence is the caller's capability; any sink failure is
/// propagated, never retried.
pub fn aggregate_and_store<S>(
    matches: &[ReviewedMatch],
    sink: &S,
) -> Result<PrecisionReport, EvalError>
where
    S: ReportSink,
    S::Error: std::fmt::Display,
{
    let report = aggregate(matches);
    sink.write_report(&report)
        .map_err(|e| EvalError::Sink(e.to_string()))?;
    info!(rated = report.overall.total, "Precision report persisted");
    Ok(report)
}
