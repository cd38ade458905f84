//! Human-readable summary rendering for precision reports

use mechmine_domain::{BucketStats, PrecisionReport, Rating};

const RULE: &str =
    "================================================================================";

fn pct(count: u64, total: u64) -> String {
    if total == 0 {
        return "n/a".to_string();
    }
    format!("{:.2}%", count as f64 / total as f64 * 100.0)
}

fn push_rating_lines(out: &mut String, stats: &BucketStats) {
    for (label, rating) in [
        ("Excellent", Rating::Excellent),
        ("Good", Rating::Good),
        ("Weak", Rating::Weak),
        ("False Positive", Rating::FalsePositive),
    ] {
        let count = stats.count(rating);
        out.push_str(&format!(
            "  {}: {} ({})\n",
            label,
            count,
            pct(count, stats.total)
        ));
    }
}

/// Render a precision report as console text.
///
/// Buckets appear in ascending name order, the overall summary last.
/// Every ratio is printed with two decimal places.
pub fn render_report(report: &PrecisionReport) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push_str("\nPRECISION BY BUCKET\n");
    out.push_str(RULE);
    out.push_str("\n\n");

    for (bucket, stats) in &report.buckets {
        out.push_str(&format!("{}:\n", bucket));
        out.push_str(&format!("  Total: {}\n", stats.total));
        push_rating_lines(&mut out, stats);
        match stats.precision() {
            Some(p) => out.push_str(&format!("  Precision: {:.2}%\n\n", p * 100.0)),
            None => out.push_str("  Precision: undefined\n\n"),
        }
    }

    let overall = report.overall.as_bucket_stats();
    if overall.total == 0 {
        out.push_str("No rated matches.\n");
        return out;
    }

    out.push_str("OVERALL:\n");
    out.push_str(&format!("  Total reviewed: {}\n", overall.total));
    push_rating_lines(&mut out, &overall);
    let precise = overall.excellent + overall.good;
    out.push_str(&format!(
        "  OVERALL PRECISION: {}/{} = {}\n",
        precise,
        overall.total,
        pct(precise, overall.total)
    ));

    out
}

/// Render the post-refinement summary: rating breakdown across the
/// whole sample plus the change count.
pub fn render_refinement_summary(stats: &BucketStats, changes: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("Made {} manual refinements\n\n", changes));
    out.push_str("REFINED SUMMARY:\n");
    push_rating_lines(&mut out, stats);
    match stats.precision() {
        Some(p) => out.push_str(&format!("\n  OVERALL PRECISION: {:.2}%\n", p * 100.0)),
        None => out.push_str("\n  OVERALL PRECISION: undefined\n"),
    }
    out
}
