//! The precision command: aggregate a reviewed sample into a report.

use crate::cli::PrecisionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use mechmine_eval::{aggregate_and_store, render_report};
use mechmine_store::{artifacts, FileReportSink};

/// Aggregate the reviewed sample, persist the report, and print the
/// console summary.
pub fn execute_precision(
    args: PrecisionArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let sample_path = args
        .sample
        .unwrap_or_else(|| config.paths.artifacts.join("validation_sample_reviewed.json"));
    let output = args
        .output
        .unwrap_or_else(|| config.paths.artifacts.join("precision_by_bucket.json"));

    // Fails before any output is produced when the sample is missing
    // or contains an unrecognized rating.
    let sample = artifacts::read_reviewed_sample(&sample_path)?;

    let sink = FileReportSink::new(output);
    let report = aggregate_and_store(&sample, &sink)?;

    println!("{}", render_report(&report));
    println!(
        "{}",
        formatter.success(&format!("Results saved to {}", sink.path().display()))
    );
    Ok(())
}
