//! The refine command: apply manual overrides onto a reviewed sample.

use crate::cli::RefineArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use mechmine_domain::Rating;
use mechmine_eval::{rating_summary, refine, render_refinement_summary, Refinement};
use mechmine_store::artifacts;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Wire format of one override entry in the overrides file.
#[derive(Debug, Deserialize)]
struct OverrideEntry {
    rating: Rating,
    note: String,
}

/// Apply the overrides file to the reviewed sample and write it back.
pub fn execute_refine(args: RefineArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let sample_path = args
        .sample
        .unwrap_or_else(|| config.paths.artifacts.join("validation_sample_reviewed.json"));

    let mut sample = artifacts::read_reviewed_sample(&sample_path)?;
    let entries: BTreeMap<usize, OverrideEntry> = artifacts::read_json(&args.overrides)?;
    let overrides: BTreeMap<usize, Refinement> = entries
        .into_iter()
        .map(|(i, e)| (i, Refinement::new(e.rating, e.note)))
        .collect();

    let changes = refine(&mut sample, &overrides)?;
    artifacts::write_reviewed_sample(&sample_path, &sample)?;

    println!(
        "{}",
        render_refinement_summary(&rating_summary(&sample), changes)
    );
    println!(
        "{}",
        formatter.success(&format!("Refined sample written to {}", sample_path.display()))
    );
    Ok(())
}
