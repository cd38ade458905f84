//! Manual refinement overlay for reviewed samples
//!
//! Lets a reviewer correct a batch of automatic ratings without
//! re-reviewing the whole sample. The overlay is a pure transform over
//! the match list plus the override table.

use crate::EvalError;
use mechmine_domain::{BucketStats, Rating, ReviewedMatch};
use std::collections::BTreeMap;
use tracing::info;

/// One manual override: the corrected rating plus its justification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refinement {
    /// Rating to apply
    pub rating: Rating,

    /// Why the rating was corrected
    pub note: String,
}

impl Refinement {
    /// Create an override
    pub fn new(rating: Rating, note: impl Into<String>) -> Self {
        Self {
            rating,
            note: note.into(),
        }
    }
}

/// Apply manual overrides onto a reviewed sample.
///
/// Overrides are keyed by 1-based match index, matching the "Match #N"
/// numbering reviewers see. Only listed indices are touched. An
/// override that sets the rating already present is a no-op and does
/// not count as a change; a real change rewrites the match's notes to
/// record the justification and the previous rating.
///
/// Returns the number of matches actually changed. An index outside
/// the sample is an error and nothing is modified before it is
/// detected.
pub fn refine(
    matches: &mut [ReviewedMatch],
    overrides: &BTreeMap<usize, Refinement>,
) -> Result<usize, EvalError> {
    for &index in overrides.keys() {
        if index == 0 || index > matches.len() {
            return Err(EvalError::OverrideOutOfRange {
                index,
                len: matches.len(),
            });
        }
    }

    let mut changes = 0;
    for (&index, refinement) in overrides {
        let m = &mut matches[index - 1];
        if m.manual_rating == Some(refinement.rating) {
            continue;
        }

        let previous = m
            .manual_rating
            .map(|r| r.as_str().to_string())
            .unwrap_or_else(|| "unrated".to_string());
        info!(
            index,
            from = %previous,
            to = %refinement.rating,
            "Refined match rating"
        );

        m.manual_rating = Some(refinement.rating);
        m.notes = Some(format!(
            "Manual refinement: {} (was {})",
            refinement.note, previous
        ));
        changes += 1;
    }

    Ok(changes)
}

/// Rating counts across a whole sample, ignoring bucket boundaries.
///
/// Used for the post-refinement summary.
pub fn rating_summary(matches: &[ReviewedMatch]) -> BucketStats {
    let mut stats = BucketStats::new();
    for m in matches {
        if let Some(rating) = m.manual_rating {
            stats.record(rating);
        }
    }
    stats
}
