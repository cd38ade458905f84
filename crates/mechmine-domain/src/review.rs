//! ReviewedMatch module - human-rated match records

use crate::Rating;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One record of a manually reviewed match.
///
/// Records arrive as JSON from the review step. Required structure is
/// the `bucket` label; `manual_rating` and `notes` are optional (a
/// match that has not yet been reviewed carries no rating and is
/// excluded from aggregation). Any other fields the review step
/// attached — similarity scores, paper ids, mechanism text — are
/// preserved verbatim so a refined sample can be written back without
/// losing information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedMatch {
    /// Evaluation stratum this match belongs to
    pub bucket: String,

    /// Rating assigned during manual review; absent until reviewed.
    /// An unrecognized rating string fails deserialization outright.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_rating: Option<Rating>,

    /// Free-text reviewer notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Passthrough fields from the review artifact
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReviewedMatch {
    /// Create a rated match with no passthrough fields.
    pub fn rated(bucket: impl Into<String>, rating: Rating) -> Self {
        Self {
            bucket: bucket.into(),
            manual_rating: Some(rating),
            notes: None,
            extra: Map::new(),
        }
    }

    /// Create an unreviewed match with no passthrough fields.
    pub fn unrated(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            manual_rating: None,
            notes: None,
            extra: Map::new(),
        }
    }
}
