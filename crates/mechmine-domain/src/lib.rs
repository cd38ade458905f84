//! Mechmine Domain Layer
//!
//! This crate contains the core data model for the mechmine pipeline.
//! It defines the fundamental value objects that flow between the papers
//! store, the mechanism scorer, the human review step, and the precision
//! aggregator.
//!
//! ## Key Concepts
//!
//! - **Paper**: A read-only record from the external papers store
//! - **ScoredCandidate**: A paper ranked by mechanism richness (0-10)
//! - **ReviewedMatch**: A human-rated match, grouped into evaluation buckets
//! - **BucketStats**: Precision counters for one evaluation stratum
//! - **PrecisionReport**: Per-bucket and overall precision statistics
//!
//! ## Architecture
//!
//! - Pure data and invariants only
//! - No database or filesystem access
//! - Trait definitions for the store/report boundaries live in `traits`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod paper;
pub mod rating;
pub mod report;
pub mod review;
pub mod traits;

// Re-exports for convenience
pub use candidate::ScoredCandidate;
pub use paper::Paper;
pub use rating::Rating;
pub use report::{BucketStats, OverallStats, PrecisionReport};
pub use review::ReviewedMatch;
