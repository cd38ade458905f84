//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline core and
//! infrastructure. Implementations live in other crates
//! (mechmine-store); the scorer and aggregator only ever see these
//! seams, which keeps them testable without a database or filesystem.

use crate::{Paper, PrecisionReport, ReviewedMatch};

/// Trait for reading papers from the external store
///
/// Implemented by the infrastructure layer (mechmine-store). The
/// pipeline treats the store as read-only; schema and retrieval
/// mechanics are out of scope.
pub trait PaperSource {
    /// Error type for source operations
    type Error;

    /// Fetch papers that have a usable abstract
    fn papers_with_abstracts(&self) -> Result<Vec<Paper>, Self::Error>;
}

/// Trait for persisting precision reports
///
/// Injected into the aggregation step by the caller; the aggregator
/// itself never touches the filesystem.
pub trait ReportSink {
    /// Error type for sink operations
    type Error;

    /// Write a precision report to the sink's artifact location
    fn write_report(&self, report: &PrecisionReport) -> Result<(), Self::Error>;
}

/// Trait for reading reviewed match samples
///
/// Implemented by the infrastructure layer (mechmine-store).
pub trait SampleSource {
    /// Error type for source operations
    type Error;

    /// Load the full reviewed sample, in artifact order
    fn reviewed_matches(&self) -> Result<Vec<ReviewedMatch>, Self::Error>;
}
