//! JSON artifact I/O
//!
//! Ranked candidate lists, reviewed samples, and precision reports are
//! exchanged between pipeline stages as pretty-printed JSON files.
//! Reads of missing files surface as [`StoreError::NotFound`] before
//! anything is parsed; writes fail loudly and are never retried.

use crate::StoreError;
use mechmine_domain::traits::{ReportSink, SampleSource};
use mechmine_domain::{PrecisionReport, ReviewedMatch, ScoredCandidate};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read a JSON artifact into a typed value.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a value as a pretty-printed JSON artifact.
///
/// The parent directory must already exist; artifact layout is the
/// caller's concern.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents)?;
    info!(path = %path.display(), "Wrote artifact");
    Ok(())
}

/// Load a reviewed sample artifact.
///
/// Any record with an unrecognized rating string fails the whole load;
/// under-counting a mislabeled record would silently skew precision.
pub fn read_reviewed_sample(path: &Path) -> Result<Vec<ReviewedMatch>, StoreError> {
    read_json(path)
}

/// Write a reviewed sample artifact (after refinement).
pub fn write_reviewed_sample(path: &Path, matches: &[ReviewedMatch]) -> Result<(), StoreError> {
    write_json(path, &matches)
}

/// Load a ranked candidates artifact.
pub fn read_candidates(path: &Path) -> Result<Vec<ScoredCandidate>, StoreError> {
    read_json(path)
}

/// Write a ranked candidates artifact.
pub fn write_candidates(path: &Path, candidates: &[ScoredCandidate]) -> Result<(), StoreError> {
    write_json(path, &candidates)
}

/// Report sink writing pretty JSON to a fixed path
#[derive(Debug, Clone)]
pub struct FileReportSink {
    path: PathBuf,
}

impl FileReportSink {
    /// Create a sink for the given artifact path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The artifact path this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileReportSink {
    type Error = StoreError;

    fn write_report(&self, report: &PrecisionReport) -> Result<(), Self::Error> {
        write_json(&self.path, report)
    }
}

/// Sample source reading a reviewed sample artifact from a fixed path
#[derive(Debug, Clone)]
pub struct FileSampleSource {
    path: PathBuf,
}

impl FileSampleSource {
    /// Create a source for the given artifact path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl SampleSource for FileSampleSource {
    type Error = StoreError;

    fn reviewed_matches(&self) -> Result<Vec<ReviewedMatch>, Self::Error> {
        read_reviewed_sample(&self.path)
    }
}
