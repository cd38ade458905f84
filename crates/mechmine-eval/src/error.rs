//! Eval error types

use thiserror::Error;

/// Errors that can occur during evaluation operations
#[derive(Error, Debug)]
pub enum EvalError {
    /// Refinement override points outside the sample
    #[error("Override index {index} out of range (sample has {len} matches, indices are 1-based)")]
    OverrideOutOfRange {
        /// 1-based match index from the override table
        index: usize,
        /// Number of matches in the sample
        len: usize,
    },

    /// Report persistence failed
    #[error("Report sink error: {0}")]
    Sink(String),
}
