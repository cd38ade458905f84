//! Scorer error types

use thiserror::Error;

/// Errors that can occur when building scorer configuration
#[derive(Error, Debug)]
pub enum ScorerError {
    /// Invalid keyword table
    #[error("Invalid keyword table: {0}")]
    InvalidTable(String),

    /// Invalid selection configuration
    #[error("Invalid selection config: {0}")]
    InvalidSelection(String),
}
