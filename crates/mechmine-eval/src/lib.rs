//! Mechmine Eval
//!
//! Aggregates manually reviewed match samples into per-bucket and
//! overall precision statistics, and applies manual refinement
//! overlays onto previously reviewed samples.
//!
//! # Examples
//!
//! ```
//! use mechmine_domain::{Rating, ReviewedMatch};
//! use mechmine_eval::aggregate;
//!
//! let sample = vec![
//!     ReviewedMatch::rated("A", Rating::Excellent),
//!     ReviewedMatch::rated("A", Rating::Weak),
//! ];
//! let report = aggregate(&sample);
//! assert_eq!(report.overall.total, 2);
//! assert_eq!(report.buckets["A"].precision(), Some(0.5));
//! ```

#![warn(missing_docs)]

mod aggregator;
mod error;
mod refine;
mod summary;

pub use aggregator::{aggregate, aggregate_and_store};
pub use error::EvalError;
pub use refine::{rating_summary, refine, Refinement};
pub use summary::{render_refinement_summary, render_report};
