//! Mechmine Scorer
//!
//! Scores paper abstracts for mechanism richness and selects balanced
//! candidate sets for human mechanism extraction.
//!
//! The scorer provides:
//! - Pure keyword-bucket scoring (no I/O, deterministic)
//! - Reproducible ranking of scored candidates
//! - Corpus-level statistics (score distribution, per-domain averages)
//! - Balanced per-category candidate selection
//!
//! # Examples
//!
//! ```
//! use mechmine_scorer::{KeywordTable, MechanismScorer};
//!
//! let scorer = MechanismScorer::new(KeywordTable::default());
//! let (score, categories) = scorer.score("feedback in a network model");
//! assert_eq!(categories, vec!["feedback", "network", "model"]);
//! assert_eq!(score, 4);
//! ```

#![warn(missing_docs)]

mod corpus;
mod error;
mod keywords;
mod scorer;
mod selection;

pub use corpus::{CorpusStats, DomainAssessment, DomainStats};
pub use error::ScorerError;
pub use keywords::KeywordTable;
pub use scorer::MechanismScorer;
pub use selection::{CategorySelector, DomainCategorizer, SelectedPaper, SelectionConfig};
