//! Keyword table - category to term-list mappings

use crate::ScorerError;
use serde::{Deserialize, Serialize};

/// An ordered mapping of category labels to keyword term lists.
///
/// The table is plain data passed explicitly into the scorer and the
/// selector, so tests can substitute alternate term lists without any
/// process-wide state. Category order is preserved; the scorer reports
/// matched categories in table order, which fixes display order of a
/// candidate's category list.
///
/// Terms are matched as case-insensitive substrings, so they are
/// lower-cased once at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    categories: Vec<(String, Vec<String>)>,
}

impl KeywordTable {
    /// Build a table from (category, terms) pairs.
    ///
    /// Rejects empty tables, empty term lists, and duplicate category
    /// labels.
    pub fn new<C, T>(entries: Vec<(C, Vec<T>)>) -> Result<Self, ScorerError>
    where
        C: Into<String>,
        T: Into<String>,
    {
        if entries.is_empty() {
            return Err(ScorerError::InvalidTable(
                "table must have at least one category".to_string(),
            ));
        }

        let mut categories: Vec<(String, Vec<String>)> = Vec::with_capacity(entries.len());
        for (category, terms) in entries {
            let category = category.into();
            if categories.iter().any(|(c, _)| *c == category) {
                return Err(ScorerError::InvalidTable(format!(
                    "duplicate category: {}",
                    category
                )));
            }
            if terms.is_empty() {
                return Err(ScorerError::InvalidTable(format!(
                    "category {} has no terms",
                    category
                )));
            }
            let terms = terms
                .into_iter()
                .map(|t| t.into().to_lowercase())
                .collect();
            categories.push((category, terms));
        }

        Ok(Self { categories })
    }

    /// Iterate (category, terms) in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(c, t)| (c.as_str(), t.as_slice()))
    }

    /// Term list for one category, if present
    pub fn terms(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, t)| t.as_slice())
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the table has no categories (never true for a
    /// constructed table)
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for KeywordTable {
    /// The ten domain-neutral mechanism-indicator categories used to
    /// score abstracts for mechanism richness.
    fn default() -> Self {
        Self::new(vec![
            (
                "feedback",
                vec![
                    "feedback",
                    "regulation",
                    "control",
                    "homeostasis",
                    "negative feedback",
                    "positive feedback",
                ],
            ),
            (
                "network",
                vec![
                    "network",
                    "graph",
                    "connectivity",
                    "topology",
                    "centrality",
                    "hub",
                    "node",
                ],
            ),
            (
                "threshold",
                vec![
                    "threshold",
                    "critical",
                    "bifurcation",
                    "phase transition",
                    "tipping point",
                ],
            ),
            (
                "causal",
                vec![
                    "mechanism",
                    "dynamics",
                    "process",
                    "causality",
                    "cause",
                    "driven by",
                ],
            ),
            (
                "model",
                vec!["model", "simulation", "equation", "framework", "formalism"],
            ),
            (
                "strategic",
                vec![
                    "strategy",
                    "game",
                    "equilibrium",
                    "cooperation",
                    "competition",
                    "payoff",
                ],
            ),
            (
                "coevolution",
                vec![
                    "coevolution",
                    "coupling",
                    "interaction",
                    "mutual",
                    "reciprocal",
                    "feedback between",
                ],
            ),
            (
                "scaling",
                vec![
                    "scaling",
                    "power law",
                    "distribution",
                    "universal",
                    "self-similar",
                ],
            ),
            (
                "optimization",
                vec![
                    "optimization",
                    "optimal",
                    "maximize",
                    "minimize",
                    "efficiency",
                ],
            ),
            (
                "adaptation",
                vec!["adaptation", "evolution", "selection", "fitness", "adaptive"],
            ),
        ])
        .expect("default keyword table is valid")
    }
}
