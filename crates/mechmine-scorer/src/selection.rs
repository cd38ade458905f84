//! Balanced candidate selection for mechanism extraction
//!
//! Selection stratifies the corpus into domain categories, keeps only
//! papers whose abstracts hit that category's keyword list, ranks each
//! category by keyword density, and takes a fixed number per category
//! so the extraction batch stays balanced across fields.

use crate::{KeywordTable, ScorerError};
use mechmine_domain::Paper;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

/// Configuration for balanced selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Papers to take per category
    pub target_per_category: usize,

    /// Paper ids to skip (already extracted in earlier sessions)
    #[serde(default)]
    pub exclude: HashSet<i64>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            target_per_category: 20,
            exclude: HashSet::new(),
        }
    }
}

impl SelectionConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.target_per_category == 0 {
            return Err(ScorerError::InvalidSelection(
                "target_per_category must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Maps a paper's domain/subdomain labels to a selection category.
///
/// The rules follow the arXiv-style taxonomy of the papers store:
/// population biology reads as ecology, econ and quantitative finance
/// as economics, nonlinear science and condensed-matter criticality as
/// physics, social-network CS as sociology, and cell/molecular q-bio
/// as systems biology. Papers outside these slices are not selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomainCategorizer;

impl DomainCategorizer {
    /// Create a categorizer
    pub fn new() -> Self {
        Self
    }

    /// Category for one paper, or `None` when it fits no stratum
    pub fn categorize(&self, paper: &Paper) -> Option<&'static str> {
        let subdomain = paper.subdomain.as_deref().unwrap_or("");
        let abstract_lower = paper.abstract_or_empty().to_lowercase();

        if paper.domain == "q-bio"
            && (subdomain.contains("PE") || abstract_lower.contains("populations"))
        {
            return Some("ecology");
        }

        if paper.domain == "econ" || paper.domain == "q-fin" {
            return Some("economics");
        }

        if paper.domain == "nlin"
            || paper.domain == "physics"
            || (paper.domain == "cond-mat"
                && ["phase", "critical", "transition"]
                    .iter()
                    .any(|k| abstract_lower.contains(k)))
        {
            return Some("physics");
        }

        if paper.domain == "cs" && subdomain.contains("SI") {
            return Some("sociology");
        }

        if paper.domain == "q-bio"
            && ["CB", "MN", "SC", "QM"].iter().any(|s| subdomain.contains(s))
        {
            return Some("biology");
        }

        None
    }
}

/// A paper picked into the extraction batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPaper {
    /// Selection category the paper landed in
    pub category: String,

    /// Distinct category keywords found in the abstract
    pub keyword_hits: usize,

    /// The selected paper record
    #[serde(flatten)]
    pub paper: Paper,
}

/// Selects a balanced extraction batch from a scored corpus
#[derive(Debug, Clone)]
pub struct CategorySelector {
    table: KeywordTable,
    categorizer: DomainCategorizer,
    config: SelectionConfig,
}

impl CategorySelector {
    /// Create a selector over the given category keyword table
    pub fn new(table: KeywordTable, config: SelectionConfig) -> Result<Self, ScorerError> {
        config.validate()?;
        Ok(Self {
            table,
            categorizer: DomainCategorizer::new(),
            config,
        })
    }

    /// Default selector configuration over [`Self::default_table`]
    pub fn default_config() -> Self {
        Self::new(Self::default_table(), SelectionConfig::default())
            .expect("default selection config is valid")
    }

    /// Keyword lists indicating mechanism-rich abstracts, one list per
    /// selection category.
    pub fn default_table() -> KeywordTable {
        KeywordTable::new(vec![
            (
                "ecology",
                vec![
                    "predator-prey",
                    "competition",
                    "mutualism",
                    "allee effect",
                    "resource dynamics",
                    "cooperation",
                    "coexistence",
                    "dispersal",
                    "population dynamics",
                    "trophic",
                    "food web",
                    "niche",
                ],
            ),
            (
                "economics",
                vec![
                    "game theory",
                    "public goods",
                    "tragedy of commons",
                    "market dynamics",
                    "network effects",
                    "externalities",
                    "spillover",
                    "coordination game",
                    "strategic interaction",
                    "equilibrium",
                    "mechanism design",
                    "incentive",
                ],
            ),
            (
                "physics",
                vec![
                    "phase transition",
                    "critical phenomena",
                    "chaos",
                    "oscillation",
                    "feedback",
                    "self-organization",
                    "bifurcation",
                    "synchronization",
                    "nonlinear dynamics",
                    "emergence",
                    "universality",
                    "scaling",
                ],
            ),
            (
                "sociology",
                vec![
                    "cascade",
                    "tipping point",
                    "collective behavior",
                    "social influence",
                    "contagion",
                    "coordination",
                    "norm",
                    "diffusion of innovation",
                    "network effect",
                    "peer effect",
                    "herd behavior",
                    "social dynamics",
                ],
            ),
            (
                "biology",
                vec![
                    "feedback loop",
                    "signaling",
                    "regulation",
                    "gene network",
                    "pathway",
                    "circuit",
                    "homeostasis",
                    "metabolic",
                    "regulatory network",
                    "cell cycle",
                    "developmental",
                    "morphogen",
                ],
            ),
        ])
        .expect("default selection table is valid")
    }

    /// Select a balanced batch from `papers`.
    ///
    /// Output is grouped by category in table order; within a category,
    /// papers are ranked by keyword hits descending (ties by paper id
    /// ascending) and truncated to the per-category target.
    pub fn select(&self, papers: &[Paper]) -> Vec<SelectedPaper> {
        let mut selected = Vec::new();

        for (category, terms) in self.table.iter() {
            let mut picks: Vec<SelectedPaper> = papers
                .iter()
                .filter(|p| !self.config.exclude.contains(&p.id))
                .filter(|p| self.categorizer.categorize(p) == Some(category))
                .filter_map(|p| {
                    let lowered = p.abstract_or_empty().to_lowercase();
                    let hits = terms.iter().filter(|t| lowered.contains(t.as_str())).count();
                    (hits > 0).then(|| SelectedPaper {
                        category: category.to_string(),
                        keyword_hits: hits,
                        paper: p.clone(),
                    })
                })
                .collect();

            picks.sort_by(|a, b| {
                b.keyword_hits
                    .cmp(&a.keyword_hits)
                    .then(a.paper.id.cmp(&b.paper.id))
            });
            picks.truncate(self.config.target_per_category);

            debug!(category, selected = picks.len(), "Selected category batch");
            selected.extend(picks);
        }

        info!(total = selected.len(), "Balanced selection complete");
        selected
    }
}
