//! Mechanism richness scoring

use crate::KeywordTable;
use mechmine_domain::candidate::richness_score;
use mechmine_domain::{Paper, ScoredCandidate};
use tracing::debug;

/// Scores abstracts against a fixed keyword table.
///
/// Scoring is a pure function of the abstract text and the table: no
/// database, no network, no shared state. A category counts as matched
/// when any of its terms occurs as a substring of the lower-cased
/// abstract. The score is the number of matched categories plus a
/// breadth bonus (+1 at three categories, +1 more at five), capped
/// at 10.
#[derive(Debug, Clone)]
pub struct MechanismScorer {
    table: KeywordTable,
}

impl MechanismScorer {
    /// Create a scorer over the given keyword table
    pub fn new(table: KeywordTable) -> Self {
        Self { table }
    }

    /// The keyword table this scorer matches against
    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    /// Score one abstract.
    ///
    /// Returns the bounded score and the matched category labels in
    /// table order. An empty abstract scores `(0, [])`.
    pub fn score(&self, abstract_text: &str) -> (u8, Vec<String>) {
        if abstract_text.is_empty() {
            return (0, Vec::new());
        }

        let lowered = abstract_text.to_lowercase();
        let categories: Vec<String> = self
            .table
            .iter()
            .filter(|(_, terms)| terms.iter().any(|term| lowered.contains(term.as_str())))
            .map(|(category, _)| category.to_string())
            .collect();

        (richness_score(categories.len()), categories)
    }

    /// Count distinct terms from one category present in the abstract.
    ///
    /// Used by the selector to rank papers within a category by keyword
    /// density.
    pub fn term_hits(&self, abstract_text: &str, category: &str) -> usize {
        let Some(terms) = self.table.terms(category) else {
            return 0;
        };
        if abstract_text.is_empty() {
            return 0;
        }
        let lowered = abstract_text.to_lowercase();
        terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .count()
    }

    /// Score one paper into a candidate record.
    pub fn score_paper(&self, paper: &Paper) -> ScoredCandidate {
        let (score, categories) = self.score(paper.abstract_or_empty());
        ScoredCandidate {
            paper_id: paper.id,
            score,
            categories,
        }
    }

    /// Score a batch of papers and rank the result: score descending,
    /// ties by paper id ascending so output is reproducible run to run.
    pub fn rank(&self, papers: &[Paper]) -> Vec<ScoredCandidate> {
        let mut candidates: Vec<ScoredCandidate> =
            papers.iter().map(|p| self.score_paper(p)).collect();
        candidates.sort_by(|a, b| a.ranking_cmp(b));
        debug!(papers = papers.len(), "Ranked candidate batch");
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> MechanismScorer {
        MechanismScorer::new(KeywordTable::default())
    }

    fn paper(id: i64, abstract_text: &str) -> Paper {
        Paper {
            id,
            arxiv_id: format!("2401.{:05}", id),
            title: format!("Paper {}", id),
            abstract_text: Some(abstract_text.to_string()),
            domain: "nlin".to_string(),
            subdomain: None,
        }
    }

    #[test]
    fn test_empty_abstract_scores_zero() {
        let (score, categories) = scorer().score("");
        assert_eq!(score, 0);
        assert!(categories.is_empty());
    }

    #[test]
    fn test_no_matching_terms_scores_zero() {
        let (score, categories) = scorer().score("Archival notes on medieval pottery glaze.");
        assert_eq!(score, 0);
        assert!(categories.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (score, categories) = scorer().score("FEEDBACK dominates the response.");
        assert_eq!(categories, vec!["feedback"]);
        assert_eq!(score, 1);
    }

    #[test]
    fn test_three_categories_get_breadth_bonus() {
        // feedback + network + optimization -> k=3 -> score 4
        let (score, categories) =
            scorer().score("feedback regulation via network topology and optimal control");
        assert_eq!(categories, vec!["feedback", "network", "optimization"]);
        assert_eq!(score, 4);
    }

    #[test]
    fn test_five_categories_get_second_bonus() {
        let text = "A feedback model of network games near a critical threshold";
        // feedback, network, threshold, model, strategic -> k=5 -> 7
        let (score, categories) = scorer().score(text);
        assert_eq!(categories.len(), 5);
        assert_eq!(score, 7);
    }

    #[test]
    fn test_score_capped_at_ten() {
        let text = "feedback network threshold mechanism model game coupling \
                    scaling optimal adaptation";
        let (score, categories) = scorer().score(text);
        assert_eq!(categories.len(), 10);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let text = "Phase transition dynamics in adaptive networks";
        let s = scorer();
        assert_eq!(s.score(text), s.score(text));
    }

    #[test]
    fn test_missing_abstract_scores_zero() {
        let mut p = paper(1, "feedback");
        p.abstract_text = None;
        let candidate = scorer().score_paper(&p);
        assert_eq!(candidate.score, 0);
        assert!(candidate.categories.is_empty());
    }

    #[test]
    fn test_term_hits_counts_distinct_terms() {
        let s = scorer();
        let text = "network topology determines which node becomes a hub";
        assert_eq!(s.term_hits(text, "network"), 4); // network, topology, hub, node
        assert_eq!(s.term_hits(text, "feedback"), 0);
        assert_eq!(s.term_hits(text, "no_such_category"), 0);
    }

    #[test]
    fn test_rank_orders_by_score_then_id() {
        let papers = vec![
            paper(3, "feedback"),
            paper(1, "feedback regulation via network topology and optimal control"),
            paper(2, "feedback"),
        ];
        let ranked = scorer().rank(&papers);
        let ids: Vec<i64> = ranked.iter().map(|c| c.paper_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
