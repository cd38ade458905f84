//! The score command: rank the whole corpus by mechanism richness.

use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use mechmine_scorer::{CorpusStats, KeywordTable, MechanismScorer};
use mechmine_store::{artifacts, PaperStore};
use std::path::Path;
use tracing::info;

/// Score every paper with an abstract, write the ranked candidates
/// artifact, and print corpus statistics.
pub fn execute_score(
    args: ScoreArgs,
    config: &Config,
    database: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let store = PaperStore::open(database)?;
    let papers = store.papers_with_abstracts()?;
    println!(
        "{}",
        formatter.info(&format!("Scoring {} papers with abstracts", papers.len()))
    );

    let scorer = MechanismScorer::new(KeywordTable::default());
    let ranked = scorer.rank(&papers);

    let output = args
        .output
        .unwrap_or_else(|| config.paths.artifacts.join("candidates.json"));
    artifacts::write_candidates(&output, &ranked)?;
    info!(path = %output.display(), candidates = ranked.len(), "Candidates written");

    if !args.no_stats {
        // Candidates are ranked; recover per-domain scores by pairing on id.
        // Both lists come from the same pass, so every candidate has a paper.
        let scores = ranked.iter().filter_map(|c| {
            papers
                .iter()
                .find(|p| p.id == c.paper_id)
                .map(|p| (p.domain.as_str(), c.score))
        });
        let stats = CorpusStats::from_scores(scores, config.scoring.high_value_threshold);
        println!("{}", formatter.format_corpus_stats(&stats));
    }

    println!(
        "{}",
        formatter.success(&format!(
            "Ranked {} candidates -> {}",
            ranked.len(),
            output.display()
        ))
    );
    Ok(())
}
