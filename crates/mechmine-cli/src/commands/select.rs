//! The select command: build a balanced extraction batch.

use crate::cli::SelectArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use mechmine_scorer::{CategorySelector, SelectionConfig};
use mechmine_store::{artifacts, PaperStore};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Select top papers per category and write the selection artifact.
pub fn execute_select(
    args: SelectArgs,
    config: &Config,
    database: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let exclude: HashSet<i64> = match &args.exclude {
        Some(path) => {
            let ids: Vec<i64> = artifacts::read_json(path)?;
            ids.into_iter().collect()
        }
        None => HashSet::new(),
    };
    if !exclude.is_empty() {
        println!(
            "{}",
            formatter.info(&format!("Excluding {} already-extracted papers", exclude.len()))
        );
    }

    let selection_config = SelectionConfig {
        target_per_category: args
            .per_category
            .unwrap_or(config.scoring.target_per_category),
        exclude,
    };
    let selector = CategorySelector::new(CategorySelector::default_table(), selection_config)?;

    let store = PaperStore::open(database)?;
    let papers = store.papers_with_abstracts()?;
    let selected = selector.select(&papers);

    let output = args
        .output
        .unwrap_or_else(|| config.paths.artifacts.join("selected_papers.json"));
    artifacts::write_json(&output, &selected)?;
    info!(path = %output.display(), selected = selected.len(), "Selection written");

    println!("{}", formatter.format_selection(&selected));
    println!(
        "{}",
        formatter.success(&format!(
            "Selected {} papers -> {}",
            selected.len(),
            output.display()
        ))
    );
    Ok(())
}
