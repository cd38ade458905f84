//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mechmine CLI - score papers for mechanism richness and evaluate
/// extraction precision.
#[derive(Debug, Parser)]
#[command(name = "mechmine")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Papers database path (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score all papers for mechanism richness and write the ranked
    /// candidates artifact
    Score(ScoreArgs),

    /// Select a balanced per-category extraction batch
    Select(SelectArgs),

    /// Aggregate a reviewed sample into a precision report
    Precision(PrecisionArgs),

    /// Apply manual rating overrides onto a reviewed sample
    Refine(RefineArgs),
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// Output path for the ranked candidates artifact
    /// (default: <artifacts>/candidates.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the corpus statistics summary
    #[arg(long)]
    pub no_stats: bool,
}

/// Arguments for the select command.
#[derive(Debug, Parser)]
pub struct SelectArgs {
    /// Output path for the selection artifact
    /// (default: <artifacts>/selected_papers.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Papers to take per category (overrides config)
    #[arg(long)]
    pub per_category: Option<usize>,

    /// JSON file with an array of paper ids to exclude
    /// (papers already extracted in earlier sessions)
    #[arg(long)]
    pub exclude: Option<PathBuf>,
}

/// Arguments for the precision command.
#[derive(Debug, Parser)]
pub struct PrecisionArgs {
    /// Reviewed sample artifact
    /// (default: <artifacts>/validation_sample_reviewed.json)
    #[arg(short, long)]
    pub sample: Option<PathBuf>,

    /// Output path for the precision report
    /// (default: <artifacts>/precision_by_bucket.json)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the refine command.
#[derive(Debug, Parser)]
pub struct RefineArgs {
    /// Reviewed sample artifact to refine in place
    /// (default: <artifacts>/validation_sample_reviewed.json)
    #[arg(short, long)]
    pub sample: Option<PathBuf>,

    /// JSON file mapping 1-based match index to {rating, note}
    #[arg(long)]
    pub overrides: PathBuf,
}
