//! Output formatting for the CLI.

use colored::*;
use mechmine_scorer::{CorpusStats, SelectedPaper};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format corpus statistics as a per-domain table plus the score
    /// distribution.
    pub fn format_corpus_stats(&self, stats: &CorpusStats) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Domain", "Papers", "Avg Score", "High-Value", "Assessment"]);

        for d in &stats.domains {
            builder.push_record([
                d.domain.clone(),
                d.paper_count.to_string(),
                format!("{:.2}", d.avg_score),
                format!("{}/{} ({:.1}%)", d.high_value_count, d.paper_count, d.high_value_pct),
                d.assessment.as_str().to_string(),
            ]);
        }
        builder.push_record([
            "OVERALL".to_string(),
            stats.papers_scored.to_string(),
            format!("{:.2}", stats.avg_score),
            format!(
                "{}/{} ({:.1}%)",
                stats.high_value_count, stats.papers_scored, stats.high_value_pct
            ),
            String::new(),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut out = table.to_string();
        out.push_str("\n\nScore distribution:\n");
        let total = stats.papers_scored.max(1);
        for (score, &count) in stats.score_distribution.iter().enumerate().rev() {
            let pct = count as f64 / total as f64 * 100.0;
            let bar = "█".repeat((pct / 2.0) as usize);
            out.push_str(&format!(
                "  {:>2}/10: {:>5} papers ({:>5.1}%) {}\n",
                score, count, pct, bar
            ));
        }
        out
    }

    /// Format a balanced selection as per-category counts.
    pub fn format_selection(&self, selected: &[SelectedPaper]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Category", "Selected", "Top pick"]);

        let mut current: Option<&str> = None;
        for pick in selected {
            if current != Some(pick.category.as_str()) {
                current = Some(pick.category.as_str());
                let count = selected
                    .iter()
                    .filter(|p| p.category == pick.category)
                    .count();
                let mut title: String = pick.paper.title.chars().take(60).collect();
                if title.len() < pick.paper.title.len() {
                    title.push_str("...");
                }
                builder.push_record([pick.category.clone(), count.to_string(), title]);
            }
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Apply color if enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_passthrough() {
        let f = Formatter::new(false);
        assert_eq!(f.success("done"), "✓ done");
        assert_eq!(f.error("bad"), "✗ bad");
    }

    #[test]
    fn test_corpus_stats_table_lists_domains() {
        let stats = CorpusStats::from_scores(
            vec![("econ", 5u8), ("nlin", 7), ("nlin", 1)].into_iter(),
            5,
        );
        let f = Formatter::new(false);
        let text = f.format_corpus_stats(&stats);
        assert!(text.contains("econ"));
        assert!(text.contains("nlin"));
        assert!(text.contains("OVERALL"));
        assert!(text.contains("Score distribution:"));
    }
}
