//! Mechmine CLI - command-line interface for the mechanism scoring and
//! precision evaluation pipeline.

use clap::Parser;
use mechmine_cli::commands;
use mechmine_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let formatter = Formatter::new(!cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli, formatter: &Formatter) -> mechmine_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let database = cli.database.unwrap_or_else(|| config.paths.database.clone());

    match cli.command {
        Command::Score(args) => commands::execute_score(args, &config, &database, formatter),
        Command::Select(args) => commands::execute_select(args, &config, &database, formatter),
        Command::Precision(args) => commands::execute_precision(args, &config, formatter),
        Command::Refine(args) => commands::execute_refine(args, &config, formatter),
    }
}
