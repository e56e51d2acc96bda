//! wordrace CLI - Word-search puzzle toolkit
//!
//! This CLI provides a unified interface for:
//! - Generating word-search grids for the three difficulty tiers
//! - Solving saved puzzles with the exhaustive discovery engine
//! - Running timed duels against the simulated opponent

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordrace")]
#[command(version, about = "Word-search puzzle toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a word-search grid
    Generate(wordrace::cli::commands::generate::GenerateArgs),

    /// Find every vocabulary word present in a saved puzzle
    Solve(wordrace::cli::commands::solve::SolveArgs),

    /// Run a timed match against the simulated opponent
    Duel(wordrace::cli::commands::duel::DuelArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => wordrace::cli::commands::generate::execute(args),
        Commands::Solve(args) => wordrace::cli::commands::solve::execute(args),
        Commands::Duel(args) => wordrace::cli::commands::duel::execute(args),
    }
}
