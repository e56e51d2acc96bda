//! Generate command - Produce a word-search grid and optionally save it

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    Difficulty, Vocabulary,
    cli::output::{format_path, print_grid, print_kv, print_section, print_subsection},
    puzzle::{GridGenerator, SavedPuzzle},
};

#[derive(Parser, Debug)]
#[command(about = "Generate a word-search grid")]
pub struct GenerateArgs {
    /// Words to hide in the grid (comma-separated)
    #[arg(long, short = 'w', value_delimiter = ',')]
    pub words: Vec<String>,

    /// File with one word per line (alternative to --words)
    #[arg(long, conflicts_with = "words")]
    pub words_file: Option<PathBuf>,

    /// Difficulty tier (`easy`, `medium`, or `hard`)
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: String,

    /// Random seed for a reproducible layout
    #[arg(long)]
    pub seed: Option<u64>,

    /// Save the generated puzzle as JSON
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Show where each word was placed
    #[arg(long)]
    pub placements: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let words = load_words(&args.words, args.words_file.as_deref())?;
    let vocabulary =
        Vocabulary::new(&words, difficulty).context("Could not start a round with this word list")?;

    let mut generator = match args.seed {
        Some(seed) => GridGenerator::with_seed(seed),
        None => GridGenerator::new(),
    };
    let puzzle = generator.generate(&vocabulary);

    print_section("Generated Puzzle");
    print_kv("Difficulty", difficulty.label());
    print_kv(
        "Grid",
        &format!("{0}x{0}", vocabulary.grid_size()),
    );
    print_kv("Words", &vocabulary.words().join(", "));
    if let Some(seed) = args.seed {
        print_kv("Seed", &seed.to_string());
    }
    println!();
    print_grid(puzzle.grid());

    if args.placements {
        print_subsection("Placements");
        for placement in puzzle.placements() {
            println!("  {:12} {}", placement.word, format_path(&placement.cells));
        }
    }

    let report = puzzle.report();
    if !report.is_clean() {
        print_subsection("Generation notes");
        if !report.fallback_words.is_empty() {
            println!(
                "  Placed via horizontal fallback: {}",
                report.fallback_words.join(", ")
            );
        }
        if !report.overwritten_words.is_empty() {
            println!(
                "  Forced over existing letters: {}",
                report.overwritten_words.join(", ")
            );
        }
        if !report.missing_words.is_empty() {
            println!(
                "  WARNING: not findable after generation: {}",
                report.missing_words.join(", ")
            );
        }
    }

    if let Some(path) = &args.output {
        let saved = SavedPuzzle::from_puzzle(&puzzle, &vocabulary);
        saved.save_to_file(path)?;
        println!("\nPuzzle saved to: {}", path.display());
    }

    Ok(())
}

/// Collect the word list from `--words` or `--words-file`.
pub fn load_words(words: &[String], words_file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = words_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list: {}", path.display()))?;
        let words: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if words.is_empty() {
            return Err(anyhow!("Word list {} is empty", path.display()));
        }
        Ok(words)
    } else if words.is_empty() {
        Err(anyhow!("No words given. Use --words or --words-file"))
    } else {
        Ok(words.to_vec())
    }
}
