//! Solve command - Run the discovery engine over a saved or regenerated puzzle

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    Difficulty, Vocabulary,
    cli::{
        commands::generate::load_words,
        output::{format_path, print_grid, print_kv, print_section, print_subsection},
    },
    puzzle::{Grid, GridGenerator, SavedPuzzle, discover},
};

#[derive(Parser, Debug)]
#[command(about = "Find every vocabulary word present in a puzzle")]
pub struct SolveArgs {
    /// Saved puzzle JSON produced by `generate --output`
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Words to hide when regenerating instead of loading (comma-separated)
    #[arg(long, short = 'w', value_delimiter = ',', conflicts_with = "input")]
    pub words: Vec<String>,

    /// File with one word per line (alternative to --words)
    #[arg(long, conflicts_with_all = ["input", "words"])]
    pub words_file: Option<PathBuf>,

    /// Difficulty tier when regenerating (`easy`, `medium`, or `hard`)
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: String,

    /// Random seed when regenerating
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print found words as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let (vocabulary, grid, source) = if let Some(path) = &args.input {
        let saved = SavedPuzzle::load_from_file(path)?;
        let (vocabulary, grid, _placements) = saved.reconstruct()?;
        (vocabulary, grid, path.display().to_string())
    } else {
        regenerate(&args)?
    };

    let found = discover(&grid, &vocabulary);

    if args.json {
        println!("{}", serde_json::to_string_pretty(found.results())?);
        return Ok(());
    }

    print_section("Discovery Results");
    print_kv("Puzzle", &source);
    print_kv("Difficulty", vocabulary.difficulty().label());
    print_kv(
        "Found",
        &format!("{} of {} words", found.len(), vocabulary.len()),
    );
    println!();
    print_grid(&grid);

    print_subsection("Words");
    for result in &found {
        println!("  {:12} {}", result.word, format_path(&result.path));
    }

    let missing: Vec<&str> = vocabulary
        .words()
        .iter()
        .filter(|word| !found.contains(word))
        .map(String::as_str)
        .collect();
    if !missing.is_empty() {
        print_subsection("Not found");
        for word in missing {
            println!("  {word}");
        }
    }

    Ok(())
}

/// Generate a fresh puzzle to solve when no saved file was given.
fn regenerate(args: &SolveArgs) -> Result<(Vocabulary, Grid, String)> {
    if args.words.is_empty() && args.words_file.is_none() {
        return Err(anyhow!("Nothing to solve. Use --input, --words, or --words-file"));
    }
    let difficulty: Difficulty = args.difficulty.parse()?;
    let words = load_words(&args.words, args.words_file.as_deref())?;
    let vocabulary =
        Vocabulary::new(&words, difficulty).context("Could not start a round with this word list")?;
    let mut generator = match args.seed {
        Some(seed) => GridGenerator::with_seed(seed),
        None => GridGenerator::new(),
    };
    let puzzle = generator.generate(&vocabulary);
    let source = match args.seed {
        Some(seed) => format!("regenerated ({difficulty}, seed {seed})"),
        None => format!("regenerated ({difficulty})"),
    };
    let (grid, _placements, _report) = puzzle.into_parts();
    Ok((vocabulary, grid, source))
}
