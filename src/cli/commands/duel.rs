//! Duel command - Race a simulated player against the scheduled opponent

use std::{path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    Difficulty,
    adapters::JsonlStatsSink,
    app::MatchConfig,
    cli::{
        commands::generate::load_words,
        output::{create_duel_progress, format_duration, print_grid, print_kv, print_section,
                 print_subsection},
    },
    versus::{MatchEvent, MatchPhase, RecordingObserver},
};

#[derive(Parser, Debug)]
#[command(about = "Run a timed match against the simulated opponent")]
pub struct DuelArgs {
    /// Words to hide in the grid (comma-separated)
    #[arg(long, short = 'w', value_delimiter = ',')]
    pub words: Vec<String>,

    /// File with one word per line (alternative to --words)
    #[arg(long, conflicts_with = "words")]
    pub words_file: Option<PathBuf>,

    /// Difficulty tier (`easy`, `medium`, or `hard`)
    #[arg(long, short = 'd', default_value = "medium")]
    pub difficulty: String,

    /// Random seed for a reproducible grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Virtual seconds between the simulated player's finds
    /// (omit to spectate the opponent working alone)
    #[arg(long)]
    pub player_interval: Option<u64>,

    /// Append the final summary to a JSONL stats file
    #[arg(long)]
    pub stats: Option<PathBuf>,
}

pub fn execute(args: DuelArgs) -> Result<()> {
    let difficulty: Difficulty = args.difficulty.parse()?;
    let words = load_words(&args.words, args.words_file.as_deref())?;

    let mut config = MatchConfig::new(words, difficulty);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let recorder = RecordingObserver::new();
    let mut session = config
        .build()
        .context("Could not start a round with this word list")?
        .with_observer(recorder.clone());
    if let Some(path) = &args.stats {
        session = session.with_stats_sink(JsonlStatsSink::new(path)?);
    }
    session.start()?;

    let vocabulary: Vec<String> = session.vocabulary().words().to_vec();
    let total = vocabulary.len();

    print_section("Duel");
    print_kv("Difficulty", difficulty.label());
    print_kv("Words", &vocabulary.join(", "));
    match args.player_interval {
        Some(interval) => print_kv("Player", &format!("finds a word every {interval}s")),
        None => print_kv("Player", "spectating"),
    }
    println!();
    if let Some(grid) = session.grid() {
        print_grid(grid);
    }
    println!();

    let interval = args.player_interval.map(Duration::from_secs);
    let mut player_ticks: u32 = 0;
    let pb = create_duel_progress(total as u64);
    pb.set_message("opponent searching");

    while session.phase() == MatchPhase::Active {
        let next_opponent = session.next_event_at();
        let next_player = interval.map(|iv| iv * (player_ticks + 1));
        let target = match (next_opponent, next_player) {
            (Some(opponent), Some(player)) => opponent.min(player),
            (Some(opponent), None) => opponent,
            (None, Some(player)) => player,
            // Nothing left to fire and no player: the match cannot progress.
            (None, None) => break,
        };

        let now = session.elapsed();
        session.advance(target.saturating_sub(now))?;
        pb.set_position(session.opponent().found_count() as u64);

        if session.phase() == MatchPhase::Active
            && next_player.is_some_and(|player| player <= session.elapsed())
        {
            player_ticks += 1;
            let next_find = vocabulary
                .iter()
                .find(|word| !session.player().has_found(word));
            if let Some(word) = next_find {
                session.record_player_find(word)?;
            }
        }
    }
    pb.finish_and_clear();

    print_subsection("Opponent timeline");
    for event in recorder.events() {
        match event {
            MatchEvent::SearchBegin(path) => {
                println!("  searching a {}-cell path", path.len());
            }
            MatchEvent::WordFound(word) => println!("  found {word}"),
            MatchEvent::Completed(_) => {}
        }
    }

    match session.summary() {
        Some(summary) => {
            print_section("Result");
            print_kv("Winner", summary.winner.label());
            print_kv("Player score", &summary.player_score.to_string());
            print_kv("Opponent score", &summary.opponent_score.to_string());
            print_kv("Match time", &format_duration(summary.elapsed));
            if let Some(path) = &args.stats {
                println!("\nSummary appended to: {}", path.display());
            }
        }
        None => println!("\nMatch stalled without a winner (no schedulable events remain)"),
    }

    Ok(())
}
