//! Common test utilities for the wordrace test suite.

#![allow(dead_code)]

use std::time::Duration;

use wordrace::{
    Difficulty, Vocabulary,
    puzzle::Grid,
    versus::{MatchPhase, RecordingObserver, VersusMatch},
};

/// Build a validated vocabulary or panic with the offending input.
pub fn vocab(words: &[&str], difficulty: Difficulty) -> Vocabulary {
    Vocabulary::new(words, difficulty).unwrap()
}

/// Parse a grid from row strings.
pub fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

/// Pad each row with 'Q' filler to the given side length, adding filler
/// rows until the grid is square.
pub fn padded_rows(rows: &[&str], size: usize) -> Vec<String> {
    let mut padded: Vec<String> = rows
        .iter()
        .map(|row| {
            let mut line = row.to_string();
            while line.len() < size {
                line.push('Q');
            }
            line
        })
        .collect();
    while padded.len() < size {
        padded.push("Q".repeat(size));
    }
    padded
}

/// Start a match on a fixed grid, with a recorder attached.
pub fn started_match(
    rows: &[&str],
    words: &[&str],
    difficulty: Difficulty,
) -> (VersusMatch, RecordingObserver) {
    let recorder = RecordingObserver::new();
    let mut session = VersusMatch::new(vocab(words, difficulty)).with_observer(recorder.clone());
    let padded = padded_rows(rows, difficulty.grid_size());
    session
        .start_with_grid(Grid::from_rows(&padded).unwrap())
        .unwrap();
    (session, recorder)
}

/// Advance the clock event to event until the match completes or the
/// opponent runs out of booked events.
pub fn run_to_completion(session: &mut VersusMatch) {
    while session.phase() == MatchPhase::Active {
        let Some(next) = session.next_event_at() else {
            break;
        };
        let now = session.elapsed();
        session.advance(next.saturating_sub(now)).unwrap();
    }
}

/// Shorthand for `Duration::from_millis`.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
