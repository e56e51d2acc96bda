//! Observer port - abstraction for match event notification
//!
//! This port defines the interface for observing a running match,
//! allowing composable rendering and data collection without coupling
//! match logic to specific output mechanisms.

use crate::{Result, puzzle::Position, versus::MatchSummary};

/// Observer trait for monitoring a match
///
/// Observers can be composed to react to match events in different ways.
/// Examples include:
/// - Console rendering of the opponent's progress
/// - Event recording for tests and replays
/// - Progress display for interactive sessions
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - a boundary
/// between the match core and external presentation mechanisms. Different
/// rendering strategies are **adapters** that implement this port.
///
/// # Event Sequence
///
/// The observer methods are called in the following order:
/// 1. For each word the simulated opponent works through:
///    - `on_search_begin(path)` - The opponent starts tracing a path
///    - `on_word_found(word)` - The opponent completes the word
/// 2. `on_match_complete(summary)` - Once, when either agent finishes
///
/// Only the simulated opponent's discoveries are announced through
/// `on_search_begin`/`on_word_found`; the interactive participant's finds
/// are returned synchronously from the call that reported them.
///
/// # Examples
///
/// ```no_run
/// use wordrace::{ports::MatchObserver, versus::MatchSummary};
///
/// struct CountingObserver {
///     words_seen: usize,
/// }
///
/// impl MatchObserver for CountingObserver {
///     fn on_word_found(&mut self, _word: &str) -> wordrace::Result<()> {
///         self.words_seen += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait MatchObserver: Send {
    /// Called when the opponent begins searching along a path.
    ///
    /// # Parameters
    ///
    /// * `path` - The cells the opponent will trace, first letter to last
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to animate or record the search.
    fn on_search_begin(&mut self, _path: &[Position]) -> Result<()> {
        Ok(())
    }

    /// Called when the opponent completes a word.
    ///
    /// # Parameters
    ///
    /// * `word` - The canonical uppercase word that was found
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to update displayed progress.
    fn on_word_found(&mut self, _word: &str) -> Result<()> {
        Ok(())
    }

    /// Called exactly once when the match completes.
    ///
    /// # Parameters
    ///
    /// * `summary` - Winner, both scores, and elapsed match time
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to present the final result.
    fn on_match_complete(&mut self, _summary: &MatchSummary) -> Result<()> {
        Ok(())
    }
}
