//! Stats sink port for match results.
//!
//! This module defines the trait boundary between the match core and the
//! statistics/leaderboard collaborator that persists results.

use crate::{Result, versus::MatchSummary};

/// Port for recording completed match results.
///
/// This trait abstracts the destination, allowing different implementations
/// (in-memory collection, JSONL export, database, etc.) without coupling
/// the match core to specific storage formats.
///
/// # Examples
///
/// ```no_run
/// use wordrace::{ports::StatsSink, versus::MatchSummary};
///
/// fn publish<S: StatsSink>(sink: &mut S, summary: &MatchSummary) -> wordrace::Result<()> {
///     sink.record_match(summary)
/// }
/// ```
pub trait StatsSink: Send {
    /// Record one completed match.
    ///
    /// # Arguments
    ///
    /// * `summary` - Winner, both scores, and elapsed match time
    ///
    /// # Errors
    ///
    /// Returns an error if the sink's storage cannot be written.
    fn record_match(&mut self, summary: &MatchSummary) -> Result<()>;
}
