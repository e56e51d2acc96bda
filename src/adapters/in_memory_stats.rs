//! In-memory stats sink for testing.
//!
//! This adapter collects match summaries in memory, enabling fast tests
//! and ad hoc aggregation without any file system I/O.

use std::sync::{Arc, Mutex};

use crate::{Result, ports::StatsSink, versus::MatchSummary};

/// In-memory stats sink.
///
/// Stores summaries in a shared vector. Clones share the same storage, so
/// a caller can keep one handle and give the other to the match.
///
/// # Examples
///
/// ```
/// use wordrace::{
///     adapters::InMemoryStats,
///     ports::StatsSink,
///     versus::{Agent, MatchSummary},
/// };
/// use std::time::Duration;
///
/// let stats = InMemoryStats::new();
/// let mut sink = stats.clone();
/// sink.record_match(&MatchSummary {
///     winner: Agent::Player,
///     player_score: 90,
///     opponent_score: 40,
///     elapsed: Duration::from_secs(75),
/// })?;
/// assert_eq!(stats.count(), 1);
/// # Ok::<(), wordrace::Error>(())
/// ```
#[derive(Clone)]
pub struct InMemoryStats {
    records: Arc<Mutex<Vec<MatchSummary>>>,
}

impl InMemoryStats {
    /// Create a new empty stats sink.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of matches recorded so far.
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Snapshot of every recorded summary, in arrival order.
    pub fn records(&self) -> Vec<MatchSummary> {
        self.records.lock().unwrap().clone()
    }

    /// The most recently recorded summary, if any.
    pub fn last(&self) -> Option<MatchSummary> {
        self.records.lock().unwrap().last().cloned()
    }

    /// Clear all recorded summaries.
    pub fn clear(&self) {
        self.records.lock().unwrap().clear();
    }
}

impl Default for InMemoryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsSink for InMemoryStats {
    fn record_match(&mut self, summary: &MatchSummary) -> Result<()> {
        self.records.lock().unwrap().push(summary.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::versus::Agent;
    use std::time::Duration;

    fn summary(winner: Agent) -> MatchSummary {
        MatchSummary {
            winner,
            player_score: 50,
            opponent_score: 70,
            elapsed: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_records_in_arrival_order() {
        let stats = InMemoryStats::new();
        let mut sink = stats.clone();

        assert_eq!(stats.count(), 0);
        assert!(stats.last().is_none());

        sink.record_match(&summary(Agent::Player)).unwrap();
        sink.record_match(&summary(Agent::Opponent)).unwrap();

        assert_eq!(stats.count(), 2);
        assert_eq!(stats.last().unwrap().winner, Agent::Opponent);
        assert_eq!(stats.records()[0].winner, Agent::Player);
    }

    #[test]
    fn test_clear_removes_all() {
        let stats = InMemoryStats::new();
        let mut sink = stats.clone();
        sink.record_match(&summary(Agent::Player)).unwrap();
        stats.clear();
        assert_eq!(stats.count(), 0);
    }
}
