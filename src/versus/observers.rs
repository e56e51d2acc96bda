//! Reusable match observers
//!
//! The match core announces opponent activity through the
//! [`MatchObserver`] port; this module provides the in-memory recorder used
//! by tests and replay tooling. Console rendering lives in the CLI layer.

use std::sync::{Arc, Mutex};

use crate::{Result, ports::MatchObserver, puzzle::Position, versus::MatchSummary};

/// One observed match event, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchEvent {
    SearchBegin(Vec<Position>),
    WordFound(String),
    Completed(MatchSummary),
}

/// Observer that records every event it sees.
///
/// Clones share the same event log, so a caller can keep one handle and
/// give the other to the match.
#[derive(Clone)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<MatchEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of every recorded event, in arrival order.
    pub fn events(&self) -> Vec<MatchEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Words the opponent found, in arrival order.
    pub fn words_found(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                MatchEvent::WordFound(word) => Some(word.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn search_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, MatchEvent::SearchBegin(_)))
            .count()
    }

    /// Number of completion events observed. Anything other than zero or
    /// one indicates a broken match lifecycle.
    pub fn completed_count(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, MatchEvent::Completed(_)))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Default for RecordingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchObserver for RecordingObserver {
    fn on_search_begin(&mut self, path: &[Position]) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(MatchEvent::SearchBegin(path.to_vec()));
        Ok(())
    }

    fn on_word_found(&mut self, word: &str) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(MatchEvent::WordFound(word.to_string()));
        Ok(())
    }

    fn on_match_complete(&mut self, summary: &MatchSummary) -> Result<()> {
        self.events
            .lock()
            .unwrap()
            .push(MatchEvent::Completed(summary.clone()));
        Ok(())
    }
}
