//! Match phases, agents, per-agent progress, and final summaries

use std::{collections::HashSet, fmt, time::Duration};

use serde::{Deserialize, Serialize};

/// Lifecycle of a versus match.
///
/// Transitions: `Idle -> Initializing -> Active -> (Paused <-> Active) ->
/// Completed`. Initialization covers grid generation and the opponent's
/// discovery pass; no events fire and no completion check runs until the
/// match is `Active`. `Completed` is terminal and entered exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    Idle,
    Initializing,
    Active,
    Paused,
    Completed,
}

impl MatchPhase {
    pub fn label(self) -> &'static str {
        match self {
            MatchPhase::Idle => "idle",
            MatchPhase::Initializing => "initializing",
            MatchPhase::Active => "active",
            MatchPhase::Paused => "paused",
            MatchPhase::Completed => "completed",
        }
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the two competing word-finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Agent {
    Player,
    Opponent,
}

impl Agent {
    pub fn other(self) -> Agent {
        match self {
            Agent::Player => Agent::Opponent,
            Agent::Opponent => Agent::Player,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Agent::Player => "player",
            Agent::Opponent => "opponent",
        }
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One agent's found-set and score.
///
/// Each found word credits `10 x word length` points, applied exactly once
/// when the word enters the found-set. The two agents' progress never mixes;
/// both may score the same word independently.
#[derive(Debug, Clone, Default)]
pub struct AgentProgress {
    found: HashSet<String>,
    score: u32,
}

impl AgentProgress {
    /// Add `word` to the found-set, crediting its points. Returns false if
    /// the word was already found (no score change).
    pub fn record(&mut self, word: &str) -> bool {
        if self.found.insert(word.to_string()) {
            self.score += 10 * word.len() as u32;
            true
        } else {
            false
        }
    }

    pub fn has_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Found words, in no particular order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.found.iter().map(String::as_str)
    }
}

/// Final outcome of a completed match, for rendering and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Agent,
    pub player_score: u32,
    pub opponent_score: u32,
    /// Match time from start to completion, pauses excluded.
    pub elapsed: Duration,
}

/// What became of a word the interactive participant submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindOutcome {
    /// New vocabulary word; credited to the player.
    Accepted,
    /// Already in the player's found-set; no score change.
    AlreadyFound,
    /// Not a vocabulary word; ignored.
    NotInVocabulary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_scores_ten_per_letter_once() {
        let mut progress = AgentProgress::default();
        assert!(progress.record("ALPHA"));
        assert_eq!(progress.score(), 50);
        assert!(!progress.record("ALPHA"));
        assert_eq!(progress.score(), 50);
        assert!(progress.record("BETA"));
        assert_eq!(progress.score(), 90);
        assert_eq!(progress.found_count(), 2);
        assert!(progress.has_found("ALPHA"));
        assert!(!progress.has_found("GAMMA"));
    }

    #[test]
    fn agents_are_each_others_other() {
        assert_eq!(Agent::Player.other(), Agent::Opponent);
        assert_eq!(Agent::Opponent.other(), Agent::Player);
    }

    #[test]
    fn summary_serializes_with_lowercase_agent() {
        let summary = MatchSummary {
            winner: Agent::Opponent,
            player_score: 30,
            opponent_score: 120,
            elapsed: Duration::from_secs(42),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"winner\":\"opponent\""));
        let back: MatchSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
