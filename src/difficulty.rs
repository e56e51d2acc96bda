//! Difficulty tiers: grid size, permitted directions, and opponent pacing
//!
//! The three tiers fix every tunable of a round. Harder tiers use a larger
//! grid, permit more traversal directions (up to all eight, including
//! reversed axes), and drive the simulated opponent on a faster schedule.

use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::puzzle::Direction;

/// Directions permitted on the easy tier: forward horizontal and vertical.
pub const EASY_DIRECTIONS: [Direction; 2] = [Direction::new(0, 1), Direction::new(1, 0)];

/// Directions permitted on the medium tier: the two forward axes plus all
/// four diagonals. Leftward/upward axis traversal stays excluded.
pub const MEDIUM_DIRECTIONS: [Direction; 6] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
];

/// Directions permitted on the hard tier: all eight, including reversed
/// axis traversal.
pub const HARD_DIRECTIONS: [Direction; 8] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, 1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(-1, -1),
    Direction::new(0, -1),
    Direction::new(-1, 0),
];

/// A difficulty tier, fixing grid size, permitted direction set, and the
/// simulated opponent's pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Grid side length for this tier.
    pub fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 8,
            Difficulty::Medium => 10,
            Difficulty::Hard => 12,
        }
    }

    /// The permitted direction set for this tier.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Difficulty::Easy => &EASY_DIRECTIONS,
            Difficulty::Medium => &MEDIUM_DIRECTIONS,
            Difficulty::Hard => &HARD_DIRECTIONS,
        }
    }

    /// Whether the generator may write a word in reversed letter order.
    /// Only the hard tier allows this; a reversed placement reads forward
    /// along the opposite direction, which only hard permits.
    pub fn allows_reversed_placement(self) -> bool {
        matches!(self, Difficulty::Hard)
    }

    /// The simulated opponent's pace on this tier.
    pub fn pacing(self) -> Pacing {
        match self {
            Difficulty::Easy => Pacing {
                search_slot: Duration::from_millis(4_500),
                reveal_per_letter: Duration::from_millis(750),
            },
            Difficulty::Medium => Pacing {
                search_slot: Duration::from_millis(3_000),
                reveal_per_letter: Duration::from_millis(500),
            },
            Difficulty::Hard => Pacing {
                search_slot: Duration::from_millis(1_800),
                reveal_per_letter: Duration::from_millis(300),
            },
        }
    }

    /// Short lowercase name, as accepted by [`Difficulty::from_str`].
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(crate::Error::ParseDifficulty {
                input: other.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// Delay parameters for the simulated opponent.
///
/// The opponent "searches" one pending word per slot: the search
/// notification for the word at slot index `i` fires `(i + 1) *
/// search_slot` after scheduling, and the found notification follows
/// `path_len * reveal_per_letter` later. Harder tiers use shorter delays;
/// all tiers stay slower than a human is expected to be, to keep the race
/// competitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Gap between consecutive searching slots.
    pub search_slot: Duration,
    /// Reveal delay contributed by each letter of the path.
    pub reveal_per_letter: Duration,
}

impl Pacing {
    /// Instant (relative to schedule time) the search notification for
    /// slot `slot` fires.
    pub fn search_begin_at(&self, slot: usize) -> Duration {
        self.search_slot * (slot as u32 + 1)
    }

    /// Instant (relative to schedule time) the found notification for
    /// slot `slot` fires, given the path length.
    pub fn reveal_at(&self, slot: usize, path_len: usize) -> Duration {
        self.search_begin_at(slot) + self.reveal_per_letter * path_len as u32
    }
}
