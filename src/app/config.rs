//! Configuration types for match creation.

use crate::{Difficulty, Pacing, Result, Vocabulary, versus::VersusMatch};

/// Configuration for creating a versus match.
///
/// This type provides a type-safe, builder-style API for configuring a
/// round before the word list has been validated. [`MatchConfig::build`]
/// performs the single validation pass; afterwards the match only ever
/// handles canonical vocabulary words.
///
/// # Examples
///
/// ```
/// use wordrace::{Difficulty, app::MatchConfig};
///
/// let session = MatchConfig::new(["CAT", "DOG"], Difficulty::Easy)
///     .with_seed(42)
///     .build()?;
/// # Ok::<(), wordrace::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Raw word list, validated at build time
    pub words: Vec<String>,
    /// Difficulty tier, fixing grid size, directions, and default pacing
    pub difficulty: Difficulty,
    /// Random seed for a reproducible grid
    pub seed: Option<u64>,
    /// Opponent pacing override
    pub pacing: Option<Pacing>,
}

impl MatchConfig {
    /// Create a new match configuration.
    ///
    /// Uses default values for the other parameters:
    /// - Seed: None (non-deterministic layout)
    /// - Pacing: the difficulty's default
    pub fn new<I, S>(words: I, difficulty: Difficulty) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            difficulty,
            seed: None,
            pacing: None,
        }
    }

    /// Set the random seed for a reproducible grid layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the difficulty's default opponent pacing.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Validate the word list and assemble an idle match.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the word list is empty, a word is
    /// empty or carries a non-letter, or a word does not fit the grid.
    pub fn build(self) -> Result<VersusMatch> {
        let vocabulary = Vocabulary::new(&self.words, self.difficulty)?;
        let mut session = VersusMatch::new(vocabulary);
        if let Some(seed) = self.seed {
            session = session.with_seed(seed);
        }
        if let Some(pacing) = self.pacing {
            session = session.with_pacing(pacing);
        }
        Ok(session)
    }
}
