//! Puzzle serialization support
//!
//! Saves a generated puzzle as JSON so a round can be reproduced or solved
//! later without the generator's RNG state.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::{
    Difficulty, Vocabulary,
    puzzle::{GeneratedPuzzle, Grid, WordPlacement},
};

/// Serializable snapshot of a generated puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedPuzzle {
    /// Version of the save format (for future compatibility)
    pub version: u32,
    /// Difficulty the puzzle was generated for
    pub difficulty: Difficulty,
    /// Canonical vocabulary words, in placement order
    pub words: Vec<String>,
    /// Grid rows, top to bottom
    pub rows: Vec<String>,
    /// Where the generator put each word
    pub placements: Vec<WordPlacement>,
}

impl SavedPuzzle {
    /// Current save format version
    pub const VERSION: u32 = 1;

    /// Snapshot a generated puzzle together with its vocabulary.
    pub fn from_puzzle(puzzle: &GeneratedPuzzle, vocabulary: &Vocabulary) -> Self {
        Self {
            version: Self::VERSION,
            difficulty: vocabulary.difficulty(),
            words: vocabulary.words().to_vec(),
            rows: puzzle.grid().rows(),
            placements: puzzle.placements().to_vec(),
        }
    }

    /// Rebuild the vocabulary, grid, and placements from the snapshot.
    ///
    /// Validates the format version, re-validates the word list and grid
    /// contents, and checks that every recorded placement still spells its
    /// word on the loaded grid.
    pub fn reconstruct(&self) -> Result<(Vocabulary, Grid, Vec<WordPlacement>)> {
        if self.version != Self::VERSION {
            return Err(anyhow!(
                "Unsupported puzzle save format version: {}. Expected {}",
                self.version,
                Self::VERSION
            ));
        }

        let vocabulary = Vocabulary::new(&self.words, self.difficulty)
            .context("Saved puzzle has an invalid word list")?;
        let grid = Grid::from_rows(&self.rows).context("Saved puzzle has an invalid grid")?;
        if grid.size() != self.difficulty.grid_size() {
            return Err(anyhow!(
                "Saved grid side {} does not match difficulty {} (expected {})",
                grid.size(),
                self.difficulty,
                self.difficulty.grid_size()
            ));
        }

        for placement in &self.placements {
            let spelled: String = placement
                .cells
                .iter()
                .map(|&pos| {
                    if grid.in_bounds(pos) {
                        Ok(grid.letter(pos))
                    } else {
                        Err(anyhow!(
                            "Placement for {} references out-of-bounds cell {pos}",
                            placement.word
                        ))
                    }
                })
                .collect::<Result<String>>()?;
            if spelled != placement.word {
                return Err(anyhow!(
                    "Placement for {} spells {spelled} on the saved grid",
                    placement.word
                ));
            }
        }

        Ok((vocabulary, grid, self.placements.clone()))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("Failed to create file: {}", path.as_ref().display()))?;
        let writer = BufWriter::new(file);

        serde_json::to_writer_pretty(writer, self).context("Failed to serialize puzzle")?;

        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open file: {}", path.as_ref().display()))?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).context("Failed to deserialize puzzle")
    }
}
