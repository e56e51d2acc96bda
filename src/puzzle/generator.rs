//! Word-placement grid generation
//!
//! Places every vocabulary word along a randomly chosen permitted direction
//! and start cell, retrying up to a fixed attempt budget per word. Words may
//! cross where letters agree. When the random budget runs out, a
//! deterministic horizontal first-fit fallback guarantees the word still
//! lands; remaining cells are filled with random letters. Generation never
//! fails, but anything that strayed from the happy path is reported in a
//! [`GenerationReport`] so callers and tests can see it.

use rand::{Rng, SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Vocabulary,
    puzzle::{Direction, Grid, Position, discovery},
};

/// Randomized attempts per word before the fallback takes over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;

/// The exact cells a placed word occupies, ordered first letter to last.
///
/// On the hard tier a word may be written in reversed letter order; `cells`
/// still follows the word's own letters, so it runs against the written
/// direction in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPlacement {
    pub word: String,
    pub cells: Vec<Position>,
}

/// Soft conditions observed during one generation run.
///
/// None of these abort generation. Fallback placement and overwrites trade
/// layout quality for the guarantee that every word lands; a discovery miss
/// means an overwrite clobbered an earlier word. All are diagnostics for
/// callers and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Words that exhausted the random attempt budget and were force-placed.
    pub fallback_words: Vec<String>,
    /// Words whose forced placement overwrote conflicting letters.
    pub overwritten_words: Vec<String>,
    /// Vocabulary words the post-fill discovery pass could not find.
    pub missing_words: Vec<String>,
}

impl GenerationReport {
    /// True when every word placed randomly and discovery found them all.
    pub fn is_clean(&self) -> bool {
        self.fallback_words.is_empty()
            && self.overwritten_words.is_empty()
            && self.missing_words.is_empty()
    }
}

/// A finished grid plus the placements and diagnostics that produced it.
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    grid: Grid,
    placements: Vec<WordPlacement>,
    report: GenerationReport,
}

impl GeneratedPuzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One placement per vocabulary word, in vocabulary order.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    pub fn placement(&self, word: &str) -> Option<&WordPlacement> {
        let upper = word.to_ascii_uppercase();
        self.placements.iter().find(|p| p.word == upper)
    }

    pub fn report(&self) -> &GenerationReport {
        &self.report
    }

    pub fn into_parts(self) -> (Grid, Vec<WordPlacement>, GenerationReport) {
        (self.grid, self.placements, self.report)
    }
}

/// Grid generator with an owned RNG, seedable for reproducible layouts.
pub struct GridGenerator {
    rng: StdRng,
}

impl GridGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::seed_from_u64(random()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a grid containing every word of `vocabulary`.
    ///
    /// Words are placed in vocabulary order. The returned report lists any
    /// fallback placements, forced overwrites, and discovery misses; a clean
    /// run has an empty report.
    pub fn generate(&mut self, vocabulary: &Vocabulary) -> GeneratedPuzzle {
        let size = vocabulary.grid_size();
        let mut buffer: Vec<Option<u8>> = vec![None; size * size];
        let mut placements = Vec::with_capacity(vocabulary.len());
        let mut report = GenerationReport::default();

        for word in vocabulary.words() {
            let placement = self
                .place_randomly(word, vocabulary, &mut buffer, size)
                .unwrap_or_else(|| {
                    report.fallback_words.push(word.clone());
                    place_forced(word, &mut buffer, size, &mut report)
                });
            placements.push(placement);
        }

        let rng = &mut self.rng;
        let cells: Vec<u8> = buffer
            .into_iter()
            .map(|cell| match cell {
                Some(letter) => letter,
                None => b'A' + rng.random_range(0..26u8),
            })
            .collect();
        let grid = Grid::from_cells(size, cells);

        // Self-check: every placed word must be findable in the final grid.
        let found = discovery::discover(&grid, vocabulary);
        for word in vocabulary.words() {
            if !found.contains(word) {
                report.missing_words.push(word.clone());
            }
        }

        GeneratedPuzzle {
            grid,
            placements,
            report,
        }
    }

    /// Try the randomized attempt budget for one word.
    fn place_randomly(
        &mut self,
        word: &str,
        vocabulary: &Vocabulary,
        buffer: &mut [Option<u8>],
        size: usize,
    ) -> Option<WordPlacement> {
        let directions = vocabulary.difficulty().directions();
        let may_reverse = vocabulary.difficulty().allows_reversed_placement();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let direction = directions[self.rng.random_range(0..directions.len())];
            let start = Position::new(
                self.rng.random_range(0..size),
                self.rng.random_range(0..size),
            );
            let reversed = may_reverse && self.rng.random_bool(0.5);
            if let Some(cells) = try_write(word, start, direction, reversed, buffer, size) {
                return Some(WordPlacement {
                    word: word.to_string(),
                    cells,
                });
            }
        }
        None
    }
}

impl Default for GridGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `word` from `start` along `direction` if every target cell is in
/// bounds and empty or already holds the matching letter. Returns the cells
/// in word-letter order (reversed writes still report first letter first).
fn try_write(
    word: &str,
    start: Position,
    direction: Direction,
    reversed: bool,
    buffer: &mut [Option<u8>],
    size: usize,
) -> Option<Vec<Position>> {
    let letters: Vec<u8> = if reversed {
        word.bytes().rev().collect()
    } else {
        word.bytes().collect()
    };

    let mut cells = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let pos = direction.offset(start, i, size)?;
        match buffer[pos.row * size + pos.col] {
            None => {}
            Some(existing) if existing == letter => {}
            Some(_) => return None,
        }
        cells.push(pos);
    }

    for (&letter, &pos) in letters.iter().zip(&cells) {
        buffer[pos.row * size + pos.col] = Some(letter);
    }
    if reversed {
        cells.reverse();
    }
    Some(cells)
}

/// Deterministic fallback: first horizontal window, scanning row-major,
/// where the word fits without conflicting letters. If no such window
/// exists the word is written over the first in-bounds window anyway and
/// the overwrite is reported.
fn place_forced(
    word: &str,
    buffer: &mut [Option<u8>],
    size: usize,
    report: &mut GenerationReport,
) -> WordPlacement {
    let letters = word.as_bytes();
    let last_col = size - letters.len();
    for row in 0..size {
        for col in 0..=last_col {
            let window = |i: usize| row * size + col + i;
            let fits = letters
                .iter()
                .enumerate()
                .all(|(i, &letter)| match buffer[window(i)] {
                    None => true,
                    Some(existing) => existing == letter,
                });
            if fits {
                let mut cells = Vec::with_capacity(letters.len());
                for (i, &letter) in letters.iter().enumerate() {
                    buffer[window(i)] = Some(letter);
                    cells.push(Position::new(row, col + i));
                }
                return WordPlacement {
                    word: word.to_string(),
                    cells,
                };
            }
        }
    }

    // No compatible window anywhere. Claim the top-left window so the word
    // is still present, and report the letters it stamped over.
    report.overwritten_words.push(word.to_string());
    let mut cells = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        buffer[i] = Some(letter);
        cells.push(Position::new(0, i));
    }
    WordPlacement {
        word: word.to_string(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Difficulty;

    fn vocab(words: &[&str], difficulty: Difficulty) -> Vocabulary {
        Vocabulary::new(words, difficulty).unwrap()
    }

    #[test]
    fn places_every_word_and_discovery_confirms() {
        let vocabulary = vocab(&["CAT", "DOG", "BIRD", "FISH"], Difficulty::Easy);
        let mut generator = GridGenerator::with_seed(7);
        let puzzle = generator.generate(&vocabulary);
        assert_eq!(puzzle.placements().len(), 4);
        assert!(puzzle.report().missing_words.is_empty());
        let found = discovery::discover(puzzle.grid(), &vocabulary);
        for word in vocabulary.words() {
            assert!(found.contains(word), "{word} not findable");
        }
    }

    #[test]
    fn placement_cells_spell_the_word() {
        let vocabulary = vocab(&["HELLO", "WORLD"], Difficulty::Medium);
        let mut generator = GridGenerator::with_seed(21);
        let puzzle = generator.generate(&vocabulary);
        for placement in puzzle.placements() {
            let spelled: String = placement
                .cells
                .iter()
                .map(|&pos| puzzle.grid().letter(pos))
                .collect();
            assert_eq!(spelled, placement.word);
        }
    }

    #[test]
    fn placement_cells_follow_a_straight_line() {
        let vocabulary = vocab(&["STONE", "RIVER", "CLOUD"], Difficulty::Hard);
        let mut generator = GridGenerator::with_seed(3);
        let puzzle = generator.generate(&vocabulary);
        for placement in puzzle.placements() {
            let step =
                Direction::between(placement.cells[0], placement.cells[1]).unwrap();
            for pair in placement.cells.windows(2) {
                assert_eq!(Direction::between(pair[0], pair[1]), Some(step));
            }
        }
    }

    #[test]
    fn easy_placements_use_forward_axes_only() {
        let vocabulary = vocab(&["MAPLE", "OAK", "PINE"], Difficulty::Easy);
        let mut generator = GridGenerator::with_seed(11);
        let puzzle = generator.generate(&vocabulary);
        for placement in puzzle.placements() {
            let step =
                Direction::between(placement.cells[0], placement.cells[1]).unwrap();
            assert!(
                Difficulty::Easy.directions().contains(&step),
                "{} placed along {step}",
                placement.word
            );
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let vocabulary = vocab(&["ALPHA", "BETA", "GAMMA"], Difficulty::Medium);
        let first = GridGenerator::with_seed(99).generate(&vocabulary);
        let second = GridGenerator::with_seed(99).generate(&vocabulary);
        assert_eq!(first.grid(), second.grid());
        assert_eq!(first.placements(), second.placements());
    }

    #[test]
    fn crossing_words_share_agreeing_letters() {
        // Enough words that crossings occur; the spelled-letters check above
        // plus a clean report means every crossing agreed.
        let vocabulary = vocab(
            &["STREAM", "TRACE", "MASTER", "RESET", "CREST"],
            Difficulty::Medium,
        );
        let mut generator = GridGenerator::with_seed(5);
        let puzzle = generator.generate(&vocabulary);
        assert!(puzzle.report().missing_words.is_empty());
        for placement in puzzle.placements() {
            let spelled: String = placement
                .cells
                .iter()
                .map(|&pos| puzzle.grid().letter(pos))
                .collect();
            assert_eq!(spelled, placement.word);
        }
    }

    #[test]
    fn forced_placement_respects_existing_letters() {
        let mut buffer: Vec<Option<u8>> = vec![None; 16];
        // Occupy row 0 with a conflicting letter so CAT must slide past it.
        buffer[0] = Some(b'X');
        let mut report = GenerationReport::default();
        let placement = place_forced("CAT", &mut buffer, 4, &mut report);
        assert_eq!(placement.cells[0], Position::new(0, 1));
        assert!(report.overwritten_words.is_empty());
    }

    #[test]
    fn forced_placement_reuses_agreeing_letters() {
        let mut buffer: Vec<Option<u8>> = vec![None; 16];
        buffer[0] = Some(b'C');
        buffer[2] = Some(b'T');
        let mut report = GenerationReport::default();
        let placement = place_forced("CAT", &mut buffer, 4, &mut report);
        assert_eq!(placement.cells[0], Position::new(0, 0));
        assert!(report.overwritten_words.is_empty());
    }

    #[test]
    fn forced_placement_overwrites_only_as_last_resort() {
        // Every cell conflicts, so the word stamps the top-left window.
        let mut buffer: Vec<Option<u8>> = vec![Some(b'Z'); 16];
        let mut report = GenerationReport::default();
        let placement = place_forced("CAT", &mut buffer, 4, &mut report);
        assert_eq!(placement.cells[0], Position::new(0, 0));
        assert_eq!(report.overwritten_words, vec!["CAT".to_string()]);
        assert_eq!(buffer[0], Some(b'C'));
        assert_eq!(buffer[1], Some(b'A'));
        assert_eq!(buffer[2], Some(b'T'));
    }

    #[test]
    fn try_write_rejects_out_of_bounds_and_conflicts() {
        let mut buffer: Vec<Option<u8>> = vec![None; 16];
        // Start too close to the right edge for a rightward write.
        assert!(
            try_write(
                "CAT",
                Position::new(0, 2),
                Direction::new(0, 1),
                false,
                &mut buffer,
                4
            )
            .is_none()
        );
        assert!(buffer.iter().all(Option::is_none));

        buffer[1] = Some(b'Z');
        assert!(
            try_write(
                "CAT",
                Position::new(0, 0),
                Direction::new(0, 1),
                false,
                &mut buffer,
                4
            )
            .is_none()
        );
    }

    #[test]
    fn reversed_write_reports_cells_in_word_order() {
        let mut buffer: Vec<Option<u8>> = vec![None; 16];
        let cells = try_write(
            "CAT",
            Position::new(0, 0),
            Direction::new(0, 1),
            true,
            &mut buffer,
            4,
        )
        .unwrap();
        // Written as TAC left to right; the word's own path runs leftward.
        assert_eq!(buffer[0], Some(b'T'));
        assert_eq!(buffer[1], Some(b'A'));
        assert_eq!(buffer[2], Some(b'C'));
        assert_eq!(
            cells,
            vec![
                Position::new(0, 2),
                Position::new(0, 1),
                Position::new(0, 0)
            ]
        );
    }
}
