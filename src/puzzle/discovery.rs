//! Exhaustive word discovery over a letter grid
//!
//! Walks every straight line from every cell, in every direction the
//! difficulty permits, pruning with a trie built from the vocabulary. Finds
//! every vocabulary word actually present, including coincidental
//! occurrences the generator never placed. The first occurrence per word in
//! scan order wins; results keep insertion order, so a pass is deterministic
//! for a fixed grid and vocabulary.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    Vocabulary,
    puzzle::{Grid, Position, Trie, TrieNode},
};

/// One found word and the exact cells it occupies, first letter to last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryResult {
    pub word: String,
    pub path: Vec<Position>,
}

/// All words found in one pass, in first-discovery order, with a by-word
/// index for case-insensitive lookup.
#[derive(Debug, Clone, Default)]
pub struct Discoveries {
    entries: Vec<DiscoveryResult>,
    by_word: HashMap<String, usize>,
}

impl Discoveries {
    /// Record a word unless an earlier occurrence already claimed it.
    fn record(&mut self, word: &str, path: &[Position]) {
        if self.by_word.contains_key(word) {
            return;
        }
        self.by_word.insert(word.to_string(), self.entries.len());
        self.entries.push(DiscoveryResult {
            word: word.to_string(),
            path: path.to_vec(),
        });
    }

    /// Lookup by word, case-insensitive.
    pub fn get(&self, word: &str) -> Option<&DiscoveryResult> {
        let upper = word.to_ascii_uppercase();
        self.by_word.get(&upper).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Results in first-discovery order.
    pub fn results(&self) -> &[DiscoveryResult] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiscoveryResult> {
        self.entries.iter()
    }

    /// Found words in first-discovery order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Discoveries {
    type Item = &'a DiscoveryResult;
    type IntoIter = std::slice::Iter<'a, DiscoveryResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Find every vocabulary word present in `grid`.
///
/// Scans cells in row-major order and directions in the tier's table order,
/// so repeated calls on the same inputs return identical results. Each walk
/// follows one direction; a straight line never revisits a cell, so paths
/// are repeat-free by construction.
pub fn discover(grid: &Grid, vocabulary: &Vocabulary) -> Discoveries {
    let trie = Trie::from_words(vocabulary.words());
    let directions = vocabulary.difficulty().directions();
    let mut found = Discoveries::default();
    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let start = Position::new(row, col);
            for &direction in directions {
                walk(grid, &trie, start, direction, &mut found);
            }
        }
    }
    found
}

/// Walk one straight line, recording every terminal passed through.
///
/// A longer word may continue past a shorter one (CAR, CART), so the walk
/// keeps going after a hit and only stops at the grid edge or when the trie
/// has no child for the next letter.
fn walk(
    grid: &Grid,
    trie: &Trie,
    start: Position,
    direction: crate::puzzle::Direction,
    found: &mut Discoveries,
) {
    let mut node: &TrieNode = trie.root();
    let mut path: Vec<Position> = Vec::new();
    let mut pos = start;
    loop {
        match node.child(grid.letter(pos)) {
            Some(next) => node = next,
            None => return,
        }
        path.push(pos);
        if let Some(word) = node.word() {
            found.record(word, &path);
        }
        if !node.has_children() {
            return;
        }
        match direction.step(pos, grid.size()) {
            Some(next) => pos = next,
            None => return,
        }
    }
}
