//! Validated word list for a round
//!
//! All placement, discovery, and scoring code works with canonical uppercase
//! words. Validation happens once, here; the rest of the crate can assume
//! every vocabulary word is non-empty ASCII uppercase and fits the grid.

use crate::{Difficulty, Error, Result};

/// The words hidden in one round, canonicalized and bound to a difficulty.
///
/// Words are stored uppercase, in first-occurrence order, with duplicates
/// (case-insensitive) dropped.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    difficulty: Difficulty,
    words: Vec<String>,
}

impl Vocabulary {
    /// Validate and canonicalize a word list for `difficulty`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a word is empty, a word
    /// contains a non-ASCII-alphabetic character, or a word is longer than
    /// the grid side for `difficulty`.
    pub fn new<I, S>(words: I, difficulty: Difficulty) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grid_size = difficulty.grid_size();
        let mut canonical: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                return Err(Error::EmptyWord);
            }
            if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(Error::InvalidWordCharacter {
                    word: word.to_string(),
                    character: bad,
                });
            }
            if word.len() > grid_size {
                return Err(Error::WordTooLong {
                    word: word.to_string(),
                    length: word.len(),
                    grid_size,
                });
            }
            let upper = word.to_ascii_uppercase();
            if !canonical.contains(&upper) {
                canonical.push(upper);
            }
        }
        if canonical.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        Ok(Self {
            difficulty,
            words: canonical,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Grid side length implied by the difficulty.
    pub fn grid_size(&self) -> usize {
        self.difficulty.grid_size()
    }

    /// Canonical words in first-occurrence order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The stored canonical form of `word`, compared case-insensitively.
    pub fn canonical(&self, word: &str) -> Option<&str> {
        let upper = word.trim().to_ascii_uppercase();
        self.words
            .iter()
            .find(|w| **w == upper)
            .map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.canonical(word).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_and_preserves_order() {
        let vocab =
            Vocabulary::new(["cat", "Dog", "BIRD"], Difficulty::Easy).unwrap();
        assert_eq!(vocab.words(), &["CAT", "DOG", "BIRD"]);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn deduplicates_case_insensitively() {
        let vocab =
            Vocabulary::new(["cat", "CAT", "Cat", "dog"], Difficulty::Easy).unwrap();
        assert_eq!(vocab.words(), &["CAT", "DOG"]);
    }

    #[test]
    fn rejects_empty_list() {
        let err = Vocabulary::new(Vec::<String>::new(), Difficulty::Easy).unwrap_err();
        assert!(matches!(err, Error::EmptyVocabulary));
    }

    #[test]
    fn rejects_empty_word() {
        let err = Vocabulary::new(["cat", "  "], Difficulty::Easy).unwrap_err();
        assert!(matches!(err, Error::EmptyWord));
    }

    #[test]
    fn rejects_non_alphabetic_characters() {
        let err = Vocabulary::new(["ca-t"], Difficulty::Easy).unwrap_err();
        match err {
            Error::InvalidWordCharacter { word, character } => {
                assert_eq!(word, "ca-t");
                assert_eq!(character, '-');
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_word_longer_than_grid() {
        let err = Vocabulary::new(["ABCDEFGHI"], Difficulty::Easy).unwrap_err();
        match err {
            Error::WordTooLong {
                length, grid_size, ..
            } => {
                assert_eq!(length, 9);
                assert_eq!(grid_size, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(Vocabulary::new(["ABCDEFGHI"], Difficulty::Medium).is_ok());
    }

    #[test]
    fn canonical_lookup_is_case_insensitive() {
        let vocab = Vocabulary::new(["Alpha", "beta"], Difficulty::Medium).unwrap();
        assert_eq!(vocab.canonical("alpha"), Some("ALPHA"));
        assert_eq!(vocab.canonical(" BETA "), Some("BETA"));
        assert_eq!(vocab.canonical("gamma"), None);
        assert!(vocab.contains("ALPHA"));
        assert!(!vocab.contains("delta"));
    }
}
