//! Error types for the wordrace crate

use thiserror::Error;

/// Main error type for the wordrace crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("vocabulary contains an empty word")]
    EmptyWord,

    #[error("word '{word}' has {length} letters but the grid is only {grid_size} cells per side")]
    WordTooLong {
        word: String,
        length: usize,
        grid_size: usize,
    },

    #[error("word '{word}' contains invalid character '{character}' (only ASCII letters are allowed)")]
    InvalidWordCharacter { word: String, character: char },

    #[error("grid row {row} has {got} cells, expected {expected}")]
    InvalidGridShape {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("invalid character '{character}' at row {row}, column {column} in grid")]
    InvalidGridCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    #[error("grid is {got}x{got} but the difficulty requires {expected}x{expected}")]
    GridSizeMismatch { got: usize, expected: usize },

    #[error("cannot {operation} while the match is {phase}")]
    InvalidMatchPhase { operation: String, phase: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
