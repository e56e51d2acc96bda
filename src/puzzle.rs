//! Word-search puzzle: grid, generation, and discovery

pub mod discovery;
pub mod generator;
pub mod grid;
pub mod serialization;
pub mod trie;

pub use discovery::{Discoveries, DiscoveryResult, discover};
pub use generator::{
    GeneratedPuzzle, GenerationReport, GridGenerator, MAX_PLACEMENT_ATTEMPTS, WordPlacement,
};
pub use grid::{Direction, Grid, Position};
pub use serialization::SavedPuzzle;
pub use trie::{Trie, TrieNode};
