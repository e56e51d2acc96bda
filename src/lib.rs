//! Word-search puzzle engine with a timed versus opponent
//!
//! This crate provides:
//! - A grid generator that hides every vocabulary word along a permitted
//!   direction, with words crossing where letters agree
//! - A trie-backed discovery engine that finds every vocabulary word
//!   actually present in a grid, with the exact cells each occupies
//! - A versus match session that races the interactive participant against
//!   a simulated opponent paced by difficulty
//! - Port/adapter boundaries for rendering and statistics collaborators

pub mod adapters;
pub mod app;
pub mod cli;
pub mod difficulty;
pub mod error;
pub mod ports;
pub mod puzzle;
pub mod versus;
pub mod vocabulary;

pub use difficulty::{Difficulty, Pacing};
pub use error::{Error, Result};
pub use vocabulary::Vocabulary;
