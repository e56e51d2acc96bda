//! CLI infrastructure for the wordrace toolkit
//!
//! This module provides the command-line interface for generating puzzles,
//! solving them exhaustively, and running timed duels against the
//! simulated opponent.

pub mod commands;
pub mod output;
