//! CLI command implementations

pub mod duel;
pub mod generate;
pub mod solve;
