//! Application layer: match assembly.
//!
//! This module wires the domain together for callers, following hexagonal
//! architecture principles: a [`MatchConfig`] carries the raw round
//! parameters, and building it validates the vocabulary once and assembles
//! a [`crate::versus::VersusMatch`] with its generator, scheduler, and any
//! attached observer or stats adapters.
//!
//! # Usage
//!
//! ```
//! use wordrace::{Difficulty, adapters::InMemoryStats, app::MatchConfig};
//!
//! let stats = InMemoryStats::new();
//! let mut session = MatchConfig::new(["CAT", "DOG"], Difficulty::Easy)
//!     .with_seed(42)
//!     .build()?
//!     .with_stats_sink(stats.clone());
//! session.start()?;
//! # Ok::<(), wordrace::Error>(())
//! ```

pub mod config;

pub use config::MatchConfig;
