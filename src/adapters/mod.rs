//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod in_memory_stats;
pub mod jsonl_stats;

pub use in_memory_stats::InMemoryStats;
pub use jsonl_stats::JsonlStatsSink;
