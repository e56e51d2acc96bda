//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the match core and the
//! outside world. Following hexagonal architecture, these traits are owned
//! by the domain and implemented by adapters in the infrastructure layer.

pub mod observer;
pub mod stats;

pub use observer::MatchObserver;
pub use stats::StatsSink;
