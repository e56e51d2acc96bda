//! Timed versus match against a simulated opponent

pub mod observers;
pub mod scheduler;
pub mod session;
pub mod state;

pub use observers::{MatchEvent, RecordingObserver};
pub use scheduler::{EventKind, OpponentScheduler, ScheduledEvent};
pub use session::VersusMatch;
pub use state::{Agent, AgentProgress, FindOutcome, MatchPhase, MatchSummary};
