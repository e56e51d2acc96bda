//! Timed event scheduling for the simulated opponent
//!
//! Every delayed action is a first-class [`ScheduledEvent`] held in an owned
//! queue, so cancelling everything (and pausing, which is cancel plus a
//! fresh schedule later) is one operation on one collection rather than a
//! sweep over ad hoc timer handles. Time is a [`Duration`] offset from match
//! start supplied by the caller; the scheduler never reads a wall clock.

use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
    time::Duration,
};

use crate::{
    Pacing,
    puzzle::{Discoveries, Position},
};

/// What a scheduled event does when it fires. The index refers to the
/// scheduler's planned-word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The opponent starts tracing the word's path.
    SearchBegin { word: usize },
    /// The opponent completes the word.
    Reveal { word: usize },
}

/// One pending timed action.
///
/// Events order by firing time, with schedule order breaking ties, so two
/// events due at the same instant fire in the order they were scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub fire_at: Duration,
    seq: u64,
    pub kind: EventKind,
}

impl Ord for ScheduledEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.fire_at, self.seq).cmp(&(other.fire_at, other.seq))
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of pending events with wholesale cancellation.
#[derive(Debug, Default)]
struct EventQueue {
    pending: BinaryHeap<Reverse<ScheduledEvent>>,
    next_seq: u64,
}

impl EventQueue {
    fn schedule(&mut self, fire_at: Duration, kind: EventKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Reverse(ScheduledEvent { fire_at, seq, kind }));
    }

    /// Drop every pending event. Idempotent.
    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Pop the earliest event due at or before `now`.
    fn pop_due(&mut self, now: Duration) -> Option<ScheduledEvent> {
        if self.pending.peek().is_some_and(|Reverse(e)| e.fire_at <= now) {
            self.pending.pop().map(|Reverse(e)| e)
        } else {
            None
        }
    }

    fn next_fire_at(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(e)| e.fire_at)
    }

    fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// A word the opponent will work through.
#[derive(Debug, Clone)]
struct PlannedWord {
    word: String,
    path: Vec<Position>,
    revealed: bool,
}

/// Schedules the opponent's progress through the discovered words.
///
/// The plan holds every word discovery found, in discovery order. Each
/// scheduling round walks the not-yet-revealed subset and books two events
/// per word: a search notification one pacing slot apart per word, and the
/// reveal after a per-letter delay. Cancelling drops the booked events but
/// keeps the plan, so a later round (resume) picks up exactly the words the
/// opponent has not yet revealed, with fresh delays.
#[derive(Debug)]
pub struct OpponentScheduler {
    plan: Vec<PlannedWord>,
    queue: EventQueue,
    pacing: Pacing,
}

impl OpponentScheduler {
    pub fn new(discoveries: &Discoveries, pacing: Pacing) -> Self {
        let plan = discoveries
            .iter()
            .map(|result| PlannedWord {
                word: result.word.clone(),
                path: result.path.clone(),
                revealed: false,
            })
            .collect();
        Self {
            plan,
            queue: EventQueue::default(),
            pacing,
        }
    }

    /// Book search and reveal events for every unrevealed word, with delays
    /// relative to `now`. The first unrevealed word takes the first slot.
    pub fn schedule_pending(&mut self, now: Duration) {
        let mut slot = 0;
        for (index, planned) in self.plan.iter().enumerate() {
            if planned.revealed {
                continue;
            }
            let search_at = now + self.pacing.search_begin_at(slot);
            let reveal_at = now + self.pacing.reveal_at(slot, planned.path.len());
            self.queue.schedule(search_at, EventKind::SearchBegin { word: index });
            self.queue.schedule(reveal_at, EventKind::Reveal { word: index });
            slot += 1;
        }
    }

    /// Mark a planned word revealed. Returns false if the index was already
    /// revealed or out of range.
    pub fn mark_revealed(&mut self, index: usize) -> bool {
        match self.plan.get_mut(index) {
            Some(planned) if !planned.revealed => {
                planned.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// The planned word and path at `index`.
    pub fn word(&self, index: usize) -> Option<(&str, &[Position])> {
        self.plan
            .get(index)
            .map(|p| (p.word.as_str(), p.path.as_slice()))
    }

    /// Words the opponent has not yet revealed.
    pub fn pending_count(&self) -> usize {
        self.plan.iter().filter(|p| !p.revealed).count()
    }

    /// Drop every booked event; the plan itself is untouched. Idempotent.
    pub fn cancel_all(&mut self) {
        self.queue.cancel_all();
    }

    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledEvent> {
        self.queue.pop_due(now)
    }

    /// When the next booked event fires, if any.
    pub fn next_fire_at(&self) -> Option<Duration> {
        self.queue.next_fire_at()
    }

    pub fn has_booked_events(&self) -> bool {
        !self.queue.is_empty()
    }
}
