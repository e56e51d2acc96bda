//! The versus match session
//!
//! [`VersusMatch`] owns a round: the vocabulary, the grid, both agents'
//! progress, the opponent scheduler, and the phase machine (`Idle ->
//! Initializing -> Active -> (Paused <-> Active) -> Completed`).
//!
//! Time is virtual. The session holds a [`Duration`] clock that only moves
//! when the caller hands it time via [`VersusMatch::advance`]; due opponent
//! events fire during that call, in firing order. This keeps matches fully
//! deterministic and lets a frontend map real time onto the match at
//! whatever rate it likes. While paused or completed the clock is frozen
//! and `advance` does nothing.

use std::time::Duration;

use crate::{
    Error, Pacing, Result, Vocabulary,
    ports::{MatchObserver, StatsSink},
    puzzle::{GenerationReport, Grid, GridGenerator, discover},
    versus::{
        scheduler::{EventKind, OpponentScheduler},
        state::{Agent, AgentProgress, FindOutcome, MatchPhase, MatchSummary},
    },
};

/// A race-to-completion match between the interactive participant and the
/// simulated opponent.
///
/// The match completes when either agent's found-set covers the whole
/// vocabulary; completion is adjudicated exactly once. When both agents
/// would finish in the same evaluation step the higher score wins, and a
/// score tie goes to the player (the player is always checked first).
pub struct VersusMatch {
    vocabulary: Vocabulary,
    pacing: Pacing,
    phase: MatchPhase,
    now: Duration,
    grid: Option<Grid>,
    report: Option<GenerationReport>,
    scheduler: Option<OpponentScheduler>,
    player: AgentProgress,
    opponent: AgentProgress,
    observers: Vec<Box<dyn MatchObserver>>,
    stats: Vec<Box<dyn StatsSink>>,
    summary: Option<MatchSummary>,
    seed: Option<u64>,
}

impl VersusMatch {
    /// Create an idle match for `vocabulary`, pacing from its difficulty.
    pub fn new(vocabulary: Vocabulary) -> Self {
        let pacing = vocabulary.difficulty().pacing();
        Self {
            vocabulary,
            pacing,
            phase: MatchPhase::Idle,
            now: Duration::ZERO,
            grid: None,
            report: None,
            scheduler: None,
            player: AgentProgress::default(),
            opponent: AgentProgress::default(),
            observers: Vec::new(),
            stats: Vec::new(),
            summary: None,
            seed: None,
        }
    }

    /// Seed the grid generator for a reproducible layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the difficulty's default opponent pacing.
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Attach an observer for opponent and completion events.
    pub fn with_observer<O: MatchObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Attach a sink that receives the final summary.
    pub fn with_stats_sink<S: StatsSink + 'static>(mut self, sink: S) -> Self {
        self.stats.push(Box::new(sink));
        self
    }

    /// Generate a grid and begin the match.
    ///
    /// Runs setup under `Initializing` (grid generation plus the opponent's
    /// discovery pass), books the opponent's schedule, and enters `Active`
    /// with the clock at zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Idle`.
    pub fn start(&mut self) -> Result<()> {
        self.require_phase(MatchPhase::Idle, "start")?;
        self.phase = MatchPhase::Initializing;

        let mut generator = match self.seed {
            Some(seed) => GridGenerator::with_seed(seed),
            None => GridGenerator::new(),
        };
        let puzzle = generator.generate(&self.vocabulary);
        let discoveries = discover(puzzle.grid(), &self.vocabulary);
        let (grid, _placements, report) = puzzle.into_parts();
        self.grid = Some(grid);
        self.report = Some(report);
        self.activate(OpponentScheduler::new(&discoveries, self.pacing));
        Ok(())
    }

    /// Begin the match on a caller-supplied grid.
    ///
    /// The opponent's plan comes from a fresh discovery pass over `grid`,
    /// so it covers every vocabulary word actually present, including
    /// occurrences the caller never placed deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Idle`, or
    /// [`Error::GridSizeMismatch`] if the grid does not fit the difficulty.
    pub fn start_with_grid(&mut self, grid: Grid) -> Result<()> {
        self.require_phase(MatchPhase::Idle, "start")?;
        if grid.size() != self.vocabulary.grid_size() {
            return Err(Error::GridSizeMismatch {
                got: grid.size(),
                expected: self.vocabulary.grid_size(),
            });
        }
        self.phase = MatchPhase::Initializing;

        let discoveries = discover(&grid, &self.vocabulary);
        self.grid = Some(grid);
        self.activate(OpponentScheduler::new(&discoveries, self.pacing));
        Ok(())
    }

    fn activate(&mut self, mut scheduler: OpponentScheduler) {
        scheduler.schedule_pending(self.now);
        self.scheduler = Some(scheduler);
        self.phase = MatchPhase::Active;
    }

    /// Move the match clock forward and fire every opponent event that
    /// falls due, in firing order.
    ///
    /// Does nothing while `Paused` or `Completed` (the clock is frozen in
    /// those phases, so pauses never count toward elapsed time).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] if the match has not started,
    /// or any error an observer or stats sink reports.
    pub fn advance(&mut self, delta: Duration) -> Result<()> {
        match self.phase {
            MatchPhase::Idle | MatchPhase::Initializing => {
                return Err(self.phase_error("advance"));
            }
            MatchPhase::Paused | MatchPhase::Completed => return Ok(()),
            MatchPhase::Active => {}
        }
        self.now += delta;
        self.dispatch_due()
    }

    fn dispatch_due(&mut self) -> Result<()> {
        while self.phase == MatchPhase::Active {
            let Some(scheduler) = self.scheduler.as_mut() else {
                break;
            };
            let Some(event) = scheduler.pop_due(self.now) else {
                break;
            };
            match event.kind {
                EventKind::SearchBegin { word } => {
                    let Some(path) = scheduler.word(word).map(|(_, path)| path.to_vec()) else {
                        continue;
                    };
                    for observer in &mut self.observers {
                        observer.on_search_begin(&path)?;
                    }
                }
                EventKind::Reveal { word } => {
                    if !scheduler.mark_revealed(word) {
                        continue;
                    }
                    let Some(found) = scheduler.word(word).map(|(w, _)| w.to_string()) else {
                        continue;
                    };
                    if self.opponent.record(&found) {
                        for observer in &mut self.observers {
                            observer.on_word_found(&found)?;
                        }
                    }
                    self.check_completion()?;
                }
            }
        }
        Ok(())
    }

    /// Submit a word the interactive participant selected.
    ///
    /// Matching is case-insensitive against the vocabulary. An accepted
    /// word is credited immediately and may complete the match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Active`.
    pub fn record_player_find(&mut self, word: &str) -> Result<FindOutcome> {
        self.require_phase(MatchPhase::Active, "record a player find")?;
        let Some(canonical) = self.vocabulary.canonical(word).map(str::to_string) else {
            return Ok(FindOutcome::NotInVocabulary);
        };
        if !self.player.record(&canonical) {
            return Ok(FindOutcome::AlreadyFound);
        }
        self.check_completion()?;
        Ok(FindOutcome::Accepted)
    }

    /// Suspend the match: cancel every booked opponent event and freeze
    /// the clock. Remaining delays are not preserved; resuming builds a
    /// fresh schedule for the words the opponent has not yet revealed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Active`.
    pub fn pause(&mut self) -> Result<()> {
        self.require_phase(MatchPhase::Active, "pause")?;
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.cancel_all();
        }
        self.phase = MatchPhase::Paused;
        Ok(())
    }

    /// Resume a paused match, booking fresh delays for the opponent's
    /// remaining words from the frozen clock position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Paused`.
    pub fn resume(&mut self) -> Result<()> {
        self.require_phase(MatchPhase::Paused, "resume")?;
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.schedule_pending(self.now);
        }
        self.phase = MatchPhase::Active;
        Ok(())
    }

    /// Cancel every booked opponent event. Idempotent; the opponent stays
    /// silent until a fresh schedule is booked (via pause and resume).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMatchPhase`] unless the match is `Active`
    /// or `Paused`.
    pub fn cancel_all(&mut self) -> Result<()> {
        if !matches!(self.phase, MatchPhase::Active | MatchPhase::Paused) {
            return Err(self.phase_error("cancel events"));
        }
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.cancel_all();
        }
        Ok(())
    }

    /// Adjudicate completion. Runs only while `Active`, after a found-word
    /// event from either agent, so the `Completed` transition fires once.
    fn check_completion(&mut self) -> Result<()> {
        if self.phase != MatchPhase::Active {
            return Ok(());
        }
        let total = self.vocabulary.len();
        let player_done = self.player.found_count() == total;
        let opponent_done = self.opponent.found_count() == total;
        if !player_done && !opponent_done {
            return Ok(());
        }

        let winner = if player_done && opponent_done {
            if self.opponent.score() > self.player.score() {
                Agent::Opponent
            } else {
                Agent::Player
            }
        } else if player_done {
            Agent::Player
        } else {
            Agent::Opponent
        };

        let summary = MatchSummary {
            winner,
            player_score: self.player.score(),
            opponent_score: self.opponent.score(),
            elapsed: self.now,
        };
        self.phase = MatchPhase::Completed;
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.cancel_all();
        }
        for observer in &mut self.observers {
            observer.on_match_complete(&summary)?;
        }
        for sink in &mut self.stats {
            sink.record_match(&summary)?;
        }
        self.summary = Some(summary);
        Ok(())
    }

    fn require_phase(&self, expected: MatchPhase, operation: &str) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.phase_error(operation))
        }
    }

    fn phase_error(&self, operation: &str) -> Error {
        Error::InvalidMatchPhase {
            operation: operation.to_string(),
            phase: self.phase.to_string(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Match time accumulated so far, pauses excluded.
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The round's grid, once the match has started.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Generation diagnostics, when the session generated its own grid.
    pub fn generation_report(&self) -> Option<&GenerationReport> {
        self.report.as_ref()
    }

    pub fn player(&self) -> &AgentProgress {
        &self.player
    }

    pub fn opponent(&self) -> &AgentProgress {
        &self.opponent
    }

    /// The final summary, once the match has completed.
    pub fn summary(&self) -> Option<&MatchSummary> {
        self.summary.as_ref()
    }

    /// When the opponent's next booked event fires, if any. Useful for
    /// callers that jump the clock event to event.
    pub fn next_event_at(&self) -> Option<Duration> {
        self.scheduler.as_ref().and_then(|s| s.next_fire_at())
    }

    /// Words the opponent has not yet revealed.
    pub fn opponent_pending(&self) -> usize {
        self.scheduler
            .as_ref()
            .map_or(self.vocabulary.len(), |s| s.pending_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, versus::observers::RecordingObserver};

    const EASY_ROWS: [&str; 8] = [
        "CATQQQQQ", "DQQQQQQQ", "OQQQQQQQ", "GQQQQQQQ", "QQQQQQQQ", "QQQQQQQQ", "QQQQQQQQ",
        "QQQQQQQQ",
    ];

    fn easy_match() -> VersusMatch {
        let vocabulary = Vocabulary::new(["CAT", "DOG"], Difficulty::Easy).unwrap();
        VersusMatch::new(vocabulary)
    }

    fn started_easy_match() -> VersusMatch {
        let mut session = easy_match();
        session
            .start_with_grid(Grid::from_rows(&EASY_ROWS).unwrap())
            .unwrap();
        session
    }

    #[test]
    fn start_moves_idle_to_active() {
        let mut session = easy_match();
        assert_eq!(session.phase(), MatchPhase::Idle);
        session.start().unwrap();
        assert_eq!(session.phase(), MatchPhase::Active);
        assert!(session.grid().is_some());
        assert!(session.generation_report().is_some());

        let err = session.start().unwrap_err();
        assert!(matches!(err, Error::InvalidMatchPhase { .. }));
    }

    #[test]
    fn start_with_grid_rejects_wrong_size() {
        let mut session = easy_match();
        let small = Grid::from_rows(&["ABC", "DEF", "GHI"]).unwrap();
        let err = session.start_with_grid(small).unwrap_err();
        assert!(matches!(
            err,
            Error::GridSizeMismatch {
                got: 3,
                expected: 8
            }
        ));
    }

    #[test]
    fn advance_requires_a_started_match() {
        let mut session = easy_match();
        let err = session.advance(Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidMatchPhase { .. }));
    }

    #[test]
    fn opponent_reveals_on_schedule() {
        let mut session = started_easy_match();
        // Easy pacing: CAT searched at 4.5s, revealed at 6.75s.
        session.advance(Duration::from_millis(4_500)).unwrap();
        assert_eq!(session.opponent().found_count(), 0);
        session.advance(Duration::from_millis(2_250)).unwrap();
        assert_eq!(session.opponent().found_count(), 1);
        assert!(session.opponent().has_found("CAT"));
        assert_eq!(session.opponent().score(), 30);
        assert_eq!(session.opponent_pending(), 1);
    }

    #[test]
    fn player_find_outcomes() {
        let mut session = started_easy_match();
        assert_eq!(
            session.record_player_find("cat").unwrap(),
            FindOutcome::Accepted
        );
        assert_eq!(
            session.record_player_find("CAT").unwrap(),
            FindOutcome::AlreadyFound
        );
        assert_eq!(
            session.record_player_find("ZEBRA").unwrap(),
            FindOutcome::NotInVocabulary
        );
        assert_eq!(session.player().score(), 30);
    }

    #[test]
    fn player_completing_vocabulary_wins() {
        let mut session = started_easy_match();
        // Let the opponent take CAT first; both agents may score it.
        session.advance(Duration::from_millis(6_750)).unwrap();
        session.record_player_find("CAT").unwrap();
        session.record_player_find("DOG").unwrap();

        assert_eq!(session.phase(), MatchPhase::Completed);
        let summary = session.summary().unwrap();
        assert_eq!(summary.winner, Agent::Player);
        assert_eq!(summary.player_score, 60);
        assert_eq!(summary.opponent_score, 30);
        assert_eq!(summary.elapsed, Duration::from_millis(6_750));

        // Completed is terminal: the clock is frozen and finds are refused.
        session.advance(Duration::from_secs(60)).unwrap();
        assert_eq!(session.elapsed(), Duration::from_millis(6_750));
        assert!(session.record_player_find("DOG").is_err());
        assert!(session.pause().is_err());
    }

    #[test]
    fn opponent_completing_vocabulary_wins() {
        let recorder = RecordingObserver::new();
        let vocabulary = Vocabulary::new(["CAT", "DOG"], Difficulty::Easy).unwrap();
        let mut session = VersusMatch::new(vocabulary).with_observer(recorder.clone());
        session
            .start_with_grid(Grid::from_rows(&EASY_ROWS).unwrap())
            .unwrap();

        // One jump past DOG's reveal fires all four events in order.
        session.advance(Duration::from_millis(11_250)).unwrap();
        assert_eq!(session.phase(), MatchPhase::Completed);
        let summary = session.summary().unwrap();
        assert_eq!(summary.winner, Agent::Opponent);
        assert_eq!(summary.opponent_score, 60);
        assert_eq!(summary.player_score, 0);
        assert_eq!(recorder.words_found(), vec!["CAT", "DOG"]);
        assert_eq!(recorder.completed_count(), 1);
    }

    #[test]
    fn pause_freezes_clock_and_discards_booked_events() {
        let mut session = started_easy_match();
        session.advance(Duration::from_millis(4_500)).unwrap();
        session.pause().unwrap();
        assert_eq!(session.phase(), MatchPhase::Paused);

        // Frozen: time does not accumulate and nothing fires.
        session.advance(Duration::from_secs(600)).unwrap();
        assert_eq!(session.elapsed(), Duration::from_millis(4_500));
        assert_eq!(session.opponent().found_count(), 0);
    }

    #[test]
    fn resume_schedules_fresh_delays_for_unrevealed_words() {
        let mut session = started_easy_match();
        // Pause between CAT's search (4.5s) and its reveal (6.75s).
        session.advance(Duration::from_millis(5_000)).unwrap();
        session.pause().unwrap();
        session.resume().unwrap();

        // The old reveal instant passes without an event.
        session.advance(Duration::from_millis(1_750)).unwrap();
        assert_eq!(session.opponent().found_count(), 0);

        // Fresh schedule: CAT reveals one slot plus three letters after the
        // pause point, at 5s + 6.75s = 11.75s.
        session.advance(Duration::from_millis(5_000)).unwrap();
        assert_eq!(session.opponent().found_count(), 1);
        assert!(session.opponent().has_found("CAT"));
    }

    #[test]
    fn cancel_all_silences_the_opponent() {
        let recorder = RecordingObserver::new();
        let vocabulary = Vocabulary::new(["CAT", "DOG"], Difficulty::Easy).unwrap();
        let mut session = VersusMatch::new(vocabulary).with_observer(recorder.clone());
        session
            .start_with_grid(Grid::from_rows(&EASY_ROWS).unwrap())
            .unwrap();

        session.cancel_all().unwrap();
        session.cancel_all().unwrap();
        session.advance(Duration::from_secs(3_600)).unwrap();
        assert!(recorder.events().is_empty());
        assert_eq!(session.opponent().found_count(), 0);
        assert_eq!(session.phase(), MatchPhase::Active);
        assert_eq!(session.next_event_at(), None);
    }

    #[test]
    fn misuse_is_reported_not_ignored() {
        let mut session = easy_match();
        assert!(session.pause().is_err());
        assert!(session.resume().is_err());
        assert!(session.cancel_all().is_err());
        assert!(session.record_player_find("CAT").is_err());

        session.start().unwrap();
        assert!(session.resume().is_err());
        session.pause().unwrap();
        assert!(session.pause().is_err());
        session.resume().unwrap();
        assert_eq!(session.phase(), MatchPhase::Active);
    }
}
