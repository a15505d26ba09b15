//! Round progression and completion state machine.
//!
//! The [`SpellingEngine`] is the authoritative reducer for one session. It
//! owns the round state and progress cursor, evaluates completion, and
//! exposes read-only snapshots for presentation layers.
//!
//! The engine itself is synchronous. The transient `Rejecting` and
//! `Advancing` phases are entered here but resolved by the caller (the
//! runtime schedules the corresponding delay and then calls
//! [`SpellingEngine::resolve_rejection`] or [`SpellingEngine::advance_round`]).
//! While a transient phase is pending, placements and undos are locked out
//! by the phase guard, so at most one transition is ever in flight.

mod round;

pub use round::RoundState;

use rand::Rng;

use crate::score::ScoreData;
use crate::session::{Session, SessionError, SessionProgress};
use crate::word::Word;

/// Lifecycle phase of the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Default during a round; placements and undos are accepted.
    AwaitingInput,
    /// Brief "wrong answer" flash; letters are locked until resolved.
    Rejecting,
    /// Brief pause after a correct completion; letters are locked.
    Advancing,
    /// Terminal: every word exhausted, score computed.
    SessionComplete,
}

/// Result of a placement attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Mis-action (bad index, full slots, or locked phase); nothing changed.
    Ignored,
    /// Letter placed; slots are not yet full.
    Placed,
    /// Slots filled with an incorrect spelling; engine entered `Rejecting`.
    Rejected,
    /// Slots filled with the correct spelling; engine entered `Advancing`.
    Solved { first_try: bool },
}

/// Result of an undo attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Mis-action (empty slot, bad index, or locked phase); nothing changed.
    Ignored,
    /// Letter returned to the end of the pool.
    Returned,
}

/// Result of resolving the `Advancing` phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundAdvance {
    /// Cursor moved to the next word; a fresh round began.
    NextWord,
    /// That was the last word; the session is complete.
    Complete(ScoreData),
}

/// Read-only view of engine state handed to presentation layers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineSnapshot {
    pub phase: Phase,
    pub word_index: usize,
    pub total_words: usize,
    pub correct_first_try: usize,
    /// The word being spelled. Presentation must not display it while the
    /// round is live; it exists for audio playback and results detail.
    pub target: String,
    pub definition: Option<String>,
    pub pool: Vec<char>,
    pub slots: Vec<Option<char>>,
    pub has_failed: bool,
}

/// State machine driving one session from first round to final score.
///
/// Exclusively owns [`RoundState`] and [`SessionProgress`] for the session's
/// duration. User mis-actions are defined no-ops, never errors; the only
/// construction failure is a session with zero words.
pub struct SpellingEngine<R: Rng> {
    session: Session,
    progress: SessionProgress,
    round: RoundState,
    phase: Phase,
    rng: R,
}

impl<R: Rng> SpellingEngine<R> {
    /// Creates the engine and begins the first round.
    pub fn new(session: Session, mut rng: R) -> Result<Self, SessionError> {
        let first = session
            .words()
            .first()
            .cloned()
            .ok_or(SessionError::EmptySession)?;
        let round = RoundState::begin(first, &mut rng);

        Ok(Self {
            session,
            progress: SessionProgress::default(),
            round,
            phase: Phase::AwaitingInput,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The word the current round targets (for pronunciation).
    pub fn current_word(&self) -> &Word {
        self.round.target()
    }

    pub fn progress(&self) -> SessionProgress {
        self.progress
    }

    /// Places the pool letter at `pool_index` into the first empty slot and
    /// evaluates completion when this fills the last slot.
    ///
    /// `letter` must be what currently sits at `pool_index`. A mismatch
    /// means the caller addressed a pool that has been re-scrambled since
    /// it last looked, and the placement is ignored.
    pub fn place_letter(&mut self, pool_index: usize, letter: char) -> PlaceOutcome {
        if self.phase != Phase::AwaitingInput {
            return PlaceOutcome::Ignored;
        }
        if self.round.pool().get(pool_index).copied() != Some(letter) {
            return PlaceOutcome::Ignored;
        }
        if !self.round.place(pool_index) {
            return PlaceOutcome::Ignored;
        }
        if !self.round.is_full() {
            return PlaceOutcome::Placed;
        }

        self.evaluate_completion()
    }

    /// Returns the letter in `slot_index` to the end of the pool.
    pub fn undo_letter(&mut self, slot_index: usize) -> UndoOutcome {
        if self.phase != Phase::AwaitingInput {
            return UndoOutcome::Ignored;
        }
        if self.round.undo(slot_index) {
            UndoOutcome::Returned
        } else {
            UndoOutcome::Ignored
        }
    }

    /// Ends the `Rejecting` flash: clears the slots, re-scrambles the full
    /// letter multiset, and unlocks input. No-op in any other phase.
    pub fn resolve_rejection(&mut self) {
        if self.phase != Phase::Rejecting {
            return;
        }
        self.round.rescramble(&mut self.rng);
        self.phase = Phase::AwaitingInput;
    }

    /// Ends the `Advancing` pause: moves to the next word or completes the
    /// session. Returns `None` in any other phase.
    pub fn advance_round(&mut self) -> Option<RoundAdvance> {
        if self.phase != Phase::Advancing {
            return None;
        }

        let next_index = self.progress.current_index + 1;
        match self.session.words().get(next_index) {
            Some(word) => {
                self.progress.current_index = next_index;
                self.round = RoundState::begin(word.clone(), &mut self.rng);
                self.phase = Phase::AwaitingInput;
                Some(RoundAdvance::NextWord)
            }
            None => {
                self.phase = Phase::SessionComplete;
                Some(RoundAdvance::Complete(self.score()))
            }
        }
    }

    /// Score for the tally so far; final once the phase is `SessionComplete`.
    pub fn score(&self) -> ScoreData {
        ScoreData::compute(self.progress.correct_first_try, self.session.word_count())
    }

    /// Read-only state for rendering; cheap enough to rebuild per frame.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            phase: self.phase,
            word_index: self.progress.current_index,
            total_words: self.session.word_count(),
            correct_first_try: self.progress.correct_first_try,
            target: self.round.target().text().to_owned(),
            definition: self.round.target().definition().map(str::to_owned),
            pool: self.round.pool().to_vec(),
            slots: self.round.slots().to_vec(),
            has_failed: self.round.has_failed(),
        }
    }

    fn evaluate_completion(&mut self) -> PlaceOutcome {
        // Callers only reach here with full slots, so a candidate exists.
        let Some(candidate) = self.round.candidate() else {
            return PlaceOutcome::Ignored;
        };

        if candidate == self.round.target().text() {
            let first_try = !self.round.has_failed();
            if first_try {
                self.progress.correct_first_try += 1;
            }
            self.phase = Phase::Advancing;
            PlaceOutcome::Solved { first_try }
        } else {
            self.round.mark_failed();
            self.phase = Phase::Rejecting;
            PlaceOutcome::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(texts: &[&str]) -> Session {
        let words = texts
            .iter()
            .map(|t| Word::new(*t, Tier::Starter, None).unwrap())
            .collect();
        Session::from_words(words).unwrap()
    }

    fn engine(texts: &[&str]) -> SpellingEngine<SmallRng> {
        SpellingEngine::new(session(texts), SmallRng::seed_from_u64(99)).unwrap()
    }

    /// Places pool letters so the slots spell `target` exactly.
    fn spell_correctly(engine: &mut SpellingEngine<SmallRng>, target: &str) -> PlaceOutcome {
        let mut outcome = PlaceOutcome::Ignored;
        for letter in target.chars() {
            let pool = engine.snapshot().pool;
            let index = pool
                .iter()
                .position(|&c| c == letter)
                .expect("target letter must be in the pool");
            outcome = engine.place_letter(index, letter);
        }
        outcome
    }

    /// Fills the slots with a guaranteed-wrong permutation of the pool.
    ///
    /// Places the last pool letter into the first slot when that letter
    /// differs from the target's first letter, then drains left to right.
    fn spell_incorrectly(engine: &mut SpellingEngine<SmallRng>, target: &str) -> PlaceOutcome {
        let first = target.chars().next().unwrap();
        let pool = engine.snapshot().pool;
        let wrong_start = pool
            .iter()
            .rposition(|&c| c != first)
            .expect("word must contain at least two distinct letters");

        let mut outcome = engine.place_letter(wrong_start, pool[wrong_start]);
        loop {
            let pool = engine.snapshot().pool;
            if engine.snapshot().phase != Phase::AwaitingInput || pool.is_empty() {
                break;
            }
            outcome = engine.place_letter(0, pool[0]);
        }
        outcome
    }

    #[test]
    fn empty_session_is_rejected_at_construction() {
        let err = Session::from_words(vec![]).unwrap_err();
        assert_eq!(err, SessionError::EmptySession);
    }

    #[test]
    fn perfect_session_scores_100() {
        // Scenario A: both words first try.
        let mut engine = engine(&["cat", "dog"]);

        assert_eq!(
            spell_correctly(&mut engine, "cat"),
            PlaceOutcome::Solved { first_try: true }
        );
        assert_eq!(engine.phase(), Phase::Advancing);
        assert_eq!(engine.advance_round(), Some(RoundAdvance::NextWord));

        assert_eq!(
            spell_correctly(&mut engine, "dog"),
            PlaceOutcome::Solved { first_try: true }
        );
        let advance = engine.advance_round().unwrap();
        assert_eq!(
            advance,
            RoundAdvance::Complete(ScoreData {
                total_score: 100,
                correct_first_try: 2,
                total_words: 2,
            })
        );
        assert_eq!(engine.phase(), Phase::SessionComplete);
    }

    #[test]
    fn missed_word_never_counts_even_after_correction() {
        // Scenario B: miss "cat" once, correct it, then "dog" first try.
        let mut engine = engine(&["cat", "dog"]);

        assert_eq!(spell_incorrectly(&mut engine, "cat"), PlaceOutcome::Rejected);
        assert_eq!(engine.phase(), Phase::Rejecting);
        engine.resolve_rejection();
        assert_eq!(engine.phase(), Phase::AwaitingInput);

        assert_eq!(
            spell_correctly(&mut engine, "cat"),
            PlaceOutcome::Solved { first_try: false }
        );
        assert_eq!(engine.progress().correct_first_try, 0);
        engine.advance_round();

        spell_correctly(&mut engine, "dog");
        let advance = engine.advance_round().unwrap();
        assert_eq!(
            advance,
            RoundAdvance::Complete(ScoreData {
                total_score: 50,
                correct_first_try: 1,
                total_words: 2,
            })
        );
    }

    #[test]
    fn input_is_locked_during_transient_phases() {
        let mut engine = engine(&["cat"]);

        spell_incorrectly(&mut engine, "cat");
        assert_eq!(engine.phase(), Phase::Rejecting);

        let before = engine.snapshot();
        assert_eq!(engine.place_letter(0, 'c'), PlaceOutcome::Ignored);
        assert_eq!(engine.undo_letter(0), UndoOutcome::Ignored);
        assert_eq!(engine.snapshot(), before);

        engine.resolve_rejection();
        spell_correctly(&mut engine, "cat");
        assert_eq!(engine.phase(), Phase::Advancing);
        assert_eq!(engine.place_letter(0, 'c'), PlaceOutcome::Ignored);
    }

    #[test]
    fn placement_with_a_mismatched_letter_is_ignored() {
        let mut engine = engine(&["cat"]);

        // Address index 0 with a letter that sits elsewhere in the pool, as
        // a caller holding a stale pool view would.
        let before = engine.snapshot();
        let stale = before
            .pool
            .iter()
            .copied()
            .find(|&c| c != before.pool[0])
            .unwrap();
        assert_eq!(engine.place_letter(0, stale), PlaceOutcome::Ignored);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn resolving_outside_the_matching_phase_is_a_no_op() {
        let mut engine = engine(&["cat"]);

        engine.resolve_rejection();
        assert_eq!(engine.phase(), Phase::AwaitingInput);
        assert_eq!(engine.advance_round(), None);

        spell_correctly(&mut engine, "cat");
        // Wrong resolver for the Advancing phase changes nothing.
        engine.resolve_rejection();
        assert_eq!(engine.phase(), Phase::Advancing);
    }

    #[test]
    fn rejection_resets_slots_and_restores_the_pool() {
        let mut engine = engine(&["cat"]);

        spell_incorrectly(&mut engine, "cat");
        engine.resolve_rejection();

        let snapshot = engine.snapshot();
        assert!(snapshot.slots.iter().all(Option::is_none));
        let mut pool = snapshot.pool;
        pool.sort_unstable();
        assert_eq!(pool, vec!['a', 'c', 't']);
        assert!(snapshot.has_failed);
    }

    #[test]
    fn multiset_invariant_holds_across_random_play() {
        let mut engine = engine(&["letter"]);

        for step in 0..200 {
            let snapshot = engine.snapshot();
            if snapshot.phase != Phase::AwaitingInput {
                engine.resolve_rejection();
                engine.advance_round();
                continue;
            }

            if step % 3 == 0 {
                engine.undo_letter(step % 7);
            } else {
                let index = step % 5;
                let letter = snapshot.pool.get(index).copied().unwrap_or('z');
                engine.place_letter(index, letter);
            }

            let snapshot = engine.snapshot();
            let mut letters: Vec<char> = snapshot
                .slots
                .iter()
                .filter_map(|s| *s)
                .chain(snapshot.pool.iter().copied())
                .collect();
            letters.sort_unstable();
            assert_eq!(letters, vec!['e', 'e', 'l', 'r', 't', 't']);
        }
    }

    #[test]
    fn snapshot_reflects_progress_cursor() {
        let mut engine = engine(&["cat", "dog", "sun"]);

        assert_eq!(engine.snapshot().word_index, 0);
        assert_eq!(engine.snapshot().total_words, 3);

        spell_correctly(&mut engine, "cat");
        engine.advance_round();
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.word_index, 1);
        assert_eq!(snapshot.target, "dog");
        assert_eq!(snapshot.correct_first_try, 1);
        assert!(!snapshot.has_failed);
    }
}
