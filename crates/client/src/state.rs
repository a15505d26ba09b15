//! UI-only screen state.
//!
//! Everything here is presentation concern (cursors, dialog flags, cached
//! results); game state proper lives behind the runtime snapshot.

use game_core::{Rank, ScoreData, Tier, feedback_for};
use strum::IntoEnumIterator;

/// Word-count denominations offered by the selection screen.
pub const COUNT_OPTIONS: [usize; 4] = [5, 10, 20, 50];

/// Which major screen the client is showing.
pub enum Screen {
    Select(SelectState),
    Playing(PlayingState),
    Results(ResultsState),
}

impl Screen {
    pub fn select() -> Self {
        Screen::Select(SelectState::default())
    }

    pub fn playing() -> Self {
        Screen::Playing(PlayingState::default())
    }

    pub fn results(score: ScoreData) -> Self {
        Screen::Results(ResultsState::new(score))
    }
}

/// Cursor state for the tier/count selection screen.
#[derive(Clone, Debug)]
pub struct SelectState {
    pub tier_cursor: usize,
    pub count_cursor: usize,
    /// Configuration error from the last rejected start attempt.
    pub error: Option<String>,
}

impl Default for SelectState {
    fn default() -> Self {
        Self {
            tier_cursor: 0,
            // 10 words is the default assessment length.
            count_cursor: 1,
            error: None,
        }
    }
}

impl SelectState {
    pub fn tier(&self) -> Tier {
        Tier::iter()
            .nth(self.tier_cursor)
            .unwrap_or(Tier::Starter)
    }

    pub fn count(&self) -> usize {
        COUNT_OPTIONS[self.count_cursor]
    }

    pub fn move_tier(&mut self, delta: isize) {
        let len = Tier::iter().count() as isize;
        self.tier_cursor = (self.tier_cursor as isize + delta).rem_euclid(len) as usize;
    }

    pub fn move_count(&mut self, delta: isize) {
        let len = COUNT_OPTIONS.len() as isize;
        self.count_cursor = (self.count_cursor as isize + delta).rem_euclid(len) as usize;
    }
}

/// Transient state while a session is live.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayingState {
    /// The "leave game?" dialog is open; input is routed to it.
    pub exit_confirm: bool,
}

/// Final score plus the derived presentation strings.
#[derive(Clone, Debug)]
pub struct ResultsState {
    pub score: ScoreData,
    pub rank: Rank,
    pub feedback: &'static str,
}

impl ResultsState {
    pub fn new(score: ScoreData) -> Self {
        Self {
            score,
            rank: Rank::for_score(score.total_score),
            feedback: feedback_for(score.total_score),
        }
    }
}
