//! Events published by the runtime during a session.

use game_core::ScoreData;

/// Events emitted on the broadcast channel after every transition.
///
/// Frontends treat these as redraw triggers and re-query the snapshot;
/// only completion carries a payload the UI cannot re-derive.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A session was created and its first round began.
    SessionStarted,
    /// A new round began (also fired for the first round).
    RoundStarted { word_index: usize, total_words: usize },
    /// Round state changed (placement, undo, reject flash, reset).
    StateChanged,
    /// A full-slot submission did not match the target word.
    WordRejected,
    /// The target word was spelled correctly.
    WordSolved { first_try: bool },
    /// The last word was solved; the final score is attached.
    SessionCompleted(ScoreData),
    /// The session was discarded by an explicit exit.
    SessionExited,
}
