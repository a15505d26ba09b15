//! Final score computation for a completed session.

/// Terminal artifact of a session, produced exactly once on completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreData {
    /// Overall score in `[0, 100]`.
    pub total_score: u8,

    /// Words solved without any incorrect submission in their round.
    pub correct_first_try: usize,

    /// Total words in the session.
    pub total_words: usize,
}

impl ScoreData {
    /// Computes the final score as `correct * 100 / total`, rounded half-up.
    ///
    /// Integer-only: `round(p / q)` with half-up is `(2p + q) / 2q`. The
    /// result is 100 exactly when every word was solved on the first try.
    ///
    /// # Panics
    ///
    /// `total_words` must be non-zero and `correct_first_try` must not
    /// exceed it; the engine guarantees both, and an out-of-range tally
    /// would otherwise truncate through the `u8` cast.
    pub fn compute(correct_first_try: usize, total_words: usize) -> Self {
        assert!(total_words > 0, "session must contain at least one word");
        assert!(
            correct_first_try <= total_words,
            "correct count cannot exceed total words"
        );

        let p = correct_first_try as u64 * 100;
        let q = total_words as u64;
        let total_score = ((2 * p + q) / (2 * q)) as u8;

        Self {
            total_score,
            correct_first_try,
            total_words,
        }
    }
}
