//! Session construction and progress tracking.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::word::Word;

/// Configuration errors signaled before a session is created.
///
/// These never surface mid-round: every variant is detected while the
/// session (or engine) is being constructed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("word count must be at least 1")]
    InvalidCount,

    #[error("word pool for the requested tier is empty")]
    EmptyPool,

    #[error("requested {requested} words but the pool only holds {available}")]
    InsufficientWords { requested: usize, available: usize },

    #[error("session contains no words")]
    EmptySession,
}

/// A fixed-order word list for one assessment run.
///
/// Created by a uniform shuffle-and-truncate of a tier's word pool and never
/// mutated afterwards; the engine advances a cursor over it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    words: Vec<Word>,
    word_count: usize,
}

impl Session {
    /// Samples `count` words from `pool` in uniformly random order.
    ///
    /// Uses Fisher-Yates via [`SliceRandom::shuffle`], then truncates.
    /// Requesting more words than the pool holds is a configuration error
    /// ([`SessionError::InsufficientWords`]), not a clamp.
    pub fn draw<R: Rng>(pool: &[Word], count: usize, rng: &mut R) -> Result<Self, SessionError> {
        if count == 0 {
            return Err(SessionError::InvalidCount);
        }
        if pool.is_empty() {
            return Err(SessionError::EmptyPool);
        }
        if count > pool.len() {
            return Err(SessionError::InsufficientWords {
                requested: count,
                available: pool.len(),
            });
        }

        let mut words = pool.to_vec();
        words.shuffle(rng);
        words.truncate(count);

        Ok(Self {
            words,
            word_count: count,
        })
    }

    /// Builds a session from an explicit word list (tests, replay tooling).
    pub fn from_words(words: Vec<Word>) -> Result<Self, SessionError> {
        if words.is_empty() {
            return Err(SessionError::EmptySession);
        }
        let word_count = words.len();
        Ok(Self { words, word_count })
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

/// Cursor and score tally over a session's word list.
///
/// Both fields advance monotonically; nothing ever rewinds them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionProgress {
    /// Index of the word currently being spelled.
    pub current_index: usize,

    /// Words solved with no incorrect full-slot submission in their round.
    pub correct_first_try: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pool(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .map(|t| Word::new(*t, Tier::Starter, None).unwrap())
            .collect()
    }

    #[test]
    fn draw_respects_requested_count() {
        let pool = pool(&["cat", "dog", "sun", "map", "red", "fox"]);
        let mut rng = SmallRng::seed_from_u64(7);

        for count in [1, 3, 6] {
            let session = Session::draw(&pool, count, &mut rng).unwrap();
            assert_eq!(session.words().len(), count);
            assert_eq!(session.word_count(), count);
        }
    }

    #[test]
    fn draw_samples_without_replacement() {
        let pool = pool(&["cat", "dog", "sun", "map", "red", "fox"]);
        let mut rng = SmallRng::seed_from_u64(11);

        let session = Session::draw(&pool, 6, &mut rng).unwrap();
        let mut texts: Vec<&str> = session.words().iter().map(|w| w.text()).collect();
        texts.sort_unstable();
        assert_eq!(texts, ["cat", "dog", "fox", "map", "red", "sun"]);
    }

    #[test]
    fn oversized_count_is_an_error_not_a_clamp() {
        let pool = pool(&["cat", "dog", "sun", "map", "red", "fox"]);
        let mut rng = SmallRng::seed_from_u64(3);

        assert_eq!(
            Session::draw(&pool, 10, &mut rng),
            Err(SessionError::InsufficientWords {
                requested: 10,
                available: 6,
            })
        );
    }

    #[test]
    fn zero_count_and_empty_pool_are_rejected() {
        let pool = pool(&["cat"]);
        let mut rng = SmallRng::seed_from_u64(3);

        assert_eq!(
            Session::draw(&pool, 0, &mut rng),
            Err(SessionError::InvalidCount)
        );
        assert_eq!(
            Session::draw(&[], 1, &mut rng),
            Err(SessionError::EmptyPool)
        );
    }
}
