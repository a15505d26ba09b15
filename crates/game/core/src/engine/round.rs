//! Mutable per-word state: the letter pool and the spelling slots.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::word::Word;

/// Letter pool and slot row for the word currently being spelled.
///
/// Invariant: the multiset of placed letters plus pool letters always equals
/// the multiset of the target word's letters, so
/// `filled() + pool.len() == target.len()` at all times.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    target: Word,
    pool: Vec<char>,
    slots: Vec<Option<char>>,
    has_failed: bool,
}

impl RoundState {
    /// Starts a fresh round: scrambled pool, all slots empty.
    ///
    /// The scramble is a uniform permutation and may coincide with the
    /// spelling order; that is acceptable.
    pub fn begin<R: Rng>(target: Word, rng: &mut R) -> Self {
        let mut pool: Vec<char> = target.letters().collect();
        pool.shuffle(rng);
        let slots = vec![None; target.len()];

        Self {
            target,
            pool,
            slots,
            has_failed: false,
        }
    }

    pub fn target(&self) -> &Word {
        &self.target
    }

    pub fn pool(&self) -> &[char] {
        &self.pool
    }

    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    /// True once an incorrect full-slot submission happened in this round.
    /// Sticky for the life of the round.
    pub fn has_failed(&self) -> bool {
        self.has_failed
    }

    pub fn mark_failed(&mut self) {
        self.has_failed = true;
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Moves the pool letter at `pool_index` into the first empty slot.
    ///
    /// Returns `false` (leaving the round untouched) when the index is out
    /// of range or no slot is empty.
    pub fn place(&mut self, pool_index: usize) -> bool {
        if pool_index >= self.pool.len() {
            return false;
        }
        let Some(slot) = self.slots.iter_mut().find(|s| s.is_none()) else {
            return false;
        };

        *slot = Some(self.pool.remove(pool_index));
        true
    }

    /// Returns the letter in `slot_index` to the end of the pool.
    ///
    /// Returns `false` when the index is out of range or the slot is empty.
    pub fn undo(&mut self, slot_index: usize) -> bool {
        let Some(letter) = self.slots.get_mut(slot_index).and_then(Option::take) else {
            return false;
        };

        self.pool.push(letter);
        true
    }

    /// The candidate spelling, readable only once every slot is filled.
    pub fn candidate(&self) -> Option<String> {
        self.slots.iter().copied().collect()
    }

    /// Clears the slots and re-scrambles the full letter multiset.
    ///
    /// Used after a rejection; `has_failed` stays set.
    pub fn rescramble<R: Rng>(&mut self, rng: &mut R) {
        self.pool = self.target.letters().collect();
        self.pool.shuffle(rng);
        self.slots.fill(None);
    }
}
