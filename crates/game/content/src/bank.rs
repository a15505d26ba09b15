//! Word pools keyed by difficulty tier.

use std::collections::HashMap;

use game_core::{Tier, Word};

/// Static mapping from difficulty tier to candidate words.
///
/// Leaf data with no game logic: built once at startup and only read from
/// afterwards.
#[derive(Clone, Debug, Default)]
pub struct WordBank {
    pools: HashMap<Tier, Vec<Word>>,
}

impl WordBank {
    pub fn from_pools(pools: HashMap<Tier, Vec<Word>>) -> Self {
        Self { pools }
    }

    /// Candidate words for a tier; empty when the tier has no pool.
    pub fn pool(&self, tier: Tier) -> &[Word] {
        self.pools.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of words available for a tier.
    pub fn pool_size(&self, tier: Tier) -> usize {
        self.pool(tier).len()
    }

    /// The default bank shipped with the game.
    ///
    /// # Panics
    ///
    /// Panics if the embedded asset fails to parse; that is a build defect,
    /// covered by a test, not a runtime condition.
    #[cfg(feature = "loaders")]
    pub fn builtin() -> Self {
        crate::loaders::WordBankLoader::parse(include_str!("../data/words.ron"))
            .expect("embedded word bank must be valid")
    }
}

#[cfg(all(test, feature = "loaders"))]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_bank_covers_every_tier() {
        let bank = WordBank::builtin();
        for tier in Tier::iter() {
            assert!(
                bank.pool_size(tier) >= 10,
                "tier {tier} holds only {} words",
                bank.pool_size(tier)
            );
        }
    }

    #[test]
    fn builtin_words_carry_their_tier() {
        let bank = WordBank::builtin();
        for tier in Tier::iter() {
            assert!(bank.pool(tier).iter().all(|w| w.tier() == tier));
        }
    }

    #[test]
    fn missing_tier_yields_an_empty_pool() {
        let bank = WordBank::from_pools(HashMap::new());
        assert!(bank.pool(Tier::Starter).is_empty());
    }
}
