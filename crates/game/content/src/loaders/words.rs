//! Word bank loader.
//!
//! Reads per-tier word pools from RON files and validates every entry
//! through [`game_core::Word`], so malformed content is rejected at load
//! time instead of surfacing mid-round.

use std::collections::HashMap;
use std::path::Path;

use game_core::{Tier, Word};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::bank::WordBank;
use crate::loaders::{LoadResult, read_file};

/// Word bank structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordBankRon {
    tiers: HashMap<Tier, Vec<WordEntryRon>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordEntryRon {
    text: String,
    #[serde(default)]
    definition: Option<String>,
}

/// Loader for word banks from RON files.
pub struct WordBankLoader;

impl WordBankLoader {
    /// Load a word bank from a RON file.
    pub fn load(path: &Path) -> LoadResult<WordBank> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load word bank {}: {}", path.display(), e))
    }

    /// Parse and validate word bank RON content.
    ///
    /// Every tier must be present with a non-empty pool, and every entry
    /// must pass [`Word::new`] validation.
    pub fn parse(content: &str) -> LoadResult<WordBank> {
        let data: WordBankRon =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse RON: {}", e))?;

        let mut pools = HashMap::new();
        for tier in Tier::iter() {
            let entries = data
                .tiers
                .get(&tier)
                .filter(|entries| !entries.is_empty())
                .ok_or_else(|| anyhow::anyhow!("tier {} has no words", tier))?;

            let words = entries
                .iter()
                .map(|entry| {
                    Word::new(entry.text.as_str(), tier, entry.definition.clone()).map_err(|e| {
                        anyhow::anyhow!("invalid word {:?} in tier {}: {}", entry.text, tier, e)
                    })
                })
                .collect::<LoadResult<Vec<Word>>>()?;

            pools.insert(tier, words);
        }

        Ok(WordBank::from_pools(pools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_bank() {
        let content = r#"(
            tiers: {
                Starter: [(text: "cat"), (text: "dog", definition: Some("a loyal pet"))],
                Beginner: [(text: "apple")],
                Intermediate: [(text: "garden")],
                Advanced: [(text: "umbrella")],
                Expert: [(text: "chemistry")],
                Master: [(text: "phenomenon")],
            },
        )"#;

        let bank = WordBankLoader::parse(content).unwrap();
        assert_eq!(bank.pool_size(Tier::Starter), 2);
        assert_eq!(bank.pool(Tier::Starter)[1].definition(), Some("a loyal pet"));
    }

    #[test]
    fn rejects_a_bank_missing_a_tier() {
        let content = r#"(
            tiers: {
                Starter: [(text: "cat")],
            },
        )"#;

        let err = WordBankLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("has no words"));
    }

    #[test]
    fn rejects_invalid_word_text() {
        let content = r#"(
            tiers: {
                Starter: [(text: "ice cream")],
                Beginner: [(text: "apple")],
                Intermediate: [(text: "garden")],
                Advanced: [(text: "umbrella")],
                Expert: [(text: "chemistry")],
                Master: [(text: "phenomenon")],
            },
        )"#;

        let err = WordBankLoader::parse(content).unwrap_err();
        assert!(err.to_string().contains("invalid word"));
    }
}
