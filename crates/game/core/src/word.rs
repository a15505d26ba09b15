//! Word entries loaded from the word bank.

use crate::tier::Tier;

/// Errors rejected at word construction time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("word text must not be empty")]
    Empty,

    #[error("word text must contain only ASCII letters (got {text:?})")]
    NonAlphabetic { text: String },
}

/// A single word candidate for spelling rounds.
///
/// Immutable once loaded from the word bank. Text is normalized to lowercase
/// ASCII letters; anything else is rejected up front so rounds never have to
/// deal with punctuation or whitespace.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    text: String,
    tier: Tier,
    definition: Option<String>,
}

impl Word {
    /// Validates and normalizes a word entry.
    pub fn new(
        text: impl Into<String>,
        tier: Tier,
        definition: Option<String>,
    ) -> Result<Self, WordError> {
        let raw = text.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic { text: raw });
        }

        Ok(Self {
            text: trimmed.to_ascii_lowercase(),
            tier,
            definition,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Number of letter slots a round for this word needs.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letters of the word in spelling order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }
}
