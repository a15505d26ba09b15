//! Deterministic spelling-assessment logic shared across clients.
//!
//! `game-core` defines the canonical rules (tiers, sessions, the spelling
//! engine, scoring) and exposes pure APIs that can be reused by both the
//! runtime and offline tools. All round mutation flows through
//! [`engine::SpellingEngine`], and supporting crates depend on the types
//! re-exported here. Randomness is injected via [`rand::Rng`] so every
//! operation is deterministic under a seeded generator.
pub mod engine;
pub mod feedback;
pub mod score;
pub mod session;
pub mod tier;
pub mod word;

pub use engine::{
    EngineSnapshot, Phase, PlaceOutcome, RoundAdvance, RoundState, SpellingEngine, UndoOutcome,
};
pub use feedback::{Rank, feedback_for};
pub use score::ScoreData;
pub use session::{Session, SessionError, SessionProgress};
pub use tier::Tier;
pub use word::{Word, WordError};
