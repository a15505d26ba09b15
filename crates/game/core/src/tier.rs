//! Difficulty tiers bucketing words by Lexile reading-level band.

/// Difficulty tier for a spelling session.
///
/// Tiers form a fixed ordered scale from beginner to expert-plus and serve
/// purely as lookup keys into the word bank; no game rule branches on them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Starter,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    Master,
}

impl Tier {
    /// Human-facing label shown on the selection screen.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }

    /// Lexile band covered by this tier.
    pub fn lexile_range(&self) -> &'static str {
        match self {
            Tier::Starter => "BR-200L",
            Tier::Beginner => "200L-400L",
            Tier::Intermediate => "400L-600L",
            Tier::Advanced => "600L-800L",
            Tier::Expert => "800L-1000L",
            Tier::Master => "1000L+",
        }
    }

    /// Short vocabulary description for the selection screen.
    pub fn description(&self) -> &'static str {
        match self {
            Tier::Starter => "Beginners",
            Tier::Beginner => "Core Vocab",
            Tier::Intermediate => "Daily Words",
            Tier::Advanced => "Academic",
            Tier::Expert => "Professional",
            Tier::Master => "Complex Terms",
        }
    }
}
