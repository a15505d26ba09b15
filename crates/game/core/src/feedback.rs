//! Score-bucketed encouragement text and result ranks.
//!
//! Behaviorally a static ordered-threshold lookup: deterministic, total over
//! `[0, 100]`, no I/O.

/// Achievement rank displayed on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Legendary,
    Excellent,
    Proficient,
    Developing,
    Beginner,
}

impl Rank {
    /// Maps a final score to its rank bucket.
    pub fn for_score(score: u8) -> Self {
        match score {
            90.. => Rank::Legendary,
            80.. => Rank::Excellent,
            60.. => Rank::Proficient,
            40.. => Rank::Developing,
            _ => Rank::Beginner,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Rank::Legendary => "Legendary",
            Rank::Excellent => "Excellent",
            Rank::Proficient => "Proficient",
            Rank::Developing => "Developing",
            Rank::Beginner => "Beginner",
        }
    }
}

/// Returns the canned encouragement line for a final score.
pub fn feedback_for(score: u8) -> &'static str {
    match score {
        90.. => "Absolutely incredible! Your spelling mastery is professional.",
        80.. => "Excellent performance! You have a strong grasp.",
        60.. => "Great job! You're showing solid progress.",
        40.. => "You're on the right track! Keep practicing.",
        _ => "Good effort! Practice makes perfect—keep it up.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_is_total_over_score_range() {
        for score in 0..=100u8 {
            assert!(!feedback_for(score).is_empty());
        }
    }

    #[test]
    fn thresholds_switch_at_bucket_boundaries() {
        assert_ne!(feedback_for(39), feedback_for(40));
        assert_ne!(feedback_for(59), feedback_for(60));
        assert_ne!(feedback_for(79), feedback_for(80));
        assert_ne!(feedback_for(89), feedback_for(90));
        assert_eq!(feedback_for(90), feedback_for(100));
    }

    #[test]
    fn ranks_track_the_same_buckets() {
        assert_eq!(Rank::for_score(100), Rank::Legendary);
        assert_eq!(Rank::for_score(90), Rank::Legendary);
        assert_eq!(Rank::for_score(89), Rank::Excellent);
        assert_eq!(Rank::for_score(60), Rank::Proficient);
        assert_eq!(Rank::for_score(40), Rank::Developing);
        assert_eq!(Rank::for_score(0), Rank::Beginner);
    }
}
