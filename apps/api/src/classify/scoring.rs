//! Named scoring weights and selection policy. The source app scattered
//! these as inline magic numbers that drifted between call sites; here they
//! are one auditable configuration with defaults, injectable for tests.

use serde::{Deserialize, Serialize};

/// Per-location, per-tier keyword weights. Title evidence outweighs content
/// evidence; primary keywords outweigh frameworks, which outweigh secondary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub title_primary: f64,
    pub title_secondary: f64,
    pub title_frameworks: f64,
    pub content_primary: f64,
    pub content_secondary: f64,
    pub content_frameworks: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_primary: 5.0,
            title_secondary: 3.0,
            title_frameworks: 4.0,
            content_primary: 3.0,
            content_secondary: 2.0,
            content_frameworks: 2.5,
        }
    }
}

/// Thresholds applied when picking a winner from the ranked scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// The leader wins outright when `score1 >= score2 * dominance_ratio`.
    /// Inclusive: an exact ratio hit still selects the leader.
    pub dominance_ratio: f64,
    /// When `ai` is in the top two and the score gap is at most this,
    /// ambiguous AI-adjacent content resolves to `ai`.
    pub ai_closeness: f64,
    /// A topic's score gets the diversity bonus when its count of distinct
    /// matched keywords (all tiers, title + content) exceeds this.
    pub diversity_threshold: usize,
    /// Multiplier rewarding topically diverse evidence over a single
    /// repeated keyword.
    pub diversity_bonus: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            dominance_ratio: 1.5,
            ai_closeness: 5.0,
            diversity_threshold: 2,
            diversity_bonus: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_outweighs_content_per_tier() {
        let w = ScoringWeights::default();
        assert!(w.title_primary > w.content_primary);
        assert!(w.title_secondary > w.content_secondary);
        assert!(w.title_frameworks > w.content_frameworks);
    }

    #[test]
    fn test_tier_ordering_primary_frameworks_secondary() {
        let w = ScoringWeights::default();
        assert!(w.title_primary > w.title_frameworks);
        assert!(w.title_frameworks > w.title_secondary);
        assert!(w.content_primary > w.content_frameworks);
        assert!(w.content_frameworks > w.content_secondary);
    }

    #[test]
    fn test_default_policy_values() {
        let p = SelectionPolicy::default();
        assert_eq!(p.dominance_ratio, 1.5);
        assert_eq!(p.ai_closeness, 5.0);
        assert_eq!(p.diversity_threshold, 2);
        assert_eq!(p.diversity_bonus, 1.5);
    }
}
