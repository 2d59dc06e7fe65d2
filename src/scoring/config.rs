use serde::{Deserialize, Serialize};

/// Weights combining the sub-scores into the final score.
///
/// Each sub-score is on a 0-100 scale, so weights summing to 1.0 keep the
/// final score on the same scale.
///
/// Example YAML:
/// ```yaml
/// weights:
///   relevance: 0.4
///   audience: 0.3
///   performance: 0.2
///   constraints: 0.1
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct ScoringWeights {
    /// Category and tone fit
    pub relevance: f64,
    /// Geography and age overlap
    pub audience: f64,
    /// Engagement and cost per view
    pub performance: f64,
    /// Flat credit for passing every hard constraint
    pub constraints: f64,
}

/// Weights used when none are configured.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    relevance: 0.40,
    audience: 0.30,
    performance: 0.20,
    constraints: 0.10,
};

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.relevance + self.audience + self.performance + self.constraints
    }
}
