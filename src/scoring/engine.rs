use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::config::ScoringWeights;
use super::constraints::check_constraints;
use super::factors::{score_audience, score_performance, score_relevance, FactorScore};
use crate::model::{BrandBrief, CreatorProfile};

/// A creator scored against one brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub creator: CreatorProfile,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl ScoredMatch {
    /// Qualified creators passed every hard constraint
    pub fn is_qualified(&self) -> bool {
        self.score > 0.0
    }

    /// Append a reason unless it is already listed
    pub fn push_reason(&mut self, reason: &str) {
        if !self.reasons.iter().any(|r| r == reason) {
            self.reasons.push(reason.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct FactorContribution {
    pub label: &'static str, // "Relevance", "Audience", "Performance", "Constraints"
    pub raw: f64,            // Sub-score on the 0-100 scale
    pub weight: f64,
    pub weighted: f64, // raw * weight
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Present when a hard constraint failed; no factors are scored then
    pub disqualified: Option<String>,
    pub factors: Vec<FactorContribution>,
    pub score: f64,
}

/// Score one creator against a brief, keeping each factor's contribution.
pub fn explain(
    brief: &BrandBrief,
    creator: &CreatorProfile,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let constraints = check_constraints(brief, creator);
    if constraints.score == 0.0 {
        return ScoreBreakdown {
            disqualified: constraints.reasons.into_iter().next(),
            factors: Vec::new(),
            score: 0.0,
        };
    }

    let parts: [(&'static str, FactorScore, f64); 4] = [
        ("Relevance", score_relevance(brief, creator), weights.relevance),
        ("Audience", score_audience(brief, creator), weights.audience),
        ("Performance", score_performance(brief, creator), weights.performance),
        ("Constraints", constraints, weights.constraints),
    ];

    let factors: Vec<FactorContribution> = parts
        .into_iter()
        .map(|(label, factor, weight)| FactorContribution {
            label,
            raw: factor.score,
            weight,
            weighted: factor.score * weight,
            reasons: factor.reasons,
        })
        .collect();

    let total: f64 = factors.iter().map(|f| f.weighted).sum();

    ScoreBreakdown {
        disqualified: None,
        factors,
        score: round2(total.clamp(0.0, 100.0)),
    }
}

/// Score one creator against a brief.
///
/// A creator failing a hard constraint scores 0 and carries only the failure
/// reason. Otherwise the weighted sub-scores are summed, rounded to two
/// decimals, and the reasons of every factor are merged without duplicates.
pub fn aggregate(
    brief: &BrandBrief,
    creator: &CreatorProfile,
    weights: &ScoringWeights,
) -> ScoredMatch {
    let breakdown = explain(brief, creator, weights);

    let reasons = match breakdown.disqualified {
        Some(reason) => vec![reason],
        None => dedup_reasons(breakdown.factors.into_iter().flat_map(|f| f.reasons)),
    };

    ScoredMatch {
        creator: creator.clone(),
        score: breakdown.score,
        reasons,
    }
}

fn dedup_reasons(reasons: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    reasons
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
