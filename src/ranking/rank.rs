use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use super::diversify::{apply_diversification, DiversityOutcome};
use crate::model::{BrandBrief, CreatorProfile};
use crate::scoring::{aggregate, ScoredMatch, ScoringWeights};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    pub weights: ScoringWeights,
    /// Run the diversity pass after ranking
    pub diversify: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            diversify: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredMatch>,
    /// None when diversification was disabled
    pub diversity: Option<DiversityOutcome>,
}

/// Sort by score descending. Equal scores keep their input order.
pub fn rank(matches: &mut [ScoredMatch]) {
    // slice::sort_by is stable
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Score every creator against the brief, rank them, then diversify the top.
///
/// Creators are scored in parallel; the collected order matches `creators`
/// so ties stay in input order after ranking.
pub fn match_creators(
    brief: &BrandBrief,
    creators: &[CreatorProfile],
    options: &MatchOptions,
) -> MatchOutcome {
    let mut matches: Vec<ScoredMatch> = creators
        .par_iter()
        .map(|creator| aggregate(brief, creator, &options.weights))
        .collect();

    let qualified = matches.iter().filter(|m| m.is_qualified()).count();
    debug!(
        total = matches.len(),
        qualified,
        "Scored creators against brief for {}",
        brief.category
    );

    rank(&mut matches);

    let diversity = options
        .diversify
        .then(|| apply_diversification(&mut matches));
    if let Some(ref outcome) = diversity {
        debug!(?outcome, "Diversification finished");
    }

    MatchOutcome { matches, diversity }
}
