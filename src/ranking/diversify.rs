use tracing::info;

use crate::scoring::ScoredMatch;

pub const PROMOTED_FOR_DIVERSITY: &str = "Promoted for Diversity";

/// Number of leading qualified results checked for a dominating vertical.
const TOP_N: usize = 3;

/// What the diversity pass did to a ranked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiversityOutcome {
    /// Fewer than three qualified creators; nothing to check
    TooFewQualified,
    /// The top three do not share one primary vertical
    Varied,
    /// The top three shared `dominant`; the creator at `from` moved up to `to`
    /// and the former third place took its slot
    Promoted {
        dominant: String,
        from: usize,
        to: usize,
    },
    /// The top three shared `dominant` but no qualified creator differs
    NoReplacement { dominant: String },
}

/// Break up a top three that all share the same primary vertical.
///
/// Only qualified creators (score > 0) are considered. When the first three
/// all have the same non-empty primary vertical, the first later qualified
/// creator with a different (or no) primary vertical swaps places with the
/// third. At most one swap happens per call, and a second call on the result
/// does nothing. Positions refer to indices in `ranked`.
pub fn apply_diversification(ranked: &mut [ScoredMatch]) -> DiversityOutcome {
    let qualified: Vec<usize> = ranked
        .iter()
        .enumerate()
        .filter(|(_, m)| m.is_qualified())
        .map(|(i, _)| i)
        .collect();

    if qualified.len() < TOP_N {
        return DiversityOutcome::TooFewQualified;
    }

    let primaries: Vec<&str> = qualified[..TOP_N]
        .iter()
        .filter_map(|&i| ranked[i].creator.primary_vertical())
        .collect();

    // Creators without verticals never count toward domination
    if primaries.len() < TOP_N || primaries.iter().any(|v| *v != primaries[0]) {
        return DiversityOutcome::Varied;
    }

    let dominant = primaries[0].to_string();
    info!(vertical = %dominant, "Top {} dominated by one vertical, applying diversification", TOP_N);

    let third = qualified[TOP_N - 1];
    let replacement = qualified[TOP_N..]
        .iter()
        .copied()
        .find(|&i| ranked[i].creator.primary_vertical() != Some(dominant.as_str()));

    let Some(from) = replacement else {
        info!(vertical = %dominant, "No replacement found for diversification");
        return DiversityOutcome::NoReplacement { dominant };
    };

    info!(
        promoted = %ranked[from].creator.handle,
        demoted = %ranked[third].creator.handle,
        "Swapping for diversity"
    );
    ranked.swap(third, from);
    ranked[third].push_reason(PROMOTED_FOR_DIVERSITY);

    DiversityOutcome::Promoted {
        dominant,
        from,
        to: third,
    }
}

/// Owned form of [`apply_diversification`] for pipeline use.
pub fn diversify(mut ranked: Vec<ScoredMatch>) -> Vec<ScoredMatch> {
    apply_diversification(&mut ranked);
    ranked
}
