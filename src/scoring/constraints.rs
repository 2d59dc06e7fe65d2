use crate::model::{BrandBrief, CreatorProfile};

use super::factors::FactorScore;

pub const OVER_BUDGET: &str = "Price over budget";
pub const NO_PLATFORM: &str = "Does not use required platforms";
pub const UNSAFE_CONTENT: &str = "Violates content safety rules";

/// Hard pass/fail rules. Returns 100 when every rule passes, otherwise 0 with
/// the single reason of the first rule that failed.
///
/// Rules run in order: budget, platform overlap, content safety. New rules must
/// keep the first-failure-wins policy.
pub fn check_constraints(brief: &BrandBrief, creator: &CreatorProfile) -> FactorScore {
    if creator.base_price_inr > brief.budget_inr {
        return FactorScore::failed(OVER_BUDGET);
    }

    let mut matched: Vec<&str> = Vec::new();
    for platform in &brief.platforms {
        if creator.platforms.contains(platform) && !matched.contains(&platform.as_str()) {
            matched.push(platform);
        }
    }
    if matched.is_empty() {
        return FactorScore::failed(NO_PLATFORM);
    }

    if brief.constraint_enabled("noAdultContent") && creator.has_flag("adult") {
        return FactorScore::failed(UNSAFE_CONTENT);
    }

    FactorScore {
        score: 100.0,
        reasons: vec![
            "Within Budget".to_string(),
            format!("On Platform ({})", matched.join(", ")),
        ],
    }
}
