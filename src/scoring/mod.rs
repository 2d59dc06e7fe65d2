pub mod config;
pub mod constraints;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::{ScoringWeights, DEFAULT_WEIGHTS};
pub use constraints::check_constraints;
pub use engine::{aggregate, explain, FactorContribution, ScoreBreakdown, ScoredMatch};
pub use factors::{score_audience, score_performance, score_relevance, AgeRange, FactorScore};
pub use validation::{validate_brief, validate_weights};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{BrandBrief, CreatorProfile};
    use std::collections::BTreeMap;

    /// Fashion brief for India, ages 18-30, Instagram, tone fun/bold, 50k budget
    pub fn sample_brief() -> BrandBrief {
        BrandBrief {
            category: "Fashion".to_string(),
            budget_inr: 50000,
            target_locations: vec!["India".to_string()],
            target_ages: [18, 30],
            tone: vec!["fun".to_string(), "bold".to_string()],
            platforms: vec!["Instagram".to_string()],
            constraints: BTreeMap::new(),
        }
    }

    /// Fashion creator on Instagram, half Indian audience, 4% ER, 0.3 INR per view
    pub fn sample_creator(handle: &str) -> CreatorProfile {
        CreatorProfile {
            id: 0,
            handle: handle.to_string(),
            verticals: vec!["Fashion".to_string()],
            platforms: vec!["Instagram".to_string()],
            audience_geo: BTreeMap::from([("India".to_string(), 0.5)]),
            audience_age: BTreeMap::from([("18-24".to_string(), 0.4)]),
            avg_views: 100000,
            engagement_rate: 0.04,
            past_brand_categories: vec![],
            content_tone: vec!["fun".to_string()],
            safety_flags: BTreeMap::new(),
            base_price_inr: 30000,
        }
    }

    /// Qualified creator with a given primary vertical
    pub fn creator_in(handle: &str, vertical: &str) -> CreatorProfile {
        let mut creator = sample_creator(handle);
        creator.verticals = vec![vertical.to_string()];
        creator
    }
}
