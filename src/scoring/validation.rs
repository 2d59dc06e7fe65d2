use super::config::ScoringWeights;
use crate::model::BrandBrief;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Validate scoring weights at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(weights: &ScoringWeights) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let named = [
        ("relevance", weights.relevance),
        ("audience", weights.audience),
        ("performance", weights.performance),
        ("constraints", weights.constraints),
    ];
    for (name, value) in named {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!("weights.{}: must be a non-negative number", name));
        }
    }

    let total = weights.total();
    if errors.is_empty() && (total - 1.0).abs() > WEIGHT_TOLERANCE {
        errors.push(format!("weights: must sum to 1.0 (got {})", total));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check the preconditions the engine relies on but does not guard itself.
pub fn validate_brief(brief: &BrandBrief) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if brief.category.trim().is_empty() {
        errors.push("category: must not be empty".to_string());
    }

    if brief.min_age() > brief.max_age() {
        errors.push(format!(
            "targetAges: minimum {} is greater than maximum {}",
            brief.min_age(),
            brief.max_age()
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
