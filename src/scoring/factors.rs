use std::collections::HashSet;

use anyhow::{bail, Result};
use tracing::debug;

use crate::model::{BrandBrief, CreatorProfile};

/// A 0-100 sub-score with the reasons that earned it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactorScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl FactorScore {
    pub(crate) fn failed(reason: &str) -> Self {
        Self {
            score: 0.0,
            reasons: vec![reason.to_string()],
        }
    }

    fn add(&mut self, points: f64, reason: String) {
        self.score += points;
        self.reasons.push(reason);
    }
}

/// Inclusive audience age bracket parsed from a label like "18-24".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn parse(s: &str) -> Result<Self> {
        let Some((low, high)) = s.trim().split_once('-') else {
            bail!("Invalid age range: {}", s)
        };
        Ok(AgeRange {
            min: low.trim().parse()?,
            max: high.trim().parse()?,
        })
    }

    /// True when the two brackets share more than a single boundary age.
    pub fn overlaps(&self, min: u32, max: u32) -> bool {
        max.min(self.max) > min.max(self.min)
    }
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    haystack.iter().any(|h| h.to_lowercase() == needle)
}

fn lowercase_set(values: &[String]) -> HashSet<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Category fit (up to 70) plus tone fit (up to 30).
pub fn score_relevance(brief: &BrandBrief, creator: &CreatorProfile) -> FactorScore {
    let mut result = FactorScore::default();

    if contains_ignore_case(&creator.verticals, &brief.category) {
        result.add(70.0, "Primary Vertical Match".to_string());
    } else if contains_ignore_case(&creator.past_brand_categories, &brief.category) {
        result.add(50.0, "Past Work Match".to_string());
    }

    // Empty brief tone contributes nothing rather than dividing by zero
    if !brief.tone.is_empty() {
        let wanted = lowercase_set(&brief.tone);
        let offered = lowercase_set(&creator.content_tone);
        let overlap = wanted.intersection(&offered).count();
        if overlap > 0 {
            let total = brief.tone.len();
            result.add(
                overlap as f64 / total as f64 * 30.0,
                format!("Tone Fit ({}/{})", overlap, total),
            );
        }
    }

    result
}

/// Geographic overlap (up to 50) plus age overlap (up to 50).
pub fn score_audience(brief: &BrandBrief, creator: &CreatorProfile) -> FactorScore {
    let mut result = FactorScore::default();

    let geo: f64 = brief
        .target_locations
        .iter()
        .filter_map(|loc| creator.audience_geo.get(loc))
        .sum();
    if geo > 0.0 {
        let clamped = geo.min(1.0);
        result.add(
            clamped * 50.0,
            format!("Geographic Overlap ({})", percent(clamped)),
        );
    }

    let (min_age, max_age) = (brief.min_age(), brief.max_age());
    let mut age = 0.0_f64;
    for (label, fraction) in &creator.audience_age {
        match AgeRange::parse(label) {
            Ok(range) if range.overlaps(min_age, max_age) => age += *fraction,
            Ok(_) => {}
            Err(e) => debug!(handle = %creator.handle, label = %label, "skipping age bracket: {}", e),
        }
    }
    if age > 0.0 {
        let clamped = age.min(1.0);
        result.add(
            clamped * 50.0,
            format!("Target Age Match ({})", percent(clamped)),
        );
    }

    result
}

/// Engagement tier (up to 50) plus cost-per-view value (up to 50).
pub fn score_performance(_brief: &BrandBrief, creator: &CreatorProfile) -> FactorScore {
    let mut result = FactorScore::default();

    let er = creator.engagement_rate;
    if er > 0.05 {
        result.add(50.0, format!("High ER ({:.1}%)", er * 100.0));
    } else if er > 0.03 {
        result.add(30.0, format!("Good ER ({:.1}%)", er * 100.0));
    }

    // No views means no measurable value
    let cost_per_view = if creator.avg_views > 0 {
        creator.base_price_inr as f64 / creator.avg_views as f64
    } else {
        f64::INFINITY
    };
    if cost_per_view < 0.5 {
        result.add(50.0, "Excellent Value".to_string());
    } else if cost_per_view < 1.0 {
        result.add(25.0, "Good Value".to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::test_support::{sample_brief, sample_creator};
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_age_range() {
        let range = AgeRange::parse("18-24").unwrap();
        assert_eq!(range, AgeRange { min: 18, max: 24 });
        assert!(AgeRange::parse(" 25 - 34 ").is_ok());
    }

    #[test]
    fn test_parse_age_range_rejects_malformed() {
        assert!(AgeRange::parse("65+").is_err());
        assert!(AgeRange::parse("teens").is_err());
        assert!(AgeRange::parse("18-").is_err());
        assert!(AgeRange::parse("a-b").is_err());
    }

    #[test]
    fn test_age_overlap_is_strict() {
        let range = AgeRange { min: 18, max: 24 };
        assert!(range.overlaps(20, 30));
        assert!(!range.overlaps(24, 30)); // shares only the boundary
        assert!(!range.overlaps(30, 40));
    }

    #[test]
    fn test_relevance_primary_vertical_case_insensitive() {
        let mut brief = sample_brief();
        brief.category = "fashion".to_string();
        brief.tone.clear();
        let result = score_relevance(&brief, &sample_creator("@a"));
        assert_eq!(result.score, 70.0);
        assert_eq!(result.reasons, vec!["Primary Vertical Match".to_string()]);
    }

    #[test]
    fn test_relevance_past_work_match() {
        let mut brief = sample_brief();
        brief.tone.clear();
        let mut creator = sample_creator("@a");
        creator.verticals = vec!["Travel".to_string()];
        creator.past_brand_categories = vec!["FASHION".to_string()];

        let result = score_relevance(&brief, &creator);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.reasons, vec!["Past Work Match".to_string()]);
    }

    #[test]
    fn test_relevance_vertical_beats_past_work() {
        let mut brief = sample_brief();
        brief.tone.clear();
        let mut creator = sample_creator("@a");
        creator.past_brand_categories = vec!["Fashion".to_string()];

        let result = score_relevance(&brief, &creator);
        assert_eq!(result.score, 70.0);
        assert!(!result.reasons.contains(&"Past Work Match".to_string()));
    }

    #[test]
    fn test_tone_fit_fraction() {
        let mut brief = sample_brief();
        brief.category = "Gaming".to_string();
        brief.tone = vec!["fun".to_string(), "bold".to_string()];
        let mut creator = sample_creator("@a");
        creator.content_tone = vec!["fun".to_string(), "serious".to_string()];

        let result = score_relevance(&brief, &creator);
        assert_eq!(result.score, 15.0);
        assert_eq!(result.reasons, vec!["Tone Fit (1/2)".to_string()]);
    }

    #[test]
    fn test_empty_brief_tone_contributes_nothing() {
        let mut brief = sample_brief();
        brief.category = "Gaming".to_string();
        brief.tone.clear();

        let result = score_relevance(&brief, &sample_creator("@a"));
        assert_eq!(result.score, 0.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_geo_overlap_clamped() {
        let mut brief = sample_brief();
        brief.target_locations = vec!["India".to_string(), "Nepal".to_string()];
        let mut creator = sample_creator("@a");
        creator.audience_geo =
            BTreeMap::from([("India".to_string(), 0.7), ("Nepal".to_string(), 0.5)]);
        creator.audience_age.clear();

        let result = score_audience(&brief, &creator);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.reasons, vec!["Geographic Overlap (100%)".to_string()]);
    }

    #[test]
    fn test_missing_location_contributes_zero() {
        let mut brief = sample_brief();
        brief.target_locations = vec!["Brazil".to_string()];
        let mut creator = sample_creator("@a");
        creator.audience_age.clear();

        let result = score_audience(&brief, &creator);
        assert_eq!(result.score, 0.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_age_match_skips_malformed_labels() {
        let mut brief = sample_brief();
        brief.target_locations.clear();
        brief.target_ages = [18, 30];
        let mut creator = sample_creator("@a");
        creator.audience_age = BTreeMap::from([
            ("18-24".to_string(), 0.25),
            ("25-34".to_string(), 0.25),
            ("35-44".to_string(), 0.4),
            ("65+".to_string(), 0.1),
        ]);

        let result = score_audience(&brief, &creator);
        assert_eq!(result.score, 25.0);
        assert_eq!(result.reasons, vec!["Target Age Match (50%)".to_string()]);
    }

    #[test]
    fn test_age_match_clamped() {
        let mut brief = sample_brief();
        brief.target_locations.clear();
        brief.target_ages = [10, 60];
        let mut creator = sample_creator("@a");
        creator.audience_age = BTreeMap::from([
            ("18-24".to_string(), 0.75),
            ("25-34".to_string(), 0.75),
        ]);

        let result = score_audience(&brief, &creator);
        assert_eq!(result.score, 50.0);
        assert_eq!(result.reasons, vec!["Target Age Match (100%)".to_string()]);
    }

    #[test]
    fn test_performance_high_er_excellent_value() {
        let mut creator = sample_creator("@a");
        creator.engagement_rate = 0.062;
        creator.base_price_inr = 20000;
        creator.avg_views = 100000;

        let result = score_performance(&sample_brief(), &creator);
        assert_eq!(result.score, 100.0);
        assert_eq!(
            result.reasons,
            vec!["High ER (6.2%)".to_string(), "Excellent Value".to_string()]
        );
    }

    #[test]
    fn test_performance_tiers_are_strict() {
        let mut creator = sample_creator("@a");
        creator.engagement_rate = 0.05;
        creator.base_price_inr = 50000;
        creator.avg_views = 100000; // exactly 0.5 per view

        let result = score_performance(&sample_brief(), &creator);
        assert_eq!(result.score, 55.0);
        assert_eq!(
            result.reasons,
            vec!["Good ER (5.0%)".to_string(), "Good Value".to_string()]
        );
    }

    #[test]
    fn test_performance_zero_views() {
        let mut creator = sample_creator("@a");
        creator.engagement_rate = 0.01;
        creator.avg_views = 0;

        let result = score_performance(&sample_brief(), &creator);
        assert_eq!(result.score, 0.0);
        assert!(result.reasons.is_empty());
    }
}
