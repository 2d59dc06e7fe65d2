use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A creator as stored and as scored.
///
/// Field names on the wire are camelCase (`audienceGeo`, `basePriceINR`) to
/// match the seed files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    /// Assigned by the store when absent from the seed file
    #[serde(default)]
    pub id: u64,
    pub handle: String,
    /// Ordered; the first entry is the primary vertical
    #[serde(default)]
    pub verticals: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Location name -> fraction of audience (need not sum to 1)
    #[serde(default)]
    pub audience_geo: BTreeMap<String, f64>,
    /// Age range label ("18-24") -> fraction of audience
    #[serde(default)]
    pub audience_age: BTreeMap<String, f64>,
    #[serde(default)]
    pub avg_views: u64,
    #[serde(default)]
    pub engagement_rate: f64,
    #[serde(default)]
    pub past_brand_categories: Vec<String>,
    #[serde(default)]
    pub content_tone: Vec<String>,
    #[serde(default)]
    pub safety_flags: BTreeMap<String, bool>,
    #[serde(rename = "basePriceINR", default)]
    pub base_price_inr: u64,
}

impl CreatorProfile {
    /// The first vertical, if the creator has any
    pub fn primary_vertical(&self) -> Option<&str> {
        self.verticals.first().map(String::as_str)
    }

    /// Missing flags read as false
    pub fn has_flag(&self, name: &str) -> bool {
        self.safety_flags.get(name).copied().unwrap_or(false)
    }
}
