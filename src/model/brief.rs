use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A constraint value in a brief: either a switch or a numeric limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintValue {
    Flag(bool),
    Number(i64),
}

impl ConstraintValue {
    pub fn is_truthy(&self) -> bool {
        match self {
            ConstraintValue::Flag(b) => *b,
            ConstraintValue::Number(n) => *n != 0,
        }
    }
}

/// Campaign requirements a creator set is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandBrief {
    pub category: String,
    #[serde(rename = "budgetINR")]
    pub budget_inr: u64,
    #[serde(default)]
    pub target_locations: Vec<String>,
    /// `[min_age, max_age]`; any other length fails to parse
    pub target_ages: [u32; 2],
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub constraints: BTreeMap<String, ConstraintValue>,
}

impl BrandBrief {
    /// Absent constraints read as false
    pub fn constraint_enabled(&self, name: &str) -> bool {
        self.constraints
            .get(name)
            .map(ConstraintValue::is_truthy)
            .unwrap_or(false)
    }

    pub fn min_age(&self) -> u32 {
        self.target_ages[0]
    }

    pub fn max_age(&self) -> u32 {
        self.target_ages[1]
    }
}

/// A stored brand. Matching runs against the brief derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(rename = "budgetINR")]
    pub budget_inr: u64,
    #[serde(default)]
    pub target_locations: Vec<String>,
    pub target_ages: [u32; 2],
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub tone: Vec<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub constraints: BTreeMap<String, ConstraintValue>,
}

impl Brand {
    /// Build the campaign brief for this brand. Goals are not scored.
    pub fn to_brief(&self) -> BrandBrief {
        BrandBrief {
            category: self.category.clone(),
            budget_inr: self.budget_inr,
            target_locations: self.target_locations.clone(),
            target_ages: self.target_ages,
            tone: self.tone.clone(),
            platforms: self.platforms.clone(),
            constraints: self.constraints.clone(),
        }
    }
}
