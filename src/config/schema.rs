use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ranking::MatchOptions;
use crate::scoring::ScoringWeights;
use crate::store::DEFAULT_LIMIT;

/// Application configuration. Every field is optional.
///
/// Example YAML:
/// ```yaml
/// creators: ~/data/creators.json
/// brands: ~/data/brands.json
/// limit: 1000
/// diversify: true
/// weights:
///   relevance: 0.4
///   audience: 0.3
///   performance: 0.2
///   constraints: 0.1
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Creator seed file (JSON array)
    #[serde(default)]
    pub creators: Option<PathBuf>,

    /// Brand seed file (JSON array)
    #[serde(default)]
    pub brands: Option<PathBuf>,

    /// Most creators considered per match (default: 1000)
    #[serde(default)]
    pub limit: Option<usize>,

    /// Run the diversity pass after ranking (default: true)
    #[serde(default)]
    pub diversify: Option<bool>,

    #[serde(default)]
    pub weights: Option<ScoringWeights>,
}

impl Config {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights.unwrap_or_default()
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            weights: self.weights(),
            diversify: self.diversify.unwrap_or(true),
        }
    }
}
