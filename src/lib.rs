pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod store;

pub use error::MatchError;
pub use model::{Brand, BrandBrief, ConstraintValue, CreatorProfile};
pub use ranking::{match_creators, MatchOptions, MatchOutcome};
pub use scoring::{aggregate, ScoredMatch, ScoringWeights};
