pub mod diversify;
pub mod rank;

pub use diversify::{apply_diversification, diversify, DiversityOutcome, PROMOTED_FOR_DIVERSITY};
pub use rank::{match_creators, rank, MatchOptions, MatchOutcome};
