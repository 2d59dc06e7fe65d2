use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no brand named '{0}' in the brand store")]
    UnknownBrand(String),

    #[error("no creator with handle '{0}' in the creator store")]
    UnknownCreator(String),

    #[error("invalid brief: {}", .0.join("; "))]
    InvalidBrief(Vec<String>),
}
