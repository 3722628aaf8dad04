use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    #[error("Insufficient candidates: need at least 2, got {found}")]
    InsufficientCandidates { found: usize },

    #[error("Too many candidates: at most {max} can be compared")]
    TooManyCandidates { max: usize },

    #[error("Duplicate candidate: {0}")]
    DuplicateCandidate(String),

    #[error("Unknown candidate: {0}")]
    UnknownCandidate(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),

    #[error("Winner index {index} is out of range for {len} results")]
    WinnerOutOfRange { index: usize, len: usize },

    #[error("Data source error for {symbol}: {message}")]
    DataSource { symbol: String, message: String },
}
