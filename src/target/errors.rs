use thiserror::Error;

#[derive(Debug, Error)]
pub enum TargetResolutionError {
    #[error("seed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("seed source answered with HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("seed source answered without a number")]
    MissingNumber,

    #[error("`{0}` is not a valid date key")]
    InvalidDateKey(String),
}
