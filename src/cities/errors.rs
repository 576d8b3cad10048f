use thiserror::Error;

#[derive(Debug, Error)]
pub enum CitiesError {
    #[error("failed to read the cities file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} of the cities file is not a valid city: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("city `{0}` is listed more than once")]
    Duplicate(String),

    #[error("city `{0}` lies outside the reference coordinate domain")]
    OutOfDomain(String),

    #[error("the distance between `{0}` and `{1}` exceeds the maximum distance")]
    TooFarApart(String, String),

    #[error("the cities file contains no cities")]
    Empty,
}
