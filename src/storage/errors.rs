use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored record is malformed: {0}")]
    Serialization(#[from] serde_json::Error),
}
