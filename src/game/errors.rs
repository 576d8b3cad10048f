use serde::Serialize;
use thiserror::Error;

/// Rejections of a submitted guess. Neither mutates the game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("`{0}` is not in the list of cities")]
    UnknownCity(String),

    #[error("`{0}` has already been guessed")]
    DuplicateGuess(String),
}

impl GuessError {
    pub fn code(&self) -> GuessErrorCode {
        match self {
            GuessError::UnknownCity(_) => GuessErrorCode::UnknownCity,
            GuessError::DuplicateGuess(_) => GuessErrorCode::DuplicateGuess,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GuessErrorCode {
    UnknownCity,
    DuplicateGuess,
}
