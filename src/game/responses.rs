use crate::game::errors::GuessErrorCode;
use crate::game::models::{GuessOutcome, IgnoreReason};
use crate::scoring::models::GuessRow;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GuessRequest {
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<GuessErrorCode>,
    /// Set when the guess was ignored without touching the game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored: Option<IgnoreReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<GuessOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<GuessRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
}

impl SubmitGuessResponse {
    pub fn rejected(error_code: GuessErrorCode) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            ignored: None,
            outcome: None,
            row: None,
            persisted: None,
        }
    }

    pub fn ignored(reason: IgnoreReason) -> Self {
        Self {
            error: false,
            error_code: None,
            ignored: Some(reason),
            outcome: None,
            row: None,
            persisted: None,
        }
    }

    pub fn accepted(outcome: GuessOutcome, row: GuessRow, persisted: bool) -> Self {
        Self {
            error: false,
            error_code: None,
            ignored: None,
            outcome: Some(outcome),
            row: Some(row),
            persisted: Some(persisted),
        }
    }
}
