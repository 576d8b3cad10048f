use crate::game::models::GameStatus;
use serde::{Deserialize, Serialize};

/// Cached seed of the daily selection. `number == -1` means nothing was
/// fetched yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberOfTheDay {
    pub number: i64,
    pub date_string: String,
}

impl NumberOfTheDay {
    pub const NOT_FETCHED: i64 = -1;

    pub fn is_fetched_for(&self, date_key: &str) -> bool {
        self.number != Self::NOT_FETCHED && self.date_string == date_key
    }
}

impl Default for NumberOfTheDay {
    fn default() -> Self {
        Self {
            number: Self::NOT_FETCHED,
            date_string: String::new(),
        }
    }
}

/// On-disk shape of a game: guesses are kept by city name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateRecord {
    pub date: String,
    pub guesses: Vec<String>,
    pub state: GameStatus,
}
