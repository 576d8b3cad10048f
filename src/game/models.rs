use crate::cities::models::City;
use crate::cities::CitySet;
use crate::game::consts::MAX_GUESS_COUNT;
use crate::game::errors::GuessError;
use crate::scoring::models::GuessRow;
use crate::storage::records::GameStateRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of applying an accepted guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "state")]
pub enum GuessOutcome {
    InProgress { attempts_left: usize },
    Won { guess_count: usize },
    Lost,
}

/// The guesses of one calendar day.
#[derive(Clone, Debug)]
pub struct GameState {
    date: String,
    guesses: Vec<City>,
    guessed_keys: HashSet<String>,
    status: GameStatus,
}

impl GameState {
    pub fn new(date: &str) -> Self {
        Self {
            date: date.to_string(),
            guesses: Vec::with_capacity(MAX_GUESS_COUNT),
            guessed_keys: HashSet::with_capacity(MAX_GUESS_COUNT),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuilds a stored game. Names no longer in the reference set, repeats
    /// and anything past the attempt limit are dropped.
    pub fn restore(record: GameStateRecord, cities: &CitySet) -> Self {
        let mut state = Self::new(&record.date);
        for name in &record.guesses {
            if state.guesses.len() == MAX_GUESS_COUNT {
                tracing::warn!(task = "game_restore", "Stored game has too many guesses.");
                break;
            }
            match cities.find(name) {
                Some(city) if state.guessed_keys.insert(city.key()) => {
                    state.guesses.push(city.clone());
                }
                Some(_) => {
                    tracing::warn!(task = "game_restore", city = %name, "Dropped repeated guess.");
                }
                None => {
                    tracing::warn!(task = "game_restore", city = %name, "Dropped unknown guess.");
                }
            }
        }
        state.status = match record.state {
            GameStatus::InProgress if state.guesses.len() == MAX_GUESS_COUNT => {
                tracing::warn!(task = "game_restore", "Stored game ran out of attempts.");
                GameStatus::Lost
            }
            status => status,
        };
        state
    }

    pub fn to_record(&self) -> GameStateRecord {
        GameStateRecord {
            date: self.date.clone(),
            guesses: self.guesses.iter().map(|city| city.name.clone()).collect(),
            state: self.status,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn guesses(&self) -> &[City] {
        &self.guesses
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts_left(&self) -> usize {
        MAX_GUESS_COUNT.saturating_sub(self.guesses.len())
    }

    #[cfg(test)]
    pub fn has_guessed(&self, city: &City) -> bool {
        self.guessed_keys.contains(&city.key())
    }

    pub fn is_for(&self, date: &str) -> bool {
        self.date == date
    }

    /// Appends `city` and advances the state machine. Callers must not pass a
    /// guess for a finished game.
    pub fn apply_guess(&mut self, city: &City, target: &City) -> Result<GuessOutcome, GuessError> {
        debug_assert!(!self.status.is_terminal());
        if !self.guessed_keys.insert(city.key()) {
            return Err(GuessError::DuplicateGuess(city.name.clone()));
        }
        self.guesses.push(city.clone());
        let outcome = if city.same_as(target) {
            self.status = GameStatus::Won;
            GuessOutcome::Won {
                guess_count: self.guesses.len(),
            }
        } else if self.guesses.len() >= MAX_GUESS_COUNT {
            self.status = GameStatus::Lost;
            GuessOutcome::Lost
        } else {
            GuessOutcome::InProgress {
                attempts_left: self.attempts_left(),
            }
        };
        Ok(outcome)
    }
}

/// Why a submission was ignored without touching the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IgnoreReason {
    TargetUnresolved,
    EmptyName,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Ignored(IgnoreReason),
    Accepted {
        outcome: GuessOutcome,
        /// Scored while the game was still locked.
        row: GuessRow,
        /// `false` when the game or stats could not be flushed to storage.
        persisted: bool,
    },
}

/// Read model of today's game for the UI.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub date: String,
    pub state: GameStatus,
    pub is_loading: bool,
    pub has_error: bool,
    pub attempts_left: usize,
    pub guesses: Vec<String>,
    /// Empty until the target is known.
    pub rows: Vec<GuessRow>,
    /// Revealed once the game is over.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_of_the_day: Option<String>,
}
