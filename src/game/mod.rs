use crate::cities::CitySet;
use crate::presentation::models::NotificationKind;
use crate::presentation::Presenter;
use crate::storage::errors::PersistenceError;
use crate::storage::interface::IRecordStorage;
use models::GameState;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub mod consts;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod models;
pub mod responses;
#[cfg(test)]
pub mod tests;

/// The single authoritative in-memory game of the player. Holding the guard
/// returned by [`GameSession::lock_for`] serializes every mutation.
pub struct GameSession {
    state: Mutex<GameState>,
    storage: Arc<dyn IRecordStorage>,
}

impl GameSession {
    pub async fn load(
        storage: Arc<dyn IRecordStorage>,
        cities: &CitySet,
        presenter: &dyn Presenter,
        today: &str,
    ) -> Self {
        let state = match storage.load_game_state().await {
            Ok(Some(record)) => GameState::restore(record, cities),
            Ok(None) => GameState::new(today),
            Err(error) => {
                tracing::error!(
                    task = "persistence",
                    record = "game_state",
                    %error,
                    "Starting today's game from scratch."
                );
                presenter.notify(
                    NotificationKind::Error,
                    "Saved game could not be read; starting over.",
                );
                GameState::new(today)
            }
        };
        Self {
            state: Mutex::new(state),
            storage,
        }
    }

    /// Locks the game of `today`, replacing a game left over from another
    /// day with a fresh one.
    pub async fn lock_for(&self, today: &str) -> MutexGuard<'_, GameState> {
        let mut state = self.state.lock().await;
        if !state.is_for(today) {
            tracing::info!(
                task = "day_rollover",
                previous_date = state.date(),
                date = today,
            );
            *state = GameState::new(today);
        }
        state
    }

    pub async fn snapshot(&self, today: &str) -> GameState {
        self.lock_for(today).await.clone()
    }

    pub async fn flush(&self, state: &GameState) -> Result<(), PersistenceError> {
        self.storage.store_game_state(&state.to_record()).await
    }
}
