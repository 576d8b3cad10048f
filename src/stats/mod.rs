use crate::presentation::models::NotificationKind;
use crate::presentation::Presenter;
use crate::storage::errors::PersistenceError;
use crate::storage::interface::IRecordStorage;
use models::AllTimeStats;
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod handlers;
pub mod models;
pub mod responses;

pub struct StatsStore {
    current: Mutex<AllTimeStats>,
    storage: Arc<dyn IRecordStorage>,
}

impl StatsStore {
    /// Reads the stored stats, falling back to fresh ones. A player who never
    /// finished a game gets onboarded.
    pub async fn load(storage: Arc<dyn IRecordStorage>, presenter: &dyn Presenter) -> Self {
        let stats = match storage.load_all_time_stats().await {
            Ok(stats) => stats,
            Err(error) => {
                tracing::error!(
                    task = "persistence",
                    record = "all_time_stats",
                    %error,
                    "Falling back to empty stats."
                );
                presenter.notify(NotificationKind::Error, "Saved statistics could not be read.");
                AllTimeStats::default()
            }
        };
        if stats.is_first_time_player() {
            presenter.onboard();
        }
        Self {
            current: Mutex::new(stats),
            storage,
        }
    }

    pub async fn read(&self) -> AllTimeStats {
        self.current.lock().await.clone()
    }

    /// Applies `update` and flushes the result under one lock, so concurrent
    /// updates never overwrite each other. The in-memory stats keep the
    /// update even when the flush fails.
    pub async fn update<F>(&self, update: F) -> Result<AllTimeStats, PersistenceError>
    where
        F: FnOnce(AllTimeStats) -> AllTimeStats,
    {
        let mut current = self.current.lock().await;
        let updated = update(current.clone());
        *current = updated.clone();
        self.storage.store_all_time_stats(&updated).await?;
        Ok(updated)
    }
}
