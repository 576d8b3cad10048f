use crate::stats::models::AllTimeStats;
use crate::storage::errors::PersistenceError;
use crate::storage::interface::{AllTimeStatsRepo, GameStateRepo, NumberOfTheDayRepo};
use crate::storage::records::{GameStateRecord, NumberOfTheDay};
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
struct Records {
    number_of_the_day: Option<NumberOfTheDay>,
    game_state: Option<GameStateRecord>,
    all_time_stats: Option<AllTimeStats>,
}

/// Process-local storage; nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryRecordStorage {
    records: Arc<RwLock<Records>>,
    fail_writes: Arc<AtomicBool>,
    writes: Arc<AtomicUsize>,
}

impl InMemoryRecordStorage {
    /// Makes every subsequent write fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes, across all records.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::Other, "writes are disabled").into());
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl NumberOfTheDayRepo for InMemoryRecordStorage {
    async fn load_number_of_the_day(&self) -> Result<NumberOfTheDay, PersistenceError> {
        Ok(self
            .records
            .read()
            .await
            .number_of_the_day
            .clone()
            .unwrap_or_default())
    }

    async fn store_number_of_the_day(
        &self,
        record: &NumberOfTheDay,
    ) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.records.write().await.number_of_the_day = Some(record.clone());
        Ok(())
    }
}

#[async_trait]
impl GameStateRepo for InMemoryRecordStorage {
    async fn load_game_state(&self) -> Result<Option<GameStateRecord>, PersistenceError> {
        Ok(self.records.read().await.game_state.clone())
    }

    async fn store_game_state(&self, record: &GameStateRecord) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.records.write().await.game_state = Some(record.clone());
        Ok(())
    }
}

#[async_trait]
impl AllTimeStatsRepo for InMemoryRecordStorage {
    async fn load_all_time_stats(&self) -> Result<AllTimeStats, PersistenceError> {
        Ok(self
            .records
            .read()
            .await
            .all_time_stats
            .clone()
            .unwrap_or_default())
    }

    async fn store_all_time_stats(&self, stats: &AllTimeStats) -> Result<(), PersistenceError> {
        self.check_writable()?;
        self.records.write().await.all_time_stats = Some(stats.clone());
        Ok(())
    }
}
