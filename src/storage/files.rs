use crate::stats::models::AllTimeStats;
use crate::storage::consts::{ALL_TIME_STATS_FILE, GAME_STATE_FILE, NUMBER_OF_THE_DAY_FILE};
use crate::storage::errors::PersistenceError;
use crate::storage::interface::{AllTimeStatsRepo, GameStateRepo, NumberOfTheDayRepo};
use crate::storage::records::{GameStateRecord, NumberOfTheDay};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;

/// One pretty-printed JSON file per record inside `dir`.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    async fn read_record<T: DeserializeOwned>(
        &self,
        file_name: &str,
    ) -> Result<Option<T>, PersistenceError> {
        let raw = match tokio::fs::read(self.dir.join(file_name)).await {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    /// Writes next to the target and renames over it, so a crash mid-write
    /// never leaves a truncated record behind.
    async fn write_record<T: Serialize + Sync>(
        &self,
        file_name: &str,
        record: &T,
    ) -> Result<(), PersistenceError> {
        let body = serde_json::to_vec_pretty(record)?;
        let target = self.dir.join(file_name);
        let staging = self.dir.join(format!("{file_name}.tmp"));
        tokio::fs::write(&staging, body).await?;
        tokio::fs::rename(&staging, &target).await?;
        Ok(())
    }
}

#[async_trait]
impl NumberOfTheDayRepo for JsonFileStorage {
    async fn load_number_of_the_day(&self) -> Result<NumberOfTheDay, PersistenceError> {
        Ok(self
            .read_record(NUMBER_OF_THE_DAY_FILE)
            .await?
            .unwrap_or_default())
    }

    async fn store_number_of_the_day(
        &self,
        record: &NumberOfTheDay,
    ) -> Result<(), PersistenceError> {
        self.write_record(NUMBER_OF_THE_DAY_FILE, record).await
    }
}

#[async_trait]
impl GameStateRepo for JsonFileStorage {
    async fn load_game_state(&self) -> Result<Option<GameStateRecord>, PersistenceError> {
        self.read_record(GAME_STATE_FILE).await
    }

    async fn store_game_state(&self, record: &GameStateRecord) -> Result<(), PersistenceError> {
        self.write_record(GAME_STATE_FILE, record).await
    }
}

#[async_trait]
impl AllTimeStatsRepo for JsonFileStorage {
    async fn load_all_time_stats(&self) -> Result<AllTimeStats, PersistenceError> {
        Ok(self
            .read_record(ALL_TIME_STATS_FILE)
            .await?
            .unwrap_or_default())
    }

    async fn store_all_time_stats(&self, stats: &AllTimeStats) -> Result<(), PersistenceError> {
        self.write_record(ALL_TIME_STATS_FILE, stats).await
    }
}
