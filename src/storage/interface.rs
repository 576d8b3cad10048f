use crate::stats::models::AllTimeStats;
use crate::storage::errors::PersistenceError;
use crate::storage::records::{GameStateRecord, NumberOfTheDay};
use async_trait::async_trait;

/// The three independent durable records of a player.
pub trait IRecordStorage: NumberOfTheDayRepo + GameStateRepo + AllTimeStatsRepo {}

impl<T> IRecordStorage for T where T: NumberOfTheDayRepo + GameStateRepo + AllTimeStatsRepo {}

/// Reads return the default record when nothing was stored yet.
#[async_trait]
pub trait NumberOfTheDayRepo: Send + Sync {
    async fn load_number_of_the_day(&self) -> Result<NumberOfTheDay, PersistenceError>;

    async fn store_number_of_the_day(&self, record: &NumberOfTheDay)
        -> Result<(), PersistenceError>;
}

#[async_trait]
pub trait GameStateRepo: Send + Sync {
    async fn load_game_state(&self) -> Result<Option<GameStateRecord>, PersistenceError>;

    async fn store_game_state(&self, record: &GameStateRecord) -> Result<(), PersistenceError>;
}

#[async_trait]
pub trait AllTimeStatsRepo: Send + Sync {
    async fn load_all_time_stats(&self) -> Result<AllTimeStats, PersistenceError>;

    async fn store_all_time_stats(&self, stats: &AllTimeStats) -> Result<(), PersistenceError>;
}
