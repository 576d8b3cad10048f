use crate::cities::models::City;
use crate::cities::CitySet;
use crate::presentation::models::NotificationKind;
use crate::presentation::Presenter;
use crate::storage::interface::IRecordStorage;
use crate::storage::records::NumberOfTheDay;
use errors::TargetResolutionError;
use models::TargetState;
use seed::SeedSource;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

pub mod errors;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod seed;

/// Resolves the city of the day at most once per day.
pub struct DailyTargetSelector {
    state: RwLock<TargetState>,
    resolution: Mutex<()>,
    seed_source: Arc<dyn SeedSource>,
    storage: Arc<dyn IRecordStorage>,
    cities: Arc<CitySet>,
    presenter: Arc<dyn Presenter>,
}

impl DailyTargetSelector {
    pub fn new(
        seed_source: Arc<dyn SeedSource>,
        storage: Arc<dyn IRecordStorage>,
        cities: Arc<CitySet>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            state: RwLock::new(TargetState::Loading),
            resolution: Mutex::new(()),
            seed_source,
            storage,
            cities,
            presenter,
        }
    }

    pub async fn state(&self) -> TargetState {
        self.state.read().await.clone()
    }

    pub async fn city_of_the_day(&self, today: &str) -> Option<City> {
        self.state.read().await.city_for(today).cloned()
    }

    /// Returns the cached target when it is already known for `today`;
    /// otherwise derives it from the stored number of the day, asking the
    /// seed source only when that number is missing or stale.
    pub async fn resolve(&self, today: &str) -> Result<City, TargetResolutionError> {
        if let Some(city) = self.city_of_the_day(today).await {
            return Ok(city);
        }
        let _resolution_guard = self.resolution.lock().await;
        // Whoever held the lock before us may have finished the job.
        if let Some(city) = self.city_of_the_day(today).await {
            return Ok(city);
        }
        *self.state.write().await = TargetState::Loading;

        let cached = match self.storage.load_number_of_the_day().await {
            Ok(cached) => cached,
            Err(error) => {
                tracing::warn!(
                    task = "target_resolution",
                    %error,
                    "Could not read the cached number of the day."
                );
                NumberOfTheDay::default()
            }
        };
        let number = if cached.is_fetched_for(today) {
            cached.number
        } else {
            match self.seed_source.number_of_the_day(today).await {
                Ok(number) => {
                    self.remember(number, today).await;
                    number
                }
                Err(error) => {
                    tracing::error!(
                        task = "target_resolution",
                        date = today,
                        %error,
                        "Failed to fetch the number of the day."
                    );
                    *self.state.write().await = TargetState::Failed {
                        date: today.to_string(),
                        reason: error.to_string(),
                    };
                    return Err(error);
                }
            }
        };

        let city = self.cities.for_number(number).clone();
        tracing::info!(task = "target_resolution", date = today, "Resolved the city of the day.");
        *self.state.write().await = TargetState::Resolved {
            date: today.to_string(),
            city: city.clone(),
        };
        Ok(city)
    }

    async fn remember(&self, number: i64, today: &str) {
        let record = NumberOfTheDay {
            number,
            date_string: today.to_string(),
        };
        if let Err(error) = self.storage.store_number_of_the_day(&record).await {
            tracing::error!(
                task = "persistence",
                record = "number_of_the_day",
                %error,
            );
            self.presenter.notify(
                NotificationKind::Error,
                "Today's city could not be saved; it will be fetched again after a restart."
            );
        }
    }
}
