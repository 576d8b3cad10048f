use crate::calendar::{Clock, LocalClock};
use crate::cities::models::City;
use crate::cities::CitySet;
use crate::cli::Args;
use crate::game::errors::GuessError;
use crate::game::messages;
use crate::game::models::{GameView, GuessOutcome, IgnoreReason, Submission};
use crate::game::GameSession;
use crate::geo::directions::Compass;
use crate::presentation::models::NotificationKind;
use crate::presentation::{EventFeed, Presenter};
use crate::scoring;
use crate::stats::models::AllTimeStats;
use crate::stats::StatsStore;
use crate::storage::files::JsonFileStorage;
use crate::storage::interface::IRecordStorage;
use crate::storage::memory::InMemoryRecordStorage;
use crate::target::errors::TargetResolutionError;
use crate::target::seed::{RemoteSeedSource, SeedSource, SignedSeedSource};
use crate::target::DailyTargetSelector;
use anyhow::Context;
use deferred::DeferredTasks;
use std::sync::Arc;
use std::time::Duration;

pub mod deferred;

/// Everything [`AppContext::new`] needs from the outside world.
pub struct Dependencies {
    pub cities: Arc<CitySet>,
    pub storage: Arc<dyn IRecordStorage>,
    pub seed_source: Arc<dyn SeedSource>,
    pub signed_seed: SignedSeedSource,
    pub clock: Arc<dyn Clock>,
    pub compass: Compass,
    pub terminal_effects_delay: Duration,
}

/// The player's session: today's target, game and all-time stats, plus the
/// presentation feed they report to.
#[derive(Clone)]
pub struct AppContext {
    pub cities: Arc<CitySet>,
    pub clock: Arc<dyn Clock>,
    pub target: Arc<DailyTargetSelector>,
    pub game: Arc<GameSession>,
    pub stats: Arc<StatsStore>,
    pub events: Arc<EventFeed>,
    pub presenter: Arc<dyn Presenter>,
    pub signed_seed: Arc<SignedSeedSource>,
    pub compass: Compass,
    pub deferred: DeferredTasks,
    pub terminal_effects_delay: Duration,
}

pub async fn init(args: &Args) -> anyhow::Result<AppContext> {
    let cities = CitySet::load(&args.cities)
        .with_context(|| format!("Failed to load cities from {}.", args.cities.display()))?;
    let storage: Arc<dyn IRecordStorage> = if args.in_memory {
        tracing::warn!("Using in-memory storage; progress is lost on restart.");
        Arc::new(InMemoryRecordStorage::default())
    } else {
        Arc::new(
            JsonFileStorage::open(&args.data_dir)
                .await
                .with_context(|| format!("Failed to open {}.", args.data_dir.display()))?,
        )
    };
    let signed_seed = SignedSeedSource::new(&args.seed_secret)
        .map_err(|_| anyhow::anyhow!("Invalid seed secret."))?;
    let seed_source: Arc<dyn SeedSource> = match &args.seed_url {
        Some(url) => {
            tracing::info!(seed_url = %url, "Fetching numbers of the day remotely.");
            Arc::new(RemoteSeedSource::new(url.clone()))
        }
        None => Arc::new(signed_seed.clone()),
    };
    let compass = Compass::with_points(args.compass_points)
        .context("Compass must have 8 or 16 points.")?;
    let app_context = AppContext::new(Dependencies {
        cities: Arc::new(cities),
        storage,
        seed_source,
        signed_seed,
        clock: Arc::new(LocalClock),
        compass,
        terminal_effects_delay: Duration::from_millis(args.terminal_effects_delay_ms),
    })
    .await;
    tracing::info!(
        cities = app_context.cities.len(),
        compass_points = app_context.compass.points(),
        "Initialized application context."
    );
    Ok(app_context)
}

impl AppContext {
    pub async fn new(dependencies: Dependencies) -> Self {
        let Dependencies {
            cities,
            storage,
            seed_source,
            signed_seed,
            clock,
            compass,
            terminal_effects_delay,
        } = dependencies;
        let events = Arc::new(EventFeed::default());
        let presenter: Arc<dyn Presenter> = events.clone();
        let today = clock.today_key();
        let stats = StatsStore::load(storage.clone(), presenter.as_ref()).await;
        let game = GameSession::load(storage.clone(), &cities, presenter.as_ref(), &today).await;
        let target =
            DailyTargetSelector::new(seed_source, storage, cities.clone(), presenter.clone());
        Self {
            cities,
            clock,
            target: Arc::new(target),
            game: Arc::new(game),
            stats: Arc::new(stats),
            events,
            presenter,
            signed_seed: Arc::new(signed_seed),
            compass,
            deferred: DeferredTasks::default(),
            terminal_effects_delay,
        }
    }

    pub async fn resolve_target(&self) -> Result<(), TargetResolutionError> {
        let today = self.clock.today_key();
        self.target.resolve(&today).await.map(|_| ())
    }

    /// Resolves today's target on a background task; errors end up in the
    /// target state.
    pub fn spawn_target_resolution(&self) {
        let app_context = self.clone();
        tokio::spawn(async move {
            let _ = app_context.resolve_target().await;
        });
    }

    /// Evaluates a guess against today's target. Rejections leave the game
    /// untouched; accepted guesses are flushed before this returns.
    pub async fn submit_guess(&self, name: &str) -> Result<Submission, GuessError> {
        let today = self.clock.today_key();
        let name = name.trim();
        let Some(target) = self.target_for_submission(&today).await else {
            return Ok(Submission::Ignored(IgnoreReason::TargetUnresolved));
        };
        if name.is_empty() {
            return Ok(Submission::Ignored(IgnoreReason::EmptyName));
        }

        let mut game = self.game.lock_for(&today).await;
        if game.status().is_terminal() {
            return Ok(Submission::Ignored(IgnoreReason::GameOver));
        }
        let Some(city) = self.cities.find(name) else {
            self.presenter
                .notify(NotificationKind::Error, messages::UNKNOWN_CITY);
            return Err(GuessError::UnknownCity(name.to_string()));
        };
        let outcome = game.apply_guess(city, &target).inspect_err(|_| {
            self.presenter
                .notify(NotificationKind::Error, messages::DUPLICATE_GUESS);
        })?;
        tracing::info!(
            task = "guess",
            date = %today,
            attempt = game.guesses().len(),
            outcome = ?outcome,
        );

        let row = scoring::score_guess(city, &target, &self.compass);

        let mut persisted = match self.game.flush(&game).await {
            Ok(()) => true,
            Err(error) => {
                tracing::error!(task = "persistence", record = "game_state", %error,);
                false
            }
        };
        let stats_update = match outcome {
            GuessOutcome::Won { guess_count } => {
                self.presenter
                    .notify(NotificationKind::Success, messages::win_message(guess_count));
                self.schedule_terminal_effects(true);
                Some(self.stats.update(|stats| stats.with_win(guess_count)).await)
            }
            GuessOutcome::Lost => {
                self.presenter.notify(
                    NotificationKind::Error,
                    &messages::loss_message(&target.name),
                );
                self.schedule_terminal_effects(false);
                Some(self.stats.update(AllTimeStats::with_loss).await)
            }
            GuessOutcome::InProgress { .. } => None,
        };
        if let Some(Err(error)) = stats_update {
            tracing::error!(task = "persistence", record = "all_time_stats", %error,);
            persisted = false;
        }
        if !persisted {
            self.presenter
                .notify(NotificationKind::Error, messages::PROGRESS_NOT_SAVED);
        }
        Ok(Submission::Accepted {
            outcome,
            row,
            persisted,
        })
    }

    /// Today's target. A target left over from a previous day is replaced
    /// inline, so a rollover never needs a prior read to unblock guessing.
    async fn target_for_submission(&self, today: &str) -> Option<City> {
        if let Some(target) = self.target.city_of_the_day(today).await {
            return Some(target);
        }
        if !self.target.state().await.is_stale(today) {
            return None;
        }
        match self.target.resolve(today).await {
            Ok(target) => Some(target),
            Err(error) => {
                tracing::warn!(
                    task = "guess",
                    date = today,
                    %error,
                    "Ignoring a guess while today's city is unknown."
                );
                None
            }
        }
    }

    fn schedule_terminal_effects(&self, won: bool) {
        let presenter = self.presenter.clone();
        self.deferred
            .schedule(self.terminal_effects_delay, async move {
                if won {
                    presenter.celebrate();
                }
                presenter.show_summary();
            });
    }

    pub async fn game_view(&self) -> GameView {
        let today = self.clock.today_key();
        let target_state = self.target.state().await;
        if target_state.is_stale(&today) {
            self.spawn_target_resolution();
        }
        let game = self.game.snapshot(&today).await;
        let target = target_state.city_for(&today);
        let rows = target
            .map(|target| scoring::score_guesses(game.guesses(), target, &self.compass))
            .unwrap_or_default();
        let city_of_the_day = target
            .filter(|_| game.status().is_terminal())
            .map(|target| target.name.clone());
        GameView {
            date: today.clone(),
            state: game.status(),
            is_loading: target_state.is_loading(&today),
            has_error: target_state.has_error(&today),
            attempts_left: game.attempts_left(),
            guesses: game.guesses().iter().map(|city| city.name.clone()).collect(),
            rows,
            city_of_the_day,
        }
    }

    pub async fn all_time_stats(&self) -> AllTimeStats {
        self.stats.read().await
    }

    /// Drops pending deferred effects.
    pub fn shutdown(&self) {
        tracing::info!(pending = self.deferred.pending(), "Dropping deferred effects.");
        self.deferred.abort_all();
    }
}
