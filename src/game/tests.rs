use crate::app_context::tests::{
    event_kinds, resolved_test_context, test_context, test_context_with, TODAY,
};
use crate::cities::tests::bundled_cities;
use crate::game::consts::{MAX_GUESS_COUNT, TERMINAL_EFFECTS_DELAY};
use crate::game::errors::GuessError;
use crate::game::messages;
use crate::game::models::{GameState, GameStatus, GuessOutcome, IgnoreReason, Submission};
use crate::http::tests::{resolved_test_app, test_app};
use crate::presentation::models::{NotificationKind, PresentationEventKind};
use crate::storage::interface::GameStateRepo;
use crate::storage::memory::InMemoryRecordStorage;
use crate::storage::records::GameStateRecord;
use serde_json::json;
use std::time::Duration;

/// Wrong guesses for a Jakarta target.
const MISSES: [&str; MAX_GUESS_COUNT] = [
    "Surabaya",
    "Bandung",
    "Medan",
    "Semarang",
    "Makassar",
    "Palembang",
];

fn notification(kind: NotificationKind, message: &str) -> PresentationEventKind {
    PresentationEventKind::Notification {
        kind,
        message: message.to_string(),
    }
}

/// Outcome and persistence flag of an accepted guess.
fn accepted(submission: Submission) -> (GuessOutcome, bool) {
    match submission {
        Submission::Accepted { outcome, persisted, .. } => (outcome, persisted),
        other => panic!("Guess was not accepted: {other:?}"),
    }
}

fn misses_record(state: GameStatus) -> GameStateRecord {
    GameStateRecord {
        date: String::from(TODAY),
        guesses: MISSES.iter().map(|name| name.to_string()).collect(),
        state,
    }
}

#[test]
fn test_new_game_has_every_attempt_left() {
    let game = GameState::new(TODAY);

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.attempts_left(), MAX_GUESS_COUNT);
    assert!(game.guesses().is_empty());
    assert!(game.is_for(TODAY));
}

#[test]
fn test_state_machine_wins_on_the_target() {
    let cities = bundled_cities();
    let target = cities.find("Jakarta").unwrap();
    let mut game = GameState::new(TODAY);

    let first = game
        .apply_guess(cities.find("Surabaya").unwrap(), target)
        .unwrap();
    let second = game.apply_guess(target, target).unwrap();

    assert_eq!(first, GuessOutcome::InProgress { attempts_left: 5 });
    assert_eq!(second, GuessOutcome::Won { guess_count: 2 });
    assert_eq!(game.status(), GameStatus::Won);
    assert!(game.has_guessed(target));
}

#[test]
fn test_state_machine_loses_after_the_last_miss() {
    let cities = bundled_cities();
    let target = cities.find("Jakarta").unwrap();
    let mut game = GameState::new(TODAY);

    let outcomes = MISSES
        .iter()
        .map(|name| game.apply_guess(cities.find(name).unwrap(), target).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(outcomes[4], GuessOutcome::InProgress { attempts_left: 1 });
    assert_eq!(outcomes[5], GuessOutcome::Lost);
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.attempts_left(), 0);
}

#[test]
fn test_state_machine_rejects_repeats() {
    let cities = bundled_cities();
    let target = cities.find("Jakarta").unwrap();
    let surabaya = cities.find("Surabaya").unwrap();
    let mut game = GameState::new(TODAY);
    game.apply_guess(surabaya, target).unwrap();

    let repeat = game.apply_guess(surabaya, target);

    assert_eq!(
        repeat,
        Err(GuessError::DuplicateGuess(String::from("Surabaya")))
    );
    assert_eq!(game.guesses().len(), 1);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_restore_drops_unknown_and_repeated_names() {
    let cities = bundled_cities();
    let record = GameStateRecord {
        date: String::from(TODAY),
        guesses: vec![
            String::from("Surabaya"),
            String::from("Atlantis"),
            String::from("surabaya"),
            String::from("Bandung"),
        ],
        state: GameStatus::InProgress,
    };

    let game = GameState::restore(record, &cities);

    let names = game.to_record().guesses;
    assert_eq!(names, vec![String::from("Surabaya"), String::from("Bandung")]);
    assert_eq!(game.attempts_left(), 4);
}

#[test]
fn test_restore_ends_a_game_out_of_attempts() {
    let game = GameState::restore(misses_record(GameStatus::InProgress), &bundled_cities());

    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.attempts_left(), 0);
    assert_eq!(game.guesses().len(), MAX_GUESS_COUNT);
}

#[tokio::test]
async fn test_exhausted_stored_game_accepts_no_more_guesses() {
    let storage = InMemoryRecordStorage::default();
    storage
        .store_game_state(&misses_record(GameStatus::InProgress))
        .await
        .unwrap();
    let context = test_context_with(storage, Duration::ZERO).await;
    let app_context = &context.app_context;
    app_context.resolve_target().await.unwrap();

    let submission = app_context.submit_guess("Bogor").await.unwrap();

    assert_eq!(submission, Submission::Ignored(IgnoreReason::GameOver));
    let view = app_context.game_view().await;
    assert_eq!(view.state, GameStatus::Lost);
    assert_eq!(view.attempts_left, 0);
    assert_eq!(view.guesses.len(), MAX_GUESS_COUNT);
    assert_eq!(app_context.all_time_stats().await.play_count, 0);
}

#[tokio::test]
async fn test_stored_game_is_resumed() {
    let storage = InMemoryRecordStorage::default();
    storage
        .store_game_state(&GameStateRecord {
            date: String::from(TODAY),
            guesses: vec![String::from("Surabaya")],
            state: GameStatus::InProgress,
        })
        .await
        .unwrap();
    let context = test_context_with(storage, Duration::ZERO).await;
    context.app_context.resolve_target().await.unwrap();

    let view = context.app_context.game_view().await;

    assert_eq!(view.guesses, vec![String::from("Surabaya")]);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.attempts_left, 5);
}

#[tokio::test]
async fn test_second_guess_wins() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;

    let first = app_context.submit_guess("Surabaya").await.unwrap();
    let second = app_context.submit_guess("Jakarta").await.unwrap();

    assert_eq!(
        accepted(first),
        (GuessOutcome::InProgress { attempts_left: 5 }, true)
    );
    assert_eq!(
        accepted(second),
        (GuessOutcome::Won { guess_count: 2 }, true)
    );
    let stats = app_context.all_time_stats().await;
    assert_eq!(stats.play_count, 1);
    assert_eq!(stats.win_count, 1);
    assert_eq!(stats.current_streak, 1);
    assert_eq!(stats.longest_streak, 1);
    assert_eq!(stats.guess_distribution[1], (2, 1));
    assert_eq!(stats.distributed_wins(), 1);

    let view = app_context.game_view().await;
    assert_eq!(view.state, GameStatus::Won);
    assert_eq!(view.city_of_the_day.as_deref(), Some("Jakarta"));
    assert!(view.rows[1].is_target);
    assert!(event_kinds(app_context).contains(&notification(
        NotificationKind::Success,
        messages::win_message(2)
    )));
    assert_eq!(
        context.storage.load_game_state().await.unwrap().unwrap().state,
        GameStatus::Won
    );
}

#[tokio::test]
async fn test_guess_names_are_trimmed_and_case_insensitive() {
    let context = resolved_test_context().await;

    let submission = context.app_context.submit_guess("  jAkArTa ").await.unwrap();

    assert_eq!(
        accepted(submission),
        (GuessOutcome::Won { guess_count: 1 }, true)
    );
}

#[tokio::test]
async fn test_six_misses_lose_the_game() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;

    let mut last = None;
    for name in MISSES {
        last = Some(app_context.submit_guess(name).await.unwrap());
    }

    assert_eq!(last.map(accepted), Some((GuessOutcome::Lost, true)));
    let stats = app_context.all_time_stats().await;
    assert_eq!(stats.play_count, 1);
    assert_eq!(stats.win_count, 0);
    assert_eq!(stats.current_streak, 0);
    assert_eq!(stats.distributed_wins(), 0);
    assert!(event_kinds(app_context).contains(&notification(
        NotificationKind::Error,
        &messages::loss_message("Jakarta")
    )));
    assert_eq!(
        app_context.game_view().await.city_of_the_day.as_deref(),
        Some("Jakarta")
    );
}

#[tokio::test]
async fn test_finished_game_ignores_further_guesses() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;
    app_context.submit_guess("Jakarta").await.unwrap();
    let writes = context.storage.write_count();

    let submission = app_context.submit_guess("Surabaya").await.unwrap();

    assert_eq!(submission, Submission::Ignored(IgnoreReason::GameOver));
    assert_eq!(app_context.game_view().await.guesses.len(), 1);
    assert_eq!(app_context.all_time_stats().await.play_count, 1);
    assert_eq!(context.storage.write_count(), writes);
}

#[tokio::test]
async fn test_repeated_guess_is_rejected() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;
    app_context.submit_guess("Surabaya").await.unwrap();
    app_context.submit_guess("Bandung").await.unwrap();

    let third = app_context.submit_guess("SURABAYA").await;

    assert_eq!(
        third,
        Err(GuessError::DuplicateGuess(String::from("Surabaya")))
    );
    let view = app_context.game_view().await;
    assert_eq!(view.guesses.len(), 2);
    assert_eq!(view.attempts_left, 4);
    assert!(event_kinds(app_context)
        .contains(&notification(NotificationKind::Error, messages::DUPLICATE_GUESS)));
}

#[tokio::test]
async fn test_unknown_city_is_rejected() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;

    let submission = app_context.submit_guess("Atlantis").await;

    assert_eq!(
        submission,
        Err(GuessError::UnknownCity(String::from("Atlantis")))
    );
    assert!(app_context.game_view().await.guesses.is_empty());
    assert!(event_kinds(app_context)
        .contains(&notification(NotificationKind::Error, messages::UNKNOWN_CITY)));
}

#[tokio::test]
async fn test_guesses_before_resolution_are_ignored() {
    let context = test_context().await;

    let submission = context.app_context.submit_guess("Jakarta").await.unwrap();

    assert_eq!(
        submission,
        Submission::Ignored(IgnoreReason::TargetUnresolved)
    );
    assert!(context.app_context.game_view().await.guesses.is_empty());
}

#[tokio::test]
async fn test_blank_guesses_are_ignored() {
    let context = resolved_test_context().await;

    let submission = context.app_context.submit_guess("   ").await.unwrap();

    assert_eq!(submission, Submission::Ignored(IgnoreReason::EmptyName));
    assert_eq!(context.storage.write_count(), 1);
}

#[tokio::test]
async fn test_unsaved_progress_is_kept_in_memory() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;
    context.storage.fail_writes(true);

    let submission = app_context.submit_guess("Jakarta").await.unwrap();

    assert_eq!(
        accepted(submission),
        (GuessOutcome::Won { guess_count: 1 }, false)
    );
    assert_eq!(app_context.game_view().await.state, GameStatus::Won);
    assert_eq!(app_context.all_time_stats().await.win_count, 1);
    assert!(event_kinds(app_context).contains(&notification(
        NotificationKind::Error,
        messages::PROGRESS_NOT_SAVED
    )));
}

#[tokio::test]
async fn test_new_day_starts_a_new_game() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;
    app_context.submit_guess("Jakarta").await.unwrap();

    context.clock.advance_one_day();
    context.seed.set_number(1);
    let fresh = app_context.game_view().await;
    app_context.resolve_target().await.unwrap();
    let submission = app_context.submit_guess("Surabaya").await.unwrap();

    assert_eq!(fresh.date, "2024-03-08");
    assert_eq!(fresh.state, GameStatus::InProgress);
    assert!(fresh.guesses.is_empty());
    assert_eq!(
        accepted(submission),
        (GuessOutcome::Won { guess_count: 1 }, true)
    );
    let stats = app_context.all_time_stats().await;
    assert_eq!(stats.current_streak, 2);
    assert_eq!(stats.longest_streak, 2);
    assert_eq!(stats.guess_distribution[0], (1, 2));
}

#[tokio::test]
async fn test_first_guess_of_a_new_day_resolves_its_city() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;
    app_context.submit_guess("Jakarta").await.unwrap();

    context.clock.advance_one_day();
    context.seed.set_number(1);
    let submission = app_context.submit_guess("Surabaya").await.unwrap();

    assert_eq!(
        accepted(submission),
        (GuessOutcome::Won { guess_count: 1 }, true)
    );
    assert_eq!(context.seed.calls(), 2);
    assert_eq!(app_context.game_view().await.date, "2024-03-08");
}

#[tokio::test]
async fn test_new_day_guess_is_ignored_while_its_city_is_unknown() {
    let context = resolved_test_context().await;
    let app_context = &context.app_context;

    context.clock.advance_one_day();
    context.seed.set_failing(true);
    let submission = app_context.submit_guess("Surabaya").await.unwrap();

    assert_eq!(
        submission,
        Submission::Ignored(IgnoreReason::TargetUnresolved)
    );
    assert!(app_context.target.state().await.has_error("2024-03-08"));
}

#[tokio::test]
async fn test_accepted_guess_carries_its_row() {
    let context = resolved_test_context().await;

    let submission = context.app_context.submit_guess("Surabaya").await.unwrap();

    let Submission::Accepted { row, .. } = submission else {
        panic!("Guess was not accepted.");
    };
    assert_eq!(row.name, "Surabaya");
    assert_eq!(row.direction, "west");
    assert!(!row.is_target);
}

#[tokio::test(start_paused = true)]
async fn test_win_effects_follow_after_the_delay() {
    let context = test_context_with(InMemoryRecordStorage::default(), TERMINAL_EFFECTS_DELAY).await;
    let app_context = &context.app_context;
    app_context.resolve_target().await.unwrap();

    app_context.submit_guess("Jakarta").await.unwrap();

    assert!(!event_kinds(app_context).contains(&PresentationEventKind::Celebrate));
    tokio::time::sleep(TERMINAL_EFFECTS_DELAY + Duration::from_millis(1)).await;
    let events = event_kinds(app_context);
    let tail = &events[events.len() - 2..];
    assert_eq!(
        tail,
        [
            PresentationEventKind::Celebrate,
            PresentationEventKind::ShowSummary
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_loss_effects_skip_the_celebration() {
    let context = test_context_with(InMemoryRecordStorage::default(), TERMINAL_EFFECTS_DELAY).await;
    let app_context = &context.app_context;
    app_context.resolve_target().await.unwrap();

    for name in MISSES {
        app_context.submit_guess(name).await.unwrap();
    }
    tokio::time::sleep(TERMINAL_EFFECTS_DELAY + Duration::from_millis(1)).await;

    let events = event_kinds(app_context);
    assert!(!events.contains(&PresentationEventKind::Celebrate));
    assert_eq!(events.last(), Some(&PresentationEventKind::ShowSummary));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_effects() {
    let context = test_context_with(InMemoryRecordStorage::default(), TERMINAL_EFFECTS_DELAY).await;
    let app_context = &context.app_context;
    app_context.resolve_target().await.unwrap();
    app_context.submit_guess("Jakarta").await.unwrap();

    app_context.shutdown();
    tokio::time::sleep(TERMINAL_EFFECTS_DELAY * 2).await;

    let events = event_kinds(app_context);
    assert!(!events.contains(&PresentationEventKind::Celebrate));
    assert!(!events.contains(&PresentationEventKind::ShowSummary));
}

#[tokio::test]
async fn test_submit_guess_endpoint() {
    let app = resolved_test_app().await;

    let response = app
        .server
        .post("/game/guesses")
        .json(&json!({ "name": "Surabaya" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], false);
    assert_eq!(body["outcome"], json!({ "state": "inProgress", "attemptsLeft": 5 }));
    assert_eq!(body["persisted"], true);
    assert_eq!(body["row"]["name"], "Surabaya");
    assert_eq!(body["row"]["direction"], "west");
    assert_eq!(body["row"]["isTarget"], false);
}

#[tokio::test]
async fn test_submit_guess_endpoint_reports_rejections() {
    let app = resolved_test_app().await;

    let response = app
        .server
        .post("/game/guesses")
        .json(&json!({ "name": "Atlantis" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "error": true, "errorCode": "unknownCity" }));
}

#[tokio::test]
async fn test_submit_guess_endpoint_before_resolution() {
    let app = test_app().await;

    let response = app
        .server
        .post("/game/guesses")
        .json(&json!({ "name": "Jakarta" }))
        .await;

    response.assert_json(&json!({ "error": false, "ignored": "targetUnresolved" }));
}

#[tokio::test]
async fn test_game_endpoint_reveals_the_city_when_over() {
    let app = resolved_test_app().await;
    app.server
        .post("/game/guesses")
        .json(&json!({ "name": "Surabaya" }))
        .await;

    let ongoing = app.server.get("/game").await.json::<serde_json::Value>();
    app.server
        .post("/game/guesses")
        .json(&json!({ "name": "Jakarta" }))
        .await;
    let finished = app.server.get("/game").await.json::<serde_json::Value>();

    assert_eq!(ongoing["state"], "in_progress");
    assert_eq!(ongoing["date"], TODAY);
    assert_eq!(ongoing["attemptsLeft"], 5);
    assert_eq!(ongoing["isLoading"], false);
    assert!(ongoing.get("cityOfTheDay").is_none());
    assert_eq!(finished["state"], "won");
    assert_eq!(finished["cityOfTheDay"], "Jakarta");
    assert_eq!(finished["rows"][1]["emoji"], "📍");
}

#[tokio::test]
async fn test_game_endpoint_while_loading() {
    let app = test_app().await;

    let body = app.server.get("/game").await.json::<serde_json::Value>();

    assert_eq!(body["isLoading"], true);
    assert_eq!(body["hasError"], false);
    assert_eq!(body["rows"], json!([]));
}
