use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::{game, health, presentation, stats, target};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let api_routes = Router::new().route(
        "/number-of-the-day",
        get(target::handlers::number_of_the_day),
    );
    let game_routes = Router::new()
        .route("/", get(game::handlers::game))
        .route("/guesses", post(game::handlers::submit_guess));
    let target_routes = Router::new().route("/resolve", post(target::handlers::resolve));
    let stats_routes = Router::new().route("/", get(stats::handlers::all_time_stats));
    let events_routes = Router::new().route("/", get(presentation::handlers::events));

    Router::new()
        .nest("/health", health_routes)
        .nest("/api", api_routes)
        .nest("/game", game_routes)
        .nest("/target", target_routes)
        .nest("/stats", stats_routes)
        .nest("/events", events_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
