use crate::app_context::AppContext;
use crate::game::models::{GameView, Submission};
use crate::game::responses::{GuessRequest, SubmitGuessResponse};
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn game(State(app_context): State<AppContext>) -> Json<GameView> {
    Json(app_context.game_view().await)
}

#[axum::debug_handler]
pub async fn submit_guess(
    State(app_context): State<AppContext>,
    Json(GuessRequest { name }): Json<GuessRequest>,
) -> Json<SubmitGuessResponse> {
    let response = match app_context.submit_guess(&name).await {
        Ok(Submission::Ignored(reason)) => SubmitGuessResponse::ignored(reason),
        Ok(Submission::Accepted {
            outcome,
            row,
            persisted,
        }) => SubmitGuessResponse::accepted(outcome, row, persisted),
        Err(error) => SubmitGuessResponse::rejected(error.code()),
    };
    Json(response)
}
