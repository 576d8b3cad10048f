use crate::app_context::AppContext;
use crate::target::responses::{
    DateQueryParam, NumberOfTheDayError, NumberOfTheDayResponse, ResolveTargetResponse,
    TargetResolutionErrorCode,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;

#[axum::debug_handler]
pub async fn number_of_the_day(
    State(app_context): State<AppContext>,
    Query(DateQueryParam { ds }): Query<DateQueryParam>,
) -> (StatusCode, Json<NumberOfTheDayResponse>) {
    match app_context.signed_seed.number_for(&ds) {
        Ok(number) => (
            StatusCode::OK,
            Json(NumberOfTheDayResponse {
                error: false,
                error_code: None,
                number_of_the_day: Some(number),
            }),
        ),
        Err(_) => (
            StatusCode::BAD_REQUEST,
            Json(NumberOfTheDayResponse {
                error: true,
                error_code: Some(NumberOfTheDayError::InvalidDate),
                number_of_the_day: None,
            }),
        ),
    }
}

#[axum::debug_handler]
pub async fn resolve(State(app_context): State<AppContext>) -> Json<ResolveTargetResponse> {
    let result = app_context.resolve_target().await;
    let today = app_context.clock.today_key();
    let state = app_context.target.state().await;
    Json(ResolveTargetResponse {
        error: result.is_err(),
        error_code: result
            .err()
            .map(|_| TargetResolutionErrorCode::ResolutionFailed),
        is_loading: state.is_loading(&today),
        has_error: state.has_error(&today),
    })
}
