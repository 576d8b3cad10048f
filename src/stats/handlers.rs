use crate::app_context::AppContext;
use crate::stats::responses::StatsResponse;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn all_time_stats(State(app_context): State<AppContext>) -> Json<StatsResponse> {
    let stats = app_context.all_time_stats().await;
    Json(StatsResponse {
        win_percentage: stats.win_percentage(),
        stats,
    })
}
