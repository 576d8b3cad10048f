use crate::app_context::AppContext;
use crate::health::responses::HealthCheckResponse;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck(State(app_context): State<AppContext>) -> Json<HealthCheckResponse> {
    let today = app_context.clock.today_key();
    let target_ready = app_context.target.city_of_the_day(&today).await.is_some();
    Json(HealthCheckResponse {
        error: false,
        today,
        target_ready,
    })
}
