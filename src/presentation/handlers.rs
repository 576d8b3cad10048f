use crate::app_context::AppContext;
use crate::presentation::responses::{AfterQueryParam, EventsResponse};
use axum::extract::{Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn events(
    State(app_context): State<AppContext>,
    Query(AfterQueryParam { after }): Query<AfterQueryParam>,
) -> Json<EventsResponse> {
    Json(EventsResponse {
        events: app_context.events.since(after),
    })
}
