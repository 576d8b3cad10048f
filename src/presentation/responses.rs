use crate::presentation::models::PresentationEvent;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub events: Vec<PresentationEvent>,
}

#[derive(Serialize, Deserialize)]
pub struct AfterQueryParam {
    #[serde(default)]
    pub after: usize,
}
