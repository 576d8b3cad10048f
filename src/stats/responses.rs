use crate::stats::models::AllTimeStats;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: AllTimeStats,
    pub win_percentage: u32,
}
