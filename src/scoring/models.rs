use crate::scoring::consts::{CLOSE_FROM_PERCENTAGE, EXACT_FROM_PERCENTAGE, NEAR_FROM_PERCENTAGE};
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ClosenessTier {
    Far,
    Near,
    Close,
    Exact,
}

impl ClosenessTier {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < NEAR_FROM_PERCENTAGE {
            ClosenessTier::Far
        } else if percentage < CLOSE_FROM_PERCENTAGE {
            ClosenessTier::Near
        } else if percentage < EXACT_FROM_PERCENTAGE {
            ClosenessTier::Close
        } else {
            ClosenessTier::Exact
        }
    }
}

/// Display data of one submitted guess.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRow {
    pub name: String,
    pub distance_km: f64,
    pub distance_label: String,
    pub percentage: f64,
    pub emoji: &'static str,
    pub direction: &'static str,
    pub tier: ClosenessTier,
    pub is_target: bool,
    /// Screen-reader sentence for the whole row.
    pub summary: String,
}
