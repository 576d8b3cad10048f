use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// A compass heading rendered for players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BearingDirection {
    pub emoji: &'static str,
    pub label: &'static str,
}
