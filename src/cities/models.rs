use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    /// Case-insensitive identity of the city.
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }

    pub fn same_as(&self, other: &City) -> bool {
        self.key() == other.key()
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
