use crate::geo::{self, consts::MAX_DISTANCE_KM};
use errors::CitiesError;
use models::{normalize_name, City};
use std::collections::HashMap;
use std::path::Path;

pub mod errors;
pub mod models;

/// The static, ordered reference set. Indices are stable for the lifetime of
/// the process and feed the modulo-based daily selection.
#[derive(Clone, Debug)]
pub struct CitySet {
    cities: Vec<City>,
    index_by_key: HashMap<String, usize>,
}

impl CitySet {
    pub fn new(cities: Vec<City>) -> Result<Self, CitiesError> {
        if cities.is_empty() {
            return Err(CitiesError::Empty);
        }
        let mut index_by_key = HashMap::with_capacity(cities.len());
        for (index, city) in cities.iter().enumerate() {
            if !geo::within_reference_domain(city.position()) {
                return Err(CitiesError::OutOfDomain(city.name.clone()));
            }
            if index_by_key.insert(city.key(), index).is_some() {
                return Err(CitiesError::Duplicate(city.name.clone()));
            }
        }
        for (i, a) in cities.iter().enumerate() {
            for b in &cities[i + 1..] {
                if geo::distance_km(a.position(), b.position()) > MAX_DISTANCE_KM {
                    return Err(CitiesError::TooFarApart(a.name.clone(), b.name.clone()));
                }
            }
        }
        Ok(Self {
            cities,
            index_by_key,
        })
    }

    /// One JSON city per line; blank lines are skipped.
    pub fn from_ndjson(raw: &str) -> Result<Self, CitiesError> {
        let mut cities = Vec::new();
        for (line_index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let city: City =
                serde_json::from_str(line).map_err(|source| CitiesError::Malformed {
                    line: line_index + 1,
                    source,
                })?;
            cities.push(city);
        }
        Self::new(cities)
    }

    pub fn load(path: &Path) -> Result<Self, CitiesError> {
        let raw = std::fs::read_to_string(path)?;
        let cities = Self::from_ndjson(&raw)?;
        tracing::info!(
            task = "cities_loaded",
            path = %path.display(),
            count = cities.len(),
        );
        Ok(cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[cfg(test)]
    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&City> {
        self.index_of(name).map(|index| &self.cities[index])
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index_by_key.get(&normalize_name(name)).copied()
    }

    /// `number mod len`, never negative.
    pub fn index_for_number(&self, number: i64) -> usize {
        number.rem_euclid(self.cities.len() as i64) as usize
    }

    /// The city selected by a seed number.
    pub fn for_number(&self, number: i64) -> &City {
        &self.cities[self.index_for_number(number)]
    }
}
