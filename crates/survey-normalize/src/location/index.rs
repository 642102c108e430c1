use std::collections::HashMap;

use survey_model::{CityLocation, Coordinates};
use tracing::debug;

use super::state::match_states;

/// Read-only table of city reference entries keyed by lowercase city name.
///
/// Entries sharing a city name keep their source order, which decides the
/// winner when a lookup does not name a state.
#[derive(Debug, Clone, Default)]
pub struct CityIndex {
    cities: HashMap<String, Vec<CityLocation>>,
    location_count: usize,
}

impl CityIndex {
    /// Builds the index, lowercasing city and state of every entry.
    pub fn from_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = CityLocation>,
    {
        let mut cities: HashMap<String, Vec<CityLocation>> = HashMap::new();
        let mut location_count = 0usize;
        for location in locations {
            let entry = CityLocation {
                city: location.city.to_lowercase(),
                state: location.state.to_lowercase(),
                ..location
            };
            cities.entry(entry.city.clone()).or_default().push(entry);
            location_count += 1;
        }
        debug!(
            city_count = cities.len(),
            location_count, "built city index"
        );
        Self {
            cities,
            location_count,
        }
    }

    /// Every entry for a city, in source order.
    pub fn candidates(&self, city: &str) -> &[CityLocation] {
        self.cities
            .get(&city.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First entry for `city` whose state matches `state` (empty matches any).
    pub fn lookup(&self, city: &str, state: &str) -> Option<&CityLocation> {
        self.candidates(city)
            .iter()
            .find(|location| match_states(&location.state, state))
    }

    /// Coordinates of [`lookup`](Self::lookup), or [`Coordinates::UNKNOWN`].
    pub fn coordinates(&self, city: &str, state: &str) -> Coordinates {
        self.lookup(city, state)
            .map_or(Coordinates::UNKNOWN, CityLocation::coordinates)
    }

    /// Number of distinct city names.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Number of entries across all cities.
    pub fn location_count(&self) -> usize {
        self.location_count
    }

    pub fn is_empty(&self) -> bool {
        self.location_count == 0
    }
}

impl FromIterator<CityLocation> for CityIndex {
    fn from_iter<I: IntoIterator<Item = CityLocation>>(iter: I) -> Self {
        Self::from_locations(iter)
    }
}
