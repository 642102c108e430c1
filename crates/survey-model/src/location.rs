//! Geographic reference entries and resolved coordinates.

use serde::{Deserialize, Serialize};

/// One row of the city reference table.
///
/// City and state are lowercase once the entry is in an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityLocation {
    pub city: String,
    /// Two-letter code or spelled-out state name.
    pub state: String,
    pub lat: f64,
    pub lng: f64,
}

impl CityLocation {
    pub fn new(city: impl Into<String>, state: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            lat,
            lng,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// A latitude/longitude pair. `{0, 0}` means the location was not resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Sentinel for an unresolved location.
    pub const UNKNOWN: Self = Self { lat: 0.0, lng: 0.0 };

    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}
