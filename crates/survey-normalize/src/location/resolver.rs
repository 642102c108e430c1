use survey_model::{Coordinates, FieldValue};

use super::index::CityIndex;

/// Parsing attempt that resolved a location answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolveStrategy {
    /// "San Francisco, CA"
    CityCommaState,
    /// "San Francisco CA"
    TrailingState,
    /// "San Francisco"
    WholeText,
    /// "San Francisco Ojio": trailing token dropped, any state.
    DropTrailingToken,
}

impl ResolveStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CityCommaState => "city-comma-state",
            Self::TrailingState => "trailing-state",
            Self::WholeText => "whole-text",
            Self::DropTrailingToken => "drop-trailing-token",
        }
    }
}

/// One city/state lookup to try.
struct Attempt {
    strategy: ResolveStrategy,
    city: String,
    state: String,
}

impl Attempt {
    fn new(strategy: ResolveStrategy, city: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            strategy,
            city: city.into(),
            state: state.into(),
        }
    }
}

/// Lowercases, trims, and drops periods ("St. Louis" becomes "st louis").
fn preprocess(text: &str) -> String {
    text.to_lowercase().trim().replace('.', "")
}

/// Lookups to try for a preprocessed answer, in order.
fn attempts(text: &str) -> Vec<Attempt> {
    let mut attempts = Vec::with_capacity(4);
    if let Some((city, state)) = text.split_once(',') {
        attempts.push(Attempt::new(
            ResolveStrategy::CityCommaState,
            city.trim(),
            state.trim(),
        ));
    }

    let tokens: Vec<&str> = text.split_whitespace().collect();
    let leading_city = match tokens.split_last() {
        Some((state, city_tokens)) if !city_tokens.is_empty() => {
            let city = city_tokens.join(" ");
            attempts.push(Attempt::new(
                ResolveStrategy::TrailingState,
                city.clone(),
                *state,
            ));
            Some(city)
        }
        _ => None,
    };

    attempts.push(Attempt::new(ResolveStrategy::WholeText, text, ""));
    if let Some(city) = leading_city {
        attempts.push(Attempt::new(ResolveStrategy::DropTrailingToken, city, ""));
    }
    attempts
}

/// Resolves location answers against a [`CityIndex`].
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver<'a> {
    index: &'a CityIndex,
}

impl<'a> LocationResolver<'a> {
    pub fn new(index: &'a CityIndex) -> Self {
        Self { index }
    }

    /// Resolves an answer and reports which attempt succeeded.
    ///
    /// Attempts run in [`ResolveStrategy`] declaration order; the first that
    /// yields non-zero coordinates wins.
    pub fn resolve_with_strategy(&self, text: &str) -> Option<(ResolveStrategy, Coordinates)> {
        let text = preprocess(text);
        if text.is_empty() {
            return None;
        }
        attempts(&text).into_iter().find_map(|attempt| {
            let coordinates = self.index.coordinates(&attempt.city, &attempt.state);
            (!coordinates.is_unknown()).then_some((attempt.strategy, coordinates))
        })
    }

    /// Resolves an answer, [`Coordinates::UNKNOWN`] when nothing matches.
    pub fn resolve(&self, text: &str) -> Coordinates {
        self.resolve_with_strategy(text)
            .map_or(Coordinates::UNKNOWN, |(_, coordinates)| coordinates)
    }

    /// Resolves a cell. Only text cells are read.
    pub fn resolve_value(&self, value: &FieldValue) -> Coordinates {
        value
            .as_text()
            .map_or(Coordinates::UNKNOWN, |text| self.resolve(text))
    }
}

/// Resolves a "City, State" style answer to coordinates.
pub fn resolve_location(text: &str, index: &CityIndex) -> Coordinates {
    LocationResolver::new(index).resolve(text)
}

/// Resolves a location cell. Non-text cells are unknown.
pub fn resolve_location_value(value: &FieldValue, index: &CityIndex) -> Coordinates {
    LocationResolver::new(index).resolve_value(value)
}
