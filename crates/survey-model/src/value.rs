//! Raw answer cells and survey rows.

use std::collections::BTreeMap;

/// A single answer cell from the survey table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Free-text answer.
    Text(String),
    /// Answer from a column the reader inferred as numeric.
    Number(f64),
    /// Empty or absent cell.
    #[default]
    Missing,
}

impl FieldValue {
    /// Returns the answer text when the cell holds a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Number(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Renders the cell as a plain string.
    ///
    /// Numbers drop trailing zeros (`5.0` becomes `"5"`), missing cells render empty.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => format_numeric(*value),
            Self::Missing => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// One respondent's answers keyed by question text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    values: BTreeMap<String, FieldValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an answer, returning the row for chaining.
    #[must_use]
    pub fn with(mut self, question: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(question.into(), value.into());
        self
    }

    /// Returns the answer for a question, `Missing` when the question is absent.
    pub fn get(&self, question: &str) -> &FieldValue {
        const MISSING: &FieldValue = &FieldValue::Missing;
        self.values.get(question).unwrap_or(MISSING)
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
