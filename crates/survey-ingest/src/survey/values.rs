//! Polars cell to [`FieldValue`] conversion.

use polars::prelude::AnyValue;
use survey_model::FieldValue;

fn text_value(text: &str) -> FieldValue {
    if text.trim().is_empty() {
        FieldValue::Missing
    } else {
        FieldValue::Text(text.to_string())
    }
}

/// Converts a cell, keeping numeric dtypes numeric and blank text missing.
pub fn any_to_field_value(value: AnyValue<'_>) -> FieldValue {
    match value {
        AnyValue::Null => FieldValue::Missing,
        AnyValue::String(s) => text_value(s),
        AnyValue::StringOwned(s) => text_value(s.as_str()),
        AnyValue::Int8(v) => FieldValue::Number(f64::from(v)),
        AnyValue::Int16(v) => FieldValue::Number(f64::from(v)),
        AnyValue::Int32(v) => FieldValue::Number(f64::from(v)),
        AnyValue::Int64(v) => FieldValue::Number(v as f64),
        AnyValue::UInt8(v) => FieldValue::Number(f64::from(v)),
        AnyValue::UInt16(v) => FieldValue::Number(f64::from(v)),
        AnyValue::UInt32(v) => FieldValue::Number(f64::from(v)),
        AnyValue::UInt64(v) => FieldValue::Number(v as f64),
        AnyValue::Float32(v) => FieldValue::Number(f64::from(v)),
        AnyValue::Float64(v) => FieldValue::Number(v),
        AnyValue::Boolean(b) => FieldValue::Text(b.to_string()),
        other => text_value(&other.to_string()),
    }
}
