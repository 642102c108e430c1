//! Data model for nurse survey normalization.
//!
//! Raw survey answers come in as [`RawRow`]s of [`FieldValue`]s keyed by the
//! question text; the normalizers turn them into [`NormalizedRecord`]s.

pub mod fields;
pub mod location;
pub mod record;
pub mod summary;
pub mod value;

pub use fields::{FieldMap, SurveyField};
pub use location::{CityLocation, Coordinates};
pub use record::NormalizedRecord;
pub use summary::{FieldTally, RunSummary};
pub use value::{FieldValue, RawRow, format_numeric};
