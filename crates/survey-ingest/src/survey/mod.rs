//! Survey export reading.

mod reader;
mod values;

pub use reader::{SurveyTable, read_survey_rows, read_survey_table, survey_rows, validate_encoding};
pub use values::any_to_field_value;
