//! Survey data ingestion.
//!
//! This crate reads the two inputs of a normalization run:
//!
//! - **Survey rows**: the survey export CSV, one [`RawRow`](survey_model::RawRow)
//!   per respondent, read with Polars so numeric columns stay numeric
//! - **City reference**: a CSV of city, state, latitude and longitude
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::{load_city_locations, read_survey_rows};
//!
//! let survey = read_survey_rows(Path::new("data/projectnurse.csv"))?;
//! let cities = load_city_locations(Path::new("data/uscities.csv"))?;
//! ```

mod cities;
mod error;
mod survey;

// === Error Types ===
pub use error::{IngestError, Result};

// === Survey Rows ===
pub use survey::{
    SurveyTable, any_to_field_value, read_survey_rows, read_survey_table, survey_rows,
    validate_encoding,
};

// === City Reference ===
pub use cities::{CityColumns, load_city_locations, read_city_locations};
