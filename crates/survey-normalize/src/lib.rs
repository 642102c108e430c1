//! Normalizers for free-text nurse survey answers.
//!
//! - **salary**: pay text to an hourly USD rate
//! - **ratio**: staffing text to patients per nurse
//! - **location**: city/state text to coordinates, backed by a [`CityIndex`]
//! - **record**: assembles a [`NormalizedRecord`](survey_model::NormalizedRecord) from a row
//!
//! None of the normalizers fail. Answers that cannot be interpreted come back
//! as `0.0` or [`Coordinates::UNKNOWN`](survey_model::Coordinates::UNKNOWN).

pub mod location;
pub mod numeric;
pub mod ratio;
pub mod record;
pub mod salary;

pub use location::{
    CityIndex, LocationResolver, ResolveStrategy, match_states, resolve_location,
    resolve_location_value,
};
pub use ratio::{RatioMatch, RatioRule, detect_ratio, normalize_ratio, normalize_ratio_text};
pub use record::{RecordNormalizer, normalize_row};
pub use salary::{
    PayPeriod, SalaryBounds, SalaryParse, classify_pay_period, normalize_salary,
    normalize_salary_value, parse_salary,
};
