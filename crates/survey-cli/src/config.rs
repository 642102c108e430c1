//! Run configuration and default data locations.
//!
//! A run reads an optional TOML file:
//!
//! ```toml
//! [fields]
//! salary = "Hourly rate?"
//!
//! [salary]
//! min = 5.0
//! max = 150.0
//! ```
//!
//! Omitted keys keep their defaults; unknown keys are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use survey_model::FieldMap;
use survey_normalize::SalaryBounds;

/// Environment variable for overriding the city reference file.
pub const CITIES_ENV_VAR: &str = "NURSE_SURVEY_CITIES";

/// Settings that shape normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Question header for each survey field.
    pub fields: FieldMap,
    /// Accepted hourly salary range.
    pub salary: SalaryBounds,
}

impl PipelineConfig {
    /// Parses a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("load config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Reads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let SalaryBounds { min, max } = self.salary;
        if !(min.is_finite() && max.is_finite()) || min > max {
            bail!("invalid salary bounds: min {min} max {max}");
        }
        Ok(())
    }
}

/// Get the city reference file.
///
/// Resolution order:
/// 1. `NURSE_SURVEY_CITIES` environment variable
/// 2. `data/uscities.csv` relative to workspace root
pub fn default_city_data_path() -> PathBuf {
    if let Ok(path) = std::env::var(CITIES_ENV_VAR) {
        return PathBuf::from(path);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/uscities.csv")
}

/// Output path used when none is given: `<stem>.records.jsonl` beside the survey.
pub fn default_output_path(survey: &Path) -> PathBuf {
    let stem = survey
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("survey");
    survey.with_file_name(format!("{stem}.records.jsonl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(PipelineConfig::from_toml("").unwrap(), PipelineConfig::default());
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let config = PipelineConfig::from_toml(
            "[fields]\nsalary = \"Hourly rate?\"\n\n[salary]\nmax = 150.0\n",
        )
        .unwrap();
        assert_eq!(config.fields.salary, "Hourly rate?");
        assert_eq!(config.fields.department, FieldMap::default().department);
        assert_eq!(config.salary, SalaryBounds::new(3.0, 150.0));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(PipelineConfig::from_toml("[fields]\nwage = \"Pay\"\n").is_err());
        assert!(PipelineConfig::from_toml("limit = 3\n").is_err());
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = PipelineConfig::from_toml("[salary]\nmin = 50.0\nmax = 10.0\n").unwrap_err();
        assert!(err.to_string().contains("invalid salary bounds"));
    }

    #[test]
    fn output_defaults_beside_survey() {
        assert_eq!(
            default_output_path(Path::new("/data/projectnurse.csv")),
            PathBuf::from("/data/projectnurse.records.jsonl")
        );
    }
}
