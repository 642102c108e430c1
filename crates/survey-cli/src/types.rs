use std::path::PathBuf;

use survey_model::{RunSummary, SurveyField};

#[derive(Debug)]
pub struct RunResult {
    pub survey: PathBuf,
    pub cities: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub summary: RunSummary,
    pub missing_fields: Vec<SurveyField>,
}
