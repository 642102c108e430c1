//! Survey fields and the question headers they are read from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the normalized record that is sourced from the survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurveyField {
    Experience,
    Education,
    Salary,
    Department,
    Location,
    PatientNurseRatio,
}

impl SurveyField {
    pub const ALL: [Self; 6] = [
        Self::Experience,
        Self::Education,
        Self::Salary,
        Self::Department,
        Self::Location,
        Self::PatientNurseRatio,
    ];

    /// Key used for this field in the normalized record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Salary => "salary",
            Self::Department => "department",
            Self::Location => "location",
            Self::PatientNurseRatio => "patientNurseRatio",
        }
    }

    /// Whether the raw answer is normalized (as opposed to passed through).
    pub fn is_normalized(self) -> bool {
        matches!(
            self,
            Self::Salary | Self::Location | Self::PatientNurseRatio
        )
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Question header in the survey export for each field.
///
/// Defaults to the headers of the Project Nurse survey export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldMap {
    pub experience: String,
    pub education: String,
    pub salary: String,
    pub department: String,
    pub location: String,
    pub patient_nurse_ratio: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            experience: "How many years of experience do you have?".to_string(),
            education: "What's your highest level of education?".to_string(),
            salary: "What is your hourly rate ($/hr)?".to_string(),
            department: "Department".to_string(),
            location: "What (City, State) are you located in?".to_string(),
            patient_nurse_ratio: "What is the Nurse - Patient Ratio?".to_string(),
        }
    }
}

impl FieldMap {
    pub fn question(&self, field: SurveyField) -> &str {
        match field {
            SurveyField::Experience => &self.experience,
            SurveyField::Education => &self.education,
            SurveyField::Salary => &self.salary,
            SurveyField::Department => &self.department,
            SurveyField::Location => &self.location,
            SurveyField::PatientNurseRatio => &self.patient_nurse_ratio,
        }
    }

    /// Fields whose question header is not among `headers`.
    pub fn missing_from<'a, I>(&self, headers: I) -> Vec<SurveyField>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        SurveyField::ALL
            .into_iter()
            .filter(|field| !headers.iter().any(|header| *header == self.question(*field)))
            .collect()
    }
}
