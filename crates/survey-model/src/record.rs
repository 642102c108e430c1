//! The normalized document written for each respondent.

use serde::{Deserialize, Serialize};

use crate::location::Coordinates;

/// One normalized survey response.
///
/// `salary` and `patient_nurse_ratio` use `0.0` when the answer could not be
/// normalized; `location` uses [`Coordinates::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub experience: String,
    pub education: String,
    pub department: String,
    /// Hourly rate in USD.
    pub salary: f64,
    /// Patients per nurse, at least 1.0.
    pub patient_nurse_ratio: f64,
    pub location: Coordinates,
}

impl NormalizedRecord {
    pub fn has_salary(&self) -> bool {
        self.salary != 0.0
    }

    pub fn has_ratio(&self) -> bool {
        self.patient_nurse_ratio != 0.0
    }

    pub fn has_location(&self) -> bool {
        !self.location.is_unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_document_keys() {
        let record = NormalizedRecord {
            experience: "5".to_string(),
            education: "BSN".to_string(),
            department: "ICU".to_string(),
            salary: 42.5,
            patient_nurse_ratio: 2.5,
            location: Coordinates::new(37.7562, -122.443),
        };
        insta::assert_json_snapshot!(record, @r#"
        {
          "experience": "5",
          "education": "BSN",
          "department": "ICU",
          "salary": 42.5,
          "patientNurseRatio": 2.5,
          "location": {
            "lat": 37.7562,
            "lng": -122.443
          }
        }
        "#);
    }

    #[test]
    fn sentinels_read_as_unresolved() {
        let record = NormalizedRecord::default();
        assert!(!record.has_salary());
        assert!(!record.has_ratio());
        assert!(!record.has_location());
    }
}
