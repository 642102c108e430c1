//! Assembles a normalized record from one survey row.

use survey_model::{FieldMap, NormalizedRecord, RawRow, SurveyField};

use crate::location::{CityIndex, LocationResolver};
use crate::ratio::normalize_ratio;
use crate::salary::{SalaryBounds, normalize_salary_value};

/// Everything needed to normalize rows: field headers, salary bounds and the
/// city index. Holds no mutable state, so one instance serves a whole run.
#[derive(Debug, Clone, Copy)]
pub struct RecordNormalizer<'a> {
    fields: &'a FieldMap,
    resolver: LocationResolver<'a>,
    bounds: SalaryBounds,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(fields: &'a FieldMap, index: &'a CityIndex, bounds: SalaryBounds) -> Self {
        Self {
            fields,
            resolver: LocationResolver::new(index),
            bounds,
        }
    }

    pub fn fields(&self) -> &'a FieldMap {
        self.fields
    }

    pub fn normalize(&self, row: &RawRow) -> NormalizedRecord {
        let answer = |field: SurveyField| row.get(self.fields.question(field));
        NormalizedRecord {
            experience: answer(SurveyField::Experience).render(),
            education: answer(SurveyField::Education).render(),
            department: answer(SurveyField::Department).render(),
            salary: normalize_salary_value(answer(SurveyField::Salary), &self.bounds),
            patient_nurse_ratio: normalize_ratio(answer(SurveyField::PatientNurseRatio)),
            location: self.resolver.resolve_value(answer(SurveyField::Location)),
        }
    }
}

/// Normalizes one row. Never fails; unreadable answers become sentinels.
pub fn normalize_row(
    row: &RawRow,
    fields: &FieldMap,
    index: &CityIndex,
    bounds: &SalaryBounds,
) -> NormalizedRecord {
    RecordNormalizer::new(fields, index, *bounds).normalize(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::{CityLocation, Coordinates, FieldValue};

    #[test]
    fn normalizes_every_field() {
        let fields = FieldMap::default();
        let index = CityIndex::from_locations([CityLocation::new("Austin", "TX", 30.3004, -97.7522)]);
        let row = RawRow::new()
            .with(fields.experience.clone(), FieldValue::Number(3.0))
            .with(fields.education.clone(), "BSN")
            .with(fields.department.clone(), "Med Surg")
            .with(fields.salary.clone(), "$32/hr")
            .with(fields.location.clone(), "Austin, Texas")
            .with(fields.patient_nurse_ratio.clone(), "1:5");

        let record = normalize_row(&row, &fields, &index, &SalaryBounds::default());

        assert_eq!(record.experience, "3");
        assert_eq!(record.education, "BSN");
        assert_eq!(record.department, "Med Surg");
        assert_eq!(record.salary, 32.0);
        assert_eq!(record.patient_nurse_ratio, 5.0);
        assert_eq!(record.location, Coordinates::new(30.3004, -97.7522));
    }

    #[test]
    fn empty_row_is_all_sentinels() {
        let fields = FieldMap::default();
        let index = CityIndex::default();
        let record = RecordNormalizer::new(&fields, &index, SalaryBounds::default())
            .normalize(&RawRow::new());
        assert_eq!(record, NormalizedRecord::default());
    }
}
