//! Counters for a batch run.

use serde::Serialize;

use crate::record::NormalizedRecord;

/// Resolved vs sentinel counts for one normalized field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldTally {
    pub resolved: usize,
    pub sentinel: usize,
}

impl FieldTally {
    fn count(&mut self, resolved: bool) {
        if resolved {
            self.resolved += 1;
        } else {
            self.sentinel += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.resolved + self.sentinel
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub rows_read: usize,
    pub records_written: usize,
    pub salary: FieldTally,
    pub patient_nurse_ratio: FieldTally,
    pub location: FieldTally,
}

impl RunSummary {
    /// Counts a normalized record against the per-field tallies.
    pub fn observe(&mut self, record: &NormalizedRecord) {
        self.rows_read += 1;
        self.salary.count(record.has_salary());
        self.patient_nurse_ratio.count(record.has_ratio());
        self.location.count(record.has_location());
    }

    pub fn mark_written(&mut self) {
        self.records_written += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coordinates;

    #[test]
    fn observe_splits_resolved_and_sentinel() {
        let mut summary = RunSummary::default();
        summary.observe(&NormalizedRecord {
            salary: 24.0,
            location: Coordinates::new(40.7, -74.0),
            ..NormalizedRecord::default()
        });
        summary.observe(&NormalizedRecord::default());
        summary.mark_written();

        assert_eq!(summary.rows_read, 2);
        assert_eq!(summary.records_written, 1);
        assert_eq!(summary.salary, FieldTally { resolved: 1, sentinel: 1 });
        assert_eq!(summary.patient_nurse_ratio.sentinel, 2);
        assert_eq!(summary.location.resolved, 1);
        assert_eq!(summary.location.total(), 2);
    }
}
