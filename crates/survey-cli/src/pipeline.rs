//! Batch normalization pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load cities**: Build the city index from the reference CSV
//! 2. **Read survey**: Read the survey export into rows
//! 3. **Normalize**: Normalize each row and hand it to the record sink
//!
//! Each stage runs under its own span and logs its duration on completion.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace, warn};

use survey_ingest::{SurveyTable, load_city_locations, read_survey_rows};
use survey_model::{FieldMap, NormalizedRecord, RawRow, RunSummary, SurveyField};
use survey_normalize::{CityIndex, RecordNormalizer};
use survey_output::RecordSink;

use crate::logging::redact_value;

// ============================================================================
// Stage 1: Load cities
// ============================================================================

/// Builds the city index from the reference CSV at `path`.
pub fn load_city_index(path: &Path) -> Result<CityIndex> {
    let _span = info_span!("load_cities", path = %path.display()).entered();
    let start = Instant::now();

    let locations =
        load_city_locations(path).with_context(|| format!("load cities {}", path.display()))?;
    let index = CityIndex::from_locations(locations);
    info!(
        cities = index.city_count(),
        locations = index.location_count(),
        duration_ms = start.elapsed().as_millis(),
        "city index ready"
    );
    Ok(index)
}

// ============================================================================
// Stage 2: Read survey
// ============================================================================

/// Reads the survey export and warns about unmapped fields.
pub fn read_survey(path: &Path, fields: &FieldMap) -> Result<SurveyTable> {
    let _span = info_span!("read_survey", path = %path.display()).entered();
    let start = Instant::now();

    let table =
        read_survey_rows(path).with_context(|| format!("read survey {}", path.display()))?;
    for field in missing_fields(&table, fields) {
        warn!(
            field = %field,
            question = fields.question(field),
            "survey has no column for field; it will use its sentinel"
        );
    }
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "survey read"
    );
    Ok(table)
}

/// Fields whose question header is absent from the survey.
pub fn missing_fields(table: &SurveyTable, fields: &FieldMap) -> Vec<SurveyField> {
    fields.missing_from(table.headers.iter().map(String::as_str))
}

// ============================================================================
// Stage 3: Normalize
// ============================================================================

/// Normalizes `rows` in order, writing each record to `sink`.
///
/// Stops after `limit` rows when given. The sink is finished before
/// returning; a sink failure aborts the run.
pub fn normalize_rows<S>(
    rows: &[RawRow],
    normalizer: &RecordNormalizer<'_>,
    sink: &mut S,
    limit: Option<usize>,
) -> Result<RunSummary>
where
    S: RecordSink + ?Sized,
{
    let _span = info_span!("normalize", rows = rows.len()).entered();
    let start = Instant::now();
    let mut summary = RunSummary::default();

    for (idx, row) in rows.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        let record = normalizer.normalize(row);
        log_sentinels(idx, row, normalizer.fields(), &record);
        summary.observe(&record);
        sink.write(&record)
            .with_context(|| format!("write record for row {idx}"))?;
        summary.mark_written();
    }
    sink.finish().context("finish output")?;

    if let Some(limit) = limit.filter(|limit| *limit < rows.len()) {
        info!(limit, skipped = rows.len() - limit, "row limit reached");
    }
    info!(
        rows_read = summary.rows_read,
        records_written = summary.records_written,
        salary_resolved = summary.salary.resolved,
        ratio_resolved = summary.patient_nurse_ratio.resolved,
        location_resolved = summary.location.resolved,
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );
    Ok(summary)
}

fn log_sentinels(idx: usize, row: &RawRow, fields: &FieldMap, record: &NormalizedRecord) {
    let outcomes = [
        (SurveyField::Salary, record.has_salary()),
        (SurveyField::PatientNurseRatio, record.has_ratio()),
        (SurveyField::Location, record.has_location()),
    ];
    for (field, resolved) in outcomes {
        if resolved {
            continue;
        }
        debug!(row = idx, field = %field, "answer normalized to sentinel");
        if tracing::enabled!(tracing::Level::TRACE) {
            let answer = row.get(fields.question(field)).render();
            trace!(row = idx, field = %field, answer = redact_value(&answer), "unresolved answer");
        }
    }
}
