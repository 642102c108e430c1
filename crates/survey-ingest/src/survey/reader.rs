//! Survey export CSV reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use survey_model::{FieldValue, RawRow};

use crate::error::{IngestError, Result};

use super::values::any_to_field_value;

/// Survey rows with the header row they were read under.
#[derive(Debug, Clone, Default)]
pub struct SurveyTable {
    /// Question headers in file order.
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl SurveyTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    if bytes_read >= 2 {
        // UTF-16 LE BOM
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a survey export into a Polars DataFrame.
///
/// The first row holds the question headers. Column dtypes are inferred from
/// every row, so a column of plain numbers comes back numeric and a single
/// free-text answer anywhere keeps the whole column as text.
pub fn read_survey_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read survey table"
    );
    Ok(df)
}

/// Header text with any UTF-8 BOM and surrounding whitespace removed.
fn clean_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_string()
}

/// Converts every DataFrame row into a [`RawRow`] keyed by header.
pub fn survey_rows(df: &DataFrame) -> Result<SurveyTable> {
    let columns = df.get_columns();
    let headers: Vec<String> = columns
        .iter()
        .map(|column| clean_header(column.name().as_str()))
        .collect();

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = columns
            .iter()
            .zip(&headers)
            .map(|(column, header)| -> Result<(String, FieldValue)> {
                Ok((header.clone(), any_to_field_value(column.get(idx)?)))
            })
            .collect::<Result<RawRow>>()?;
        rows.push(row);
    }

    Ok(SurveyTable { headers, rows })
}

/// Reads a survey export CSV into rows.
pub fn read_survey_rows(path: &Path) -> Result<SurveyTable> {
    let df = read_survey_table(path)?;
    survey_rows(&df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn validate_encoding_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'A', 0x00]);
        let result = validate_encoding(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn validate_encoding_rejects_empty_file() {
        let file = create_temp_csv(b"");
        assert!(matches!(
            validate_encoding(file.path()),
            Err(IngestError::EmptyCsv { .. })
        ));
    }

    #[test]
    fn read_survey_rows_keeps_text_and_numbers() {
        let file = create_temp_csv(
            b"Department,Years,Ratio\nICU,5,1:2\nER,12,\"4-5\"\n",
        );
        let table = read_survey_rows(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Department", "Years", "Ratio"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].get("Department"), &FieldValue::from("ICU"));
        assert_eq!(table.rows[1].get("Years"), &FieldValue::Number(12.0));
        assert_eq!(table.rows[1].get("Ratio"), &FieldValue::from("4-5"));
    }

    #[test]
    fn read_survey_rows_empty_cells_are_missing() {
        let file = create_temp_csv(b"Department,Ratio\nICU,\n,1:3\n");
        let table = read_survey_rows(file.path()).unwrap();

        assert!(table.rows[0].get("Ratio").is_missing());
        assert!(table.rows[1].get("Department").is_missing());
    }

    #[test]
    fn read_survey_rows_late_text_in_numeric_column() {
        let mut content = String::from("Years,Ratio\n");
        for _ in 0..150 {
            content.push_str("5,1:4\n");
        }
        content.push_str("10+,1:5\n");
        let file = create_temp_csv(content.as_bytes());

        let table = read_survey_rows(file.path()).unwrap();
        assert_eq!(table.len(), 151);
        assert_eq!(table.rows[0].get("Years"), &FieldValue::from("5"));
        assert_eq!(table.rows[150].get("Years"), &FieldValue::from("10+"));
    }

    #[test]
    fn read_survey_rows_missing_file() {
        let result = read_survey_rows(Path::new("/nonexistent/survey.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
