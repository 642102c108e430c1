//! City reference table loading.
//!
//! The reference CSV needs a header row naming the city, state, latitude and
//! longitude columns. Common spellings are accepted (`state_id`, `latitude`,
//! `lng`, ...), so exports such as the simplemaps US cities table load as-is.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use survey_model::CityLocation;
use tracing::warn;

use crate::error::{IngestError, Result};

const CITY_HEADERS: &[&str] = &["city", "city_ascii"];
const STATE_HEADERS: &[&str] = &["state", "state_id", "state_code", "state_name"];
const LAT_HEADERS: &[&str] = &["lat", "latitude"];
const LNG_HEADERS: &[&str] = &["lng", "lon", "long", "longitude"];

/// Positions of the reference columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityColumns {
    pub city: usize,
    pub state: usize,
    pub lat: usize,
    pub lng: usize,
}

impl CityColumns {
    /// Locates the columns by case-insensitive header alias.
    ///
    /// Aliases are tried in order, so `city` wins over `city_ascii` and
    /// `state` over `state_name` when both are present.
    pub fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |aliases: &[&str]| -> Result<usize> {
            aliases
                .iter()
                .find_map(|alias| {
                    headers.iter().position(|header| {
                        header
                            .trim_start_matches('\u{feff}')
                            .trim()
                            .eq_ignore_ascii_case(alias)
                    })
                })
                .ok_or_else(|| IngestError::MissingColumn {
                    column: aliases[0].to_string(),
                    path: path.to_path_buf(),
                })
        };
        Ok(Self {
            city: find(CITY_HEADERS)?,
            state: find(STATE_HEADERS)?,
            lat: find(LAT_HEADERS)?,
            lng: find(LNG_HEADERS)?,
        })
    }
}

fn parse_coordinate(record: &StringRecord, idx: usize, field: &str, path: &Path) -> Result<f64> {
    let raw = record.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| IngestError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
        path: path.to_path_buf(),
        line: record.position().map_or(0, csv::Position::line),
    })
}

/// Reads city reference entries from any reader, in source order.
///
/// `path` only labels errors. Rows with a blank city are skipped with a
/// warning; a missing column or an unparseable coordinate is an error.
pub fn read_city_locations<R: Read>(reader: R, path: &Path) -> Result<Vec<CityLocation>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns = CityColumns::from_headers(&headers, path)?;

    let mut locations = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let city = record.get(columns.city).unwrap_or("");
        if city.is_empty() {
            warn!(
                path = %path.display(),
                line = record.position().map_or(0, csv::Position::line),
                "skipping city reference row without a city"
            );
            continue;
        }
        let state = record.get(columns.state).unwrap_or("");
        let lat = parse_coordinate(&record, columns.lat, "latitude", path)?;
        let lng = parse_coordinate(&record, columns.lng, "longitude", path)?;
        locations.push(CityLocation::new(city, state, lat, lng));
    }

    Ok(locations)
}

/// Loads the city reference CSV at `path`.
pub fn load_city_locations(path: &Path) -> Result<Vec<CityLocation>> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let locations = read_city_locations(file, path)?;
    tracing::debug!(
        path = %path.display(),
        locations = locations.len(),
        "loaded city reference"
    );
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str) -> Result<Vec<CityLocation>> {
        read_city_locations(content.as_bytes(), Path::new("cities.csv"))
    }

    #[test]
    fn reads_plain_headers() {
        let locations = read("city,state,lat,lng\nSeattle,WA,47.6211,-122.3244\n").unwrap();
        assert_eq!(
            locations,
            vec![CityLocation::new("Seattle", "WA", 47.6211, -122.3244)]
        );
    }

    #[test]
    fn reads_simplemaps_headers() {
        let locations = read(
            "\"city\",\"city_ascii\",\"state_id\",\"state_name\",\"county_fips\",\"lat\",\"lng\"\n\
             \"Boise\",\"Boise\",\"ID\",\"Idaho\",\"16001\",\"43.6005\",\"-116.2308\"\n",
        )
        .unwrap();
        assert_eq!(locations[0].state, "ID");
        assert_eq!(locations[0].lat, 43.6005);
    }

    #[test]
    fn preserves_source_order() {
        let locations = read(
            "City,State,Latitude,Longitude\n\
             Springfield,MO,37.1943,-93.2915\n\
             Springfield,IL,39.7709,-89.6537\n",
        )
        .unwrap();
        let states: Vec<&str> = locations.iter().map(|l| l.state.as_str()).collect();
        assert_eq!(states, vec!["MO", "IL"]);
    }

    #[test]
    fn trims_values() {
        let locations = read("city,state,lat,lng\n  Reno , NV , 39.5497 , -119.8483 \n").unwrap();
        assert_eq!(locations[0].city, "Reno");
        assert_eq!(locations[0].lng, -119.8483);
    }

    #[test]
    fn skips_rows_without_city() {
        let locations = read("city,state,lat,lng\n,NV,1,2\nReno,NV,39.5,-119.8\n").unwrap();
        assert_eq!(locations.len(), 1);
    }

    #[test]
    fn missing_column() {
        let result = read("city,state,lat\nReno,NV,39.5\n");
        assert!(matches!(
            result,
            Err(IngestError::MissingColumn { ref column, .. }) if column == "lng"
        ));
    }

    #[test]
    fn invalid_coordinate_names_line() {
        let result = read("city,state,lat,lng\nReno,NV,39.5,-119.8\nElko,NV,north,-115.7\n");
        match result {
            Err(IngestError::InvalidValue { field, value, line, .. }) => {
                assert_eq!(field, "latitude");
                assert_eq!(value, "north");
                assert_eq!(line, 3);
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file() {
        let result = load_city_locations(Path::new("/nonexistent/cities.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
