//! Reads a city's trip log from its CSV file.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::DataSourceError;
use crate::query::City;

/// Columns every city's file must carry.
pub static REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Demographic columns. Only used when both are present.
pub static DEMOGRAPHIC_COLUMNS: &[&str] = &["Gender", "Birth Year"];

/// A single row as it appears in the source file, before any derivation.
/// Empty cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTrip {
    pub start_time: String,
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

/// Row layout read straight from CSV. Demographic cells stay as text so a
/// file that lacks one of the pair never fails on the other.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: Option<f64>,
    #[serde(rename = "Start Station")]
    start_station: Option<String>,
    #[serde(rename = "End Station")]
    end_station: Option<String>,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// All rows of one city's file, in file order.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub source: PathBuf,
    pub rows: Vec<RawTrip>,
    /// Whether the file had both `Gender` and `Birth Year` columns.
    pub has_demographics: bool,
}

/// Path of `city`'s dataset inside `data_dir`.
pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.source_file())
}

/// Loads the dataset for `city` from `data_dir`.
///
/// # Errors
///
/// Returns a [`DataSourceError`] if the file cannot be opened, is not valid
/// CSV, lacks one of [`REQUIRED_COLUMNS`], or has a non-numeric value in a
/// numeric column it reads. No partial table is ever returned.
#[tracing::instrument(skip(data_dir, city), fields(city = %city))]
pub fn load_city(data_dir: &Path, city: City) -> Result<RawTable, DataSourceError> {
    let path = city_path(data_dir, city);
    debug!(path = %path.display(), "Opening city dataset");

    let file = File::open(&path).map_err(|source| DataSourceError::Open {
        path: path.clone(),
        source,
    })?;
    let table = load_from_reader(file, &path)?;

    info!(
        rows = table.rows.len(),
        has_demographics = table.has_demographics,
        "City dataset loaded"
    );
    Ok(table)
}

/// Loads trip rows from any CSV byte stream. `source` is only used for error
/// messages.
pub fn load_from_reader<R: Read>(reader: R, source: &Path) -> Result<RawTable, DataSourceError> {
    let malformed = |err: csv::Error| DataSourceError::Malformed {
        path: source.to_path_buf(),
        source: err,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(malformed)?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    if let Some(column) = REQUIRED_COLUMNS.iter().find(|&&c| !has_column(c)) {
        return Err(DataSourceError::MissingColumn {
            path: source.to_path_buf(),
            column: *column,
        });
    }
    let has_demographics = DEMOGRAPHIC_COLUMNS.iter().all(|&c| has_column(c));

    let mut rows = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let row: CsvRow = result.map_err(malformed)?;
        let (gender, birth_year) = if has_demographics {
            let birth_year = row
                .birth_year
                .map(|text| {
                    text.parse::<f64>()
                        .map_err(|_| DataSourceError::InvalidValue {
                            path: source.to_path_buf(),
                            row: index + 1,
                            column: "Birth Year",
                            value: text.clone(),
                        })
                })
                .transpose()?;
            (row.gender, birth_year)
        } else {
            (None, None)
        };

        rows.push(RawTrip {
            start_time: row.start_time,
            trip_duration: row.trip_duration,
            start_station: row.start_station,
            end_station: row.end_station,
            user_type: row.user_type,
            gender,
            birth_year,
        });
    }

    Ok(RawTable {
        source: source.to_path_buf(),
        rows,
        has_demographics,
    })
}
