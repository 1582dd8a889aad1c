//! Parses `Start Time` and derives the month, weekday and hour columns.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::loader::{RawTable, RawTrip};

/// Timestamp layouts accepted for `Start Time`, tried in order.
static TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// A trip with its timestamp parsed and the time-based fields filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub trip_duration: Option<f64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub weekday_name: &'static str,
    pub hour: u32,
}

/// Ordered trip rows for one city, ready to be filtered and aggregated.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    rows: Vec<TripRecord>,
    has_demographics: bool,
}

impl TripTable {
    pub fn new(rows: Vec<TripRecord>, has_demographics: bool) -> Self {
        TripTable {
            rows,
            has_demographics,
        }
    }

    pub fn rows(&self) -> &[TripRecord] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<TripRecord> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the source carried both `Gender` and `Birth Year`.
    pub fn has_demographics(&self) -> bool {
        self.has_demographics
    }
}

/// Full English name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parses a `Start Time` value. The timestamp is taken as-is, with no time
/// zone conversion.
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map_or_else(
            // report the error against the canonical layout
            || NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMATS[0]),
            Ok,
        )
}

/// Month number, weekday name and hour of a timestamp.
pub fn time_fields(ts: &NaiveDateTime) -> (u32, &'static str, u32) {
    (ts.month(), weekday_name(ts.weekday()), ts.hour())
}

/// Turns a loaded table into a [`TripTable`].
///
/// # Errors
///
/// Fails on the first row whose `Start Time` cannot be parsed; the whole load
/// is rejected rather than dropping the row.
#[tracing::instrument(skip(raw), fields(source = %raw.source.display(), rows = raw.rows.len()))]
pub fn derive_fields(raw: RawTable) -> Result<TripTable, ParseError> {
    let has_demographics = raw.has_demographics;
    let rows = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, trip)| derive_row(index + 1, trip))
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|e| warn!(row = e.row, value = %e.value, "Unparseable start time"))?;

    debug!(rows = rows.len(), "Derived time fields");
    Ok(TripTable::new(rows, has_demographics))
}

fn derive_row(row: usize, trip: RawTrip) -> Result<TripRecord, ParseError> {
    let start_time = parse_start_time(&trip.start_time).map_err(|source| ParseError {
        row,
        value: trip.start_time.clone(),
        source,
    })?;
    let (month, weekday_name, hour) = time_fields(&start_time);

    Ok(TripRecord {
        start_time,
        trip_duration: trip.trip_duration,
        start_station: trip.start_station,
        end_station: trip.end_station,
        user_type: trip.user_type,
        gender: trip.gender,
        birth_year: trip
            .birth_year
            .filter(|y| y.is_finite())
            .map(|y| y.round() as i32),
        month,
        weekday_name,
        hour,
    })
}
