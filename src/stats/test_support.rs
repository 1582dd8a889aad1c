//! Row builders shared by the statistics tests.

use crate::derive::{TripRecord, TripTable, parse_start_time, time_fields};

pub fn trip_at(start_time: &str) -> TripRecord {
    let ts = parse_start_time(start_time).unwrap();
    let (month, weekday_name, hour) = time_fields(&ts);
    TripRecord {
        start_time: ts,
        trip_duration: Some(60.0),
        start_station: Some("Start".to_string()),
        end_station: Some("End".to_string()),
        user_type: Some("Subscriber".to_string()),
        gender: None,
        birth_year: None,
        month,
        weekday_name,
        hour,
    }
}

pub fn trip_between(start: &str, end: &str) -> TripRecord {
    trip_between_cells(Some(start), Some(end))
}

/// Like [`trip_between`], with `None` standing for an empty station cell.
pub fn trip_between_cells(start: Option<&str>, end: Option<&str>) -> TripRecord {
    TripRecord {
        start_station: start.map(str::to_string),
        end_station: end.map(str::to_string),
        ..trip_at("2017-01-02 08:00:00")
    }
}

pub fn trip_lasting(secs: Option<f64>) -> TripRecord {
    TripRecord {
        trip_duration: secs,
        ..trip_at("2017-01-02 08:00:00")
    }
}

pub fn rider(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<i32>) -> TripRecord {
    TripRecord {
        user_type: user_type.map(str::to_string),
        gender: gender.map(str::to_string),
        birth_year,
        ..trip_at("2017-01-02 08:00:00")
    }
}

pub fn table_of(rows: Vec<TripRecord>) -> TripTable {
    TripTable::new(rows, true)
}

pub fn table_without_demographics(rows: Vec<TripRecord>) -> TripTable {
    TripTable::new(rows, false)
}
