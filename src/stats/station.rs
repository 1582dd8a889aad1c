//! Most popular stations and trips.

use serde::Serialize;
use tracing::debug;

use crate::derive::TripTable;
use crate::stats::frequency::{FrequencyCount, Popular};

/// A start/end station combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: Option<Popular<String>>,
    pub end_station: Option<Popular<String>>,
    pub trip: Option<Popular<StationPair>>,
}

fn owned(p: Popular<&str>) -> Popular<String> {
    Popular {
        value: p.value.to_string(),
        count: p.count,
    }
}

/// Most used start station, end station, and start/end combination.
///
/// The combination is the largest group when rows are grouped by
/// `(start_station, end_station)`; equal groups go to the pair seen first.
/// Empty station cells are not counted, and a row missing either side is
/// left out of the pairs.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    let rows = table.rows();
    let starts: FrequencyCount<&str> = rows
        .iter()
        .filter_map(|t| t.start_station.as_deref())
        .collect();
    let ends: FrequencyCount<&str> = rows
        .iter()
        .filter_map(|t| t.end_station.as_deref())
        .collect();
    let pairs: FrequencyCount<(&str, &str)> = rows
        .iter()
        .filter_map(|t| Some((t.start_station.as_deref()?, t.end_station.as_deref()?)))
        .collect();

    debug!(
        distinct_starts = starts.len(),
        distinct_ends = ends.len(),
        distinct_pairs = pairs.len(),
        "Station groups counted"
    );

    StationStats {
        start_station: starts.mode().map(owned),
        end_station: ends.mode().map(owned),
        trip: pairs.mode().map(|p| Popular {
            value: StationPair {
                start: p.value.0.to_string(),
                end: p.value.1.to_string(),
            },
            count: p.count,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::{table_of, trip_between, trip_between_cells};

    #[test]
    fn test_most_frequent_pair() {
        let table = table_of(vec![
            trip_between("A", "B"),
            trip_between("A", "B"),
            trip_between("A", "C"),
        ]);
        let stats = station_stats(&table);

        let trip = stats.trip.unwrap();
        assert_eq!(
            trip.value,
            StationPair {
                start: "A".into(),
                end: "B".into()
            }
        );
        assert_eq!(trip.count, 2);
        assert_eq!(stats.start_station.unwrap().value, "A");
        assert_eq!(stats.end_station.unwrap().value, "B");
    }

    #[test]
    fn test_start_station_tie_goes_to_first_seen() {
        let table = table_of(vec![
            trip_between("Clark St", "X"),
            trip_between("Lake St", "Y"),
            trip_between("Lake St", "Z"),
            trip_between("Clark St", "W"),
        ]);
        let stats = station_stats(&table);
        assert_eq!(stats.start_station.unwrap().value, "Clark St");
    }

    #[test]
    fn test_pair_tie_goes_to_first_seen() {
        let table = table_of(vec![
            trip_between("C", "D"),
            trip_between("A", "B"),
            trip_between("A", "B"),
            trip_between("C", "D"),
        ]);
        let trip = station_stats(&table).trip.unwrap();
        assert_eq!(trip.value.start, "C");
        assert_eq!(trip.value.end, "D");
    }

    #[test]
    fn test_pair_needs_same_start_and_end() {
        // start "A" and end "B" are each common, but never together
        let table = table_of(vec![
            trip_between("A", "X"),
            trip_between("A", "Y"),
            trip_between("Q", "B"),
            trip_between("R", "B"),
            trip_between("Q", "Y"),
            trip_between("Q", "Y"),
        ]);
        let stats = station_stats(&table);
        let trip = stats.trip.unwrap();
        assert_eq!((trip.value.start.as_str(), trip.value.end.as_str()), ("Q", "Y"));
        assert_eq!(trip.count, 2);
    }

    #[test]
    fn test_empty_station_cells_are_not_counted() {
        let table = table_of(vec![
            trip_between_cells(None, Some("X")),
            trip_between_cells(None, Some("X")),
            trip_between("A", "B"),
        ]);
        let stats = station_stats(&table);

        assert_eq!(
            stats.start_station,
            Some(Popular {
                value: "A".to_string(),
                count: 1
            })
        );
        assert_eq!(stats.end_station.unwrap().value, "X");
        let trip = stats.trip.unwrap();
        assert_eq!((trip.value.start.as_str(), trip.value.end.as_str()), ("A", "B"));
        assert_eq!(trip.count, 1);
    }

    #[test]
    fn test_all_station_cells_empty() {
        let table = table_of(vec![trip_between_cells(None, None)]);
        let stats = station_stats(&table);
        assert_eq!(stats.start_station, None);
        assert_eq!(stats.trip, None);
    }

    #[test]
    fn test_empty_table() {
        let stats = station_stats(&table_of(vec![]));
        assert_eq!(stats.start_station, None);
        assert_eq!(stats.end_station, None);
        assert_eq!(stats.trip, None);
    }
}
