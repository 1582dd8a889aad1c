//! Total and average trip duration.

use serde::Serialize;

use crate::derive::TripTable;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    /// Sum of all trip durations, in seconds.
    pub total_secs: f64,
    /// Arithmetic mean in seconds, `None` when no trip has a duration.
    pub mean_secs: Option<f64>,
    /// Number of trips that had a duration.
    pub trips: usize,
}

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sum and mean of `trip_duration`. Missing durations are skipped.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table
        .rows()
        .iter()
        .filter_map(|t| t.trip_duration)
        .collect();

    DurationStats {
        total_secs: durations.iter().sum(),
        mean_secs: mean(&durations),
        trips: durations.len(),
    }
}
