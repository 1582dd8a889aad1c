//! The full set of statistics for one query.

use serde::{Serialize, Serializer};
use std::time::{Duration, Instant};
use tracing::info;

use crate::derive::TripTable;
use crate::query::FilterSpec;
use crate::stats::duration::{DurationStats, duration_stats};
use crate::stats::station::{StationStats, station_stats};
use crate::stats::time::{TimeStats, time_stats};
use crate::stats::user::{UserStats, user_stats};

/// A statistic group together with how long it took to compute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timed<T> {
    #[serde(flatten)]
    pub stats: T,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs")]
    pub elapsed: Duration,
}

fn as_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Runs `compute` and records its wall-clock duration.
pub fn timed<T>(compute: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let stats = compute();
    Timed {
        stats,
        elapsed: start.elapsed(),
    }
}

/// Read-only summary of a filtered table. Built fresh for every query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub filters: FilterSpec,
    pub row_count: usize,
    pub time: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub durations: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}

impl StatisticsReport {
    #[tracing::instrument(skip(table), fields(rows = table.len()))]
    pub fn compute(filters: FilterSpec, table: &TripTable) -> Self {
        if table.is_empty() {
            info!(city = %filters.city, month = %filters.month, day = %filters.day, "No trips match the filters");
        }

        let time = timed(|| time_stats(table));
        let stations = timed(|| station_stats(table));
        let durations = timed(|| duration_stats(table));
        let users = timed(|| user_stats(table));

        info!(
            time_secs = time.elapsed.as_secs_f64(),
            stations_secs = stations.elapsed.as_secs_f64(),
            durations_secs = durations.elapsed.as_secs_f64(),
            users_secs = users.elapsed.as_secs_f64(),
            "Statistics computed"
        );

        StatisticsReport {
            filters,
            row_count: table.len(),
            time,
            stations,
            durations,
            users,
        }
    }

    /// True when the filtered table had no rows, so every mode is undefined.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }
}
