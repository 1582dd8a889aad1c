//! Narrows a [`TripTable`] to the selected month and weekday.

use tracing::info;

use crate::derive::{TripRecord, TripTable};
use crate::query::{DayFilter, MonthFilter};

/// Whether `trip` passes both the month and the day filter.
pub fn matches(trip: &TripRecord, month: MonthFilter, day: DayFilter) -> bool {
    let month_ok = month.ordinal().is_none_or(|m| trip.month == m);
    let day_ok = day
        .name()
        .is_none_or(|d| trip.weekday_name.eq_ignore_ascii_case(d));
    month_ok && day_ok
}

/// Keeps the rows of `table` matching `month` and `day`, in their original
/// order. The input table is consumed.
///
/// Filtering on a month the data does not cover gives an empty table.
#[tracing::instrument(skip(table), fields(rows_in = table.len()))]
pub fn apply(table: TripTable, month: MonthFilter, day: DayFilter) -> TripTable {
    if month == MonthFilter::All && day == DayFilter::All {
        return table;
    }

    let has_demographics = table.has_demographics();
    let rows: Vec<TripRecord> = table
        .into_rows()
        .into_iter()
        .filter(|trip| matches(trip, month, day))
        .collect();

    info!(rows_out = rows.len(), "Filter applied");
    TripTable::new(rows, has_demographics)
}
