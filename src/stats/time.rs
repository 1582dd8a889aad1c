//! Most frequent times of travel.

use serde::Serialize;
use tracing::debug;

use crate::derive::TripTable;
use crate::stats::frequency::{FrequencyCount, Popular};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: Option<Popular<u32>>,
    pub weekday: Option<Popular<String>>,
    pub hour: Option<Popular<u32>>,
}

/// Modes of the month, weekday and start hour columns. All `None` for an
/// empty table.
#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn time_stats(table: &TripTable) -> TimeStats {
    let rows = table.rows();
    let months: FrequencyCount<u32> = rows.iter().map(|t| t.month).collect();
    let weekdays: FrequencyCount<&str> = rows.iter().map(|t| t.weekday_name).collect();
    let hours: FrequencyCount<u32> = rows.iter().map(|t| t.hour).collect();

    let stats = TimeStats {
        month: months.mode(),
        weekday: weekdays.mode().map(|p| Popular {
            value: p.value.to_string(),
            count: p.count,
        }),
        hour: hours.mode(),
    };
    debug!(?stats, "Time of travel computed");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::{table_of, trip_at};

    #[test]
    fn test_modes_from_scenario() {
        let table = table_of(vec![
            trip_at("2017-01-02 08:10:00"), // Monday
            trip_at("2017-01-02 08:45:00"), // Monday
            trip_at("2017-02-07 09:00:00"), // Tuesday
        ]);
        let stats = time_stats(&table);
        assert_eq!(stats.month, Some(Popular { value: 1, count: 2 }));
        assert_eq!(stats.weekday.unwrap().value, "Monday");
        assert_eq!(stats.hour, Some(Popular { value: 8, count: 2 }));
    }

    #[test]
    fn test_hour_tie_goes_to_first_row() {
        let table = table_of(vec![
            trip_at("2017-03-01 17:00:00"),
            trip_at("2017-03-01 07:00:00"),
            trip_at("2017-03-02 07:30:00"),
            trip_at("2017-03-02 17:30:00"),
        ]);
        assert_eq!(time_stats(&table).hour.unwrap().value, 17);
    }

    #[test]
    fn test_empty_table_has_no_modes() {
        let stats = time_stats(&table_of(vec![]));
        assert_eq!(stats.month, None);
        assert_eq!(stats.weekday, None);
        assert_eq!(stats.hour, None);
    }
}
