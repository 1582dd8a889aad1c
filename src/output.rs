//! Output formatting for statistics reports and raw trip rows.
//!
//! Supports JSON serialization, a human-readable report, and CSV rendering of
//! row pages.

use anyhow::Result;
use std::io::{self, Write};

use crate::derive::TripRecord;
use crate::stats::StatisticsReport;
use crate::stats::frequency::Popular;

const RULE_WIDTH: usize = 40;
const NO_DATA: &str = "no data";

/// Writes a report as pretty-printed JSON.
pub fn write_json<W: Write>(mut out: W, report: &StatisticsReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

fn popular<T: std::fmt::Display>(value: Option<&Popular<T>>) -> String {
    match value {
        Some(p) => format!("{} (count: {})", p.value, p.count),
        None => NO_DATA.to_string(),
    }
}

fn section_footer<W: Write>(out: &mut W, elapsed_secs: f64) -> io::Result<()> {
    writeln!(out, "\nThis took {elapsed_secs:.6} seconds.")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

/// Writes the four statistic groups as readable text, each followed by the
/// time it took to compute.
pub fn write_report<W: Write>(mut out: W, report: &StatisticsReport) -> io::Result<()> {
    let out = &mut out;
    let filters = &report.filters;
    writeln!(
        out,
        "{} trips for {} (month: {}, day: {})",
        report.row_count, filters.city, filters.month, filters.day
    )?;
    if report.is_empty() {
        writeln!(out, "No trips match these filters; every statistic below is {NO_DATA}.")?;
    }

    let time = &report.time.stats;
    writeln!(out, "\nThe Most Frequent Times of Travel\n")?;
    writeln!(out, "Most common month: {}", popular(time.month.as_ref()))?;
    writeln!(out, "Most common day of week: {}", popular(time.weekday.as_ref()))?;
    writeln!(out, "Most common start hour: {}", popular(time.hour.as_ref()))?;
    section_footer(out, report.time.elapsed.as_secs_f64())?;

    let stations = &report.stations.stats;
    writeln!(out, "\nThe Most Popular Stations and Trip\n")?;
    writeln!(
        out,
        "Most common start station: {}",
        popular(stations.start_station.as_ref())
    )?;
    writeln!(
        out,
        "Most common end station: {}",
        popular(stations.end_station.as_ref())
    )?;
    match &stations.trip {
        Some(trip) => writeln!(
            out,
            "Most frequent trip: {} -> {} (count: {})",
            trip.value.start, trip.value.end, trip.count
        )?,
        None => writeln!(out, "Most frequent trip: {NO_DATA}")?,
    }
    section_footer(out, report.stations.elapsed.as_secs_f64())?;

    let durations = &report.durations.stats;
    writeln!(out, "\nTrip Duration\n")?;
    writeln!(out, "Total travel time: {} seconds", durations.total_secs)?;
    match durations.mean_secs {
        Some(mean) => writeln!(out, "Mean travel time: {mean:.2} seconds")?,
        None => writeln!(out, "Mean travel time: {NO_DATA}")?,
    }
    section_footer(out, report.durations.elapsed.as_secs_f64())?;

    let users = &report.users.stats;
    writeln!(out, "\nUser Stats\n")?;
    writeln!(out, "User types:")?;
    if users.user_types.is_empty() {
        writeln!(out, "  {NO_DATA}")?;
    }
    for p in &users.user_types {
        writeln!(out, "  {}: {}", p.value, p.count)?;
    }
    match &users.demographics {
        Some(demo) => {
            writeln!(out, "Gender:")?;
            if demo.genders.is_empty() {
                writeln!(out, "  {NO_DATA}")?;
            }
            for p in &demo.genders {
                writeln!(out, "  {}: {}", p.value, p.count)?;
            }
            let year = |y: Option<i32>| y.map_or(NO_DATA.to_string(), |y| y.to_string());
            writeln!(out, "Earliest birth year: {}", year(demo.earliest_birth_year))?;
            writeln!(
                out,
                "Most recent birth year: {}",
                year(demo.most_recent_birth_year)
            )?;
            writeln!(
                out,
                "Most common birth year: {}",
                popular(demo.most_common_birth_year.as_ref())
            )?;
        }
        None => writeln!(out, "Gender and birth year are not recorded for this city.")?,
    }
    section_footer(out, report.users.elapsed.as_secs_f64())
}

/// Writes a page of trips as CSV, with a header line when `with_header` is set.
pub fn write_rows<W: Write>(out: W, rows: &[TripRecord], with_header: bool) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(with_header)
        .from_writer(out);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::TripTable;
    use crate::query::{City, DayFilter, FilterSpec, MonthFilter};
    use crate::stats::test_support::{rider, table_of, table_without_demographics, trip_between};

    fn spec() -> FilterSpec {
        FilterSpec::new(City::Washington, MonthFilter::June, DayFilter::All)
    }

    fn render(table: &TripTable) -> String {
        let report = StatisticsReport::compute(spec(), table);
        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_json_is_valid() {
        let report = StatisticsReport::compute(spec(), &table_of(vec![trip_between("A", "B")]));
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["filters"]["month"], "june");
    }

    #[test]
    fn test_report_text_mentions_each_group() {
        let text = render(&table_of(vec![
            trip_between("A", "B"),
            rider(Some("Customer"), Some("Female"), Some(1990)),
        ]));

        assert!(text.contains("2 trips for washington (month: june, day: all)"));
        assert!(text.contains("Most common start hour: 8 (count: 2)"));
        assert!(text.contains("Most frequent trip: A -> B (count: 1)"));
        assert!(text.contains("Total travel time: 120 seconds"));
        assert!(text.contains("  Customer: 1"));
        assert!(text.contains("Most common birth year: 1990 (count: 1)"));
        assert_eq!(text.matches("This took").count(), 4);
        assert!(!text.contains("No trips match"));
    }

    #[test]
    fn test_report_text_without_demographics() {
        let text = render(&table_without_demographics(vec![trip_between("A", "B")]));
        assert!(text.contains("not recorded for this city"));
        assert!(!text.contains("Earliest birth year"));
    }

    #[test]
    fn test_report_text_on_empty_table() {
        let text = render(&table_of(vec![]));
        assert!(text.contains("0 trips for washington"));
        assert!(text.contains("No trips match these filters"));
        assert!(text.contains("Most common month: no data"));
        assert!(text.contains("Mean travel time: no data"));
    }

    #[test]
    fn test_write_rows_header_once() {
        let rows = vec![trip_between("A", "B"), trip_between("C", "D")];
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows, true).unwrap();
        write_rows(&mut buf, &rows[1..], false).unwrap();

        let content = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("start_time,"));
        assert_eq!(content.matches("start_station").count(), 1);
    }
}
