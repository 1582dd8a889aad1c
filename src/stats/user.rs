//! Rider breakdowns: user types, and gender and birth year where the city
//! records them.

use serde::Serialize;
use tracing::debug;

use crate::derive::TripTable;
use crate::stats::frequency::{FrequencyCount, Popular};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    /// Every user type with its trip count, most common first.
    pub user_types: Vec<Popular<String>>,
    /// `None` when the dataset has no gender and birth year columns.
    pub demographics: Option<Demographics>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Demographics {
    pub genders: Vec<Popular<String>>,
    pub earliest_birth_year: Option<i32>,
    pub most_recent_birth_year: Option<i32>,
    pub most_common_birth_year: Option<Popular<i32>>,
}

fn distribution<'a>(values: impl Iterator<Item = Option<&'a String>>) -> Vec<Popular<String>> {
    let counts: FrequencyCount<&str> = values.flatten().map(String::as_str).collect();
    counts
        .most_common()
        .into_iter()
        .map(|p| Popular {
            value: p.value.to_string(),
            count: p.count,
        })
        .collect()
}

/// User type counts, plus gender counts and birth year range and mode when
/// the table has demographic columns. Missing values are not counted.
#[tracing::instrument(skip_all, fields(rows = table.len(), has_demographics = table.has_demographics()))]
pub fn user_stats(table: &TripTable) -> UserStats {
    let rows = table.rows();
    let user_types = distribution(rows.iter().map(|t| t.user_type.as_ref()));

    let demographics = if table.has_demographics() {
        let years: Vec<i32> = rows.iter().filter_map(|t| t.birth_year).collect();
        let year_counts: FrequencyCount<i32> = years.iter().copied().collect();
        Some(Demographics {
            genders: distribution(rows.iter().map(|t| t.gender.as_ref())),
            earliest_birth_year: years.iter().copied().min(),
            most_recent_birth_year: years.iter().copied().max(),
            most_common_birth_year: year_counts.mode(),
        })
    } else {
        debug!("No gender or birth year columns, skipping demographics");
        None
    };

    UserStats {
        user_types,
        demographics,
    }
}
