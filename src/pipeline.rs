//! Load, derive and filter: everything one query needs before aggregation.

use std::path::Path;
use tracing::info;

use crate::derive::{TripTable, derive_fields};
use crate::error::Result;
use crate::filter;
use crate::loader::load_city;
use crate::query::{City, FilterSpec};

/// Loads `city` from `data_dir` and derives its time fields.
pub fn load_prepared(data_dir: &Path, city: City) -> Result<TripTable> {
    let raw = load_city(data_dir, city)?;
    Ok(derive_fields(raw)?)
}

/// Runs one query from scratch and returns the filtered table.
///
/// Nothing is cached between calls: every query reloads its city.
#[tracing::instrument(skip(data_dir, spec), fields(city = %spec.city, month = %spec.month, day = %spec.day))]
pub fn run_query(data_dir: &Path, spec: &FilterSpec) -> Result<TripTable> {
    let table = load_prepared(data_dir, spec.city)?;
    let total = table.len();
    let filtered = filter::apply(table, spec.month, spec.day);
    info!(total, matched = filtered.len(), "Query prepared");
    Ok(filtered)
}
