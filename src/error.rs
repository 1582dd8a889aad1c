//! Error types for loading and preparing trip data.
//!
//! Both kinds are fatal for the query that raised them. Empty results are not
//! errors and never show up here.

use std::path::PathBuf;

/// Result type for the data pipeline.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The backing file for a city is missing, unreadable, or not shaped like a
/// trip log.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} row {row}: {column} value {value:?} is not a number", path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("{} is missing required column {column:?}", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// A `Start Time` value that does not match any accepted timestamp format.
#[derive(Debug, thiserror::Error)]
#[error("row {row}: cannot parse start time {value:?}: {source}")]
pub struct ParseError {
    /// One-based data row, not counting the header.
    pub row: usize,
    pub value: String,
    #[source]
    pub source: chrono::ParseError,
}
