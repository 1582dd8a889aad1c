//! Descriptive statistics over a filtered trip table.
//!
//! Each group is computed independently and never mutates the table. Groups
//! built on a mode report `None` for an empty table; sums report zero.

pub mod duration;
pub mod frequency;
pub mod report;
pub mod station;
pub mod time;
pub mod user;

pub use report::{StatisticsReport, Timed};

#[cfg(test)]
pub(crate) mod test_support;
