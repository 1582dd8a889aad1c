pub mod derive;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod paginate;
pub mod pipeline;
pub mod prompt;
pub mod query;
pub mod stats;

pub use derive::{TripRecord, TripTable};
pub use error::{DataSourceError, Error, ParseError, Result};
pub use query::{City, DayFilter, FilterSpec, MonthFilter};
pub use stats::StatisticsReport;
