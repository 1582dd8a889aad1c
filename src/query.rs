//! The closed sets of values a query can be made with.
//!
//! Everything here is already validated: parsing from text happens once at the
//! input boundary (CLI arguments or the interactive prompt), and the rest of
//! the crate only ever sees these enums.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Source file for each supported city, relative to the data directory.
pub static CITY_DATA: &[(City, &str)] = &[
    (City::Chicago, "chicago.csv"),
    (City::NewYorkCity, "new_york_city.csv"),
    (City::Washington, "washington.csv"),
];

/// Month names that can be filtered on, in calendar order. The datasets only
/// cover January to June.
pub static MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Day names that can be filtered on, in the order they are offered to users.
pub static DAYS: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    #[value(alias = "new_york_city", alias = "new york city")]
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of this city's dataset.
    pub fn source_file(self) -> &'static str {
        CITY_DATA
            .iter()
            .find(|(city, _)| *city == self)
            .map(|(_, file)| *file)
            .unwrap_or_else(|| unreachable!("every City has an entry in CITY_DATA"))
    }

    pub fn label(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for City {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(InvalidChoice::new("city", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    January,
    February,
    March,
    April,
    May,
    June,
    #[default]
    All,
}

impl MonthFilter {
    /// Calendar month number (1 = January), or `None` when not filtering.
    pub fn ordinal(self) -> Option<u32> {
        let name = self.name()?;
        MONTHS
            .iter()
            .position(|m| *m == name)
            .map(|index| index as u32 + 1)
    }

    /// Lowercase month name, or `None` for [`MonthFilter::All`].
    pub fn name(self) -> Option<&'static str> {
        match self {
            MonthFilter::January => Some("january"),
            MonthFilter::February => Some("february"),
            MonthFilter::March => Some("march"),
            MonthFilter::April => Some("april"),
            MonthFilter::May => Some("may"),
            MonthFilter::June => Some("june"),
            MonthFilter::All => None,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("all"))
    }
}

impl FromStr for MonthFilter {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <MonthFilter as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| InvalidChoice::new("month", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    #[default]
    All,
}

impl DayFilter {
    /// Lowercase day name, or `None` for [`DayFilter::All`].
    pub fn name(self) -> Option<&'static str> {
        match self {
            DayFilter::Sunday => Some("sunday"),
            DayFilter::Monday => Some("monday"),
            DayFilter::Tuesday => Some("tuesday"),
            DayFilter::Wednesday => Some("wednesday"),
            DayFilter::Thursday => Some("thursday"),
            DayFilter::Friday => Some("friday"),
            DayFilter::Saturday => Some("saturday"),
            DayFilter::All => None,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("all"))
    }
}

impl FromStr for DayFilter {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <DayFilter as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| InvalidChoice::new("day", s))
    }
}

/// One validated query: which city to load and how to narrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSpec {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        FilterSpec { city, month, day }
    }
}

/// Raw text that is not one of the accepted choices for a filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} {value:?}")]
pub struct InvalidChoice {
    pub kind: &'static str,
    pub value: String,
}

impl InvalidChoice {
    fn new(kind: &'static str, value: &str) -> Self {
        InvalidChoice {
            kind,
            value: value.to_string(),
        }
    }
}
