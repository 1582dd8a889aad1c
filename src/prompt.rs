//! Interactive questions for the `explore` session.
//!
//! Answers are checked against the closed choice sets and re-asked until
//! valid, so callers only ever receive validated values.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::query::{City, DayFilter, FilterSpec, MonthFilter};

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Mutable access to the output stream, for writing results between
    /// questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_answer(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_lowercase())
    }

    /// Asks `question` until the answer parses as `T`, printing `hint` after
    /// each rejected answer.
    pub fn ask<T: FromStr>(&mut self, question: &str, hint: &str) -> io::Result<T> {
        loop {
            let answer = self.read_answer(question)?;
            match answer.parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(answer = %answer, "Rejected answer");
                    writeln!(self.output, "{hint}")?;
                }
            }
        }
    }

    /// Asks a yes/no question. Accepts `y`/`yes` and `n`/`no`.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        loop {
            match self.read_answer(question)?.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer 'y' or 'n'.")?,
            }
        }
    }

    /// Asks for city, month and day in turn.
    pub fn get_filters(&mut self) -> io::Result<FilterSpec> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city: City = self.ask(
            "Would you like to see data for chicago, new york city or washington?\n",
            "Invalid input! Enter one of: chicago, new york city, washington.",
        )?;
        let month: MonthFilter = self.ask(
            "Which month? Enter january, february, march, april, may, june, or 'all'.\n",
            "Invalid input! Enter january, february, march, april, may, june or all.",
        )?;
        let day: DayFilter = self.ask(
            "Which day? Enter sunday, monday, tuesday, wednesday, thursday, friday, saturday, or 'all'.\n",
            "Invalid input! Enter a day name from sunday to saturday, or all.",
        )?;

        writeln!(self.output, "{}", "-".repeat(40))?;
        Ok(FilterSpec::new(city, month, day))
    }
}
