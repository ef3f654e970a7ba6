//! A single calendar month.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// A calendar month with its first and last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthPeriod {
    year: i32,
    month: u32,
    start: NaiveDate,
    end: NaiveDate,
}

impl MonthPeriod {
    /// Creates the period for `year`-`month`.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` if the month is not 1..=12 or the
    /// year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self::containing)
            .ok_or(PeriodError::InvalidMonth { year, month })
    }

    /// The month a date falls in.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        // Only the last month of chrono's calendar has no successor.
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX);
        Self {
            year: date.year(),
            month: date.month(),
            start,
            end,
        }
    }

    /// Year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-based.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the month.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if the date falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// The following month.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::OutOfRange` at the end of chrono's calendar.
    pub fn next(&self) -> Result<Self, PeriodError> {
        self.start
            .checked_add_months(Months::new(1))
            .map(Self::containing)
            .ok_or(PeriodError::OutOfRange)
    }

    /// The preceding month.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::OutOfRange` at the start of chrono's calendar.
    pub fn previous(&self) -> Result<Self, PeriodError> {
        self.start
            .checked_sub_months(Months::new(1))
            .map(Self::containing)
            .ok_or(PeriodError::OutOfRange)
    }

    /// The twelve months of a year.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::InvalidMonth` if the year is outside chrono's
    /// range.
    pub fn months_of(year: i32) -> Result<Vec<Self>, PeriodError> {
        (1..=12).map(|month| Self::new(year, month)).collect()
    }
}

impl std::fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
