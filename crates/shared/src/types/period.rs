//! Calendar periods and Australian financial years.
//!
//! A reconciliation, a claim and a pro-rata calculation all refer to one
//! calendar month. Financial years run July to June and are labelled by both
//! calendar years, e.g. `2025-26`.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a period or financial year.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1-12.
    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    /// Year outside the supported calendar.
    #[error("Year {0} is outside the supported calendar range")]
    YearOutOfRange(i32),

    /// Text could not be parsed as a period or financial year.
    #[error("Invalid period key: {0}")]
    InvalidKey(String),
}

impl PeriodError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "INVALID_MONTH",
            Self::YearOutOfRange(_) => "YEAR_OUT_OF_RANGE",
            Self::InvalidKey(_) => "INVALID_PERIOD_KEY",
        }
    }
}

/// A calendar month, e.g. February 2026.
///
/// Ordered chronologically. Serialized as `{ "month": 2, "year": 2026 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodParts", into = "PeriodParts")]
pub struct Period {
    first_day: NaiveDate,
}

/// Wire form of a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodParts {
    /// Month of the year (1-12).
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl Period {
    /// Creates a period for the given calendar month.
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }
        let first_day =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::YearOutOfRange(year))?;
        Ok(Self { first_day })
    }

    /// Returns the period containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// Month of the year (1-12).
    #[must_use]
    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    /// Number of days in the period.
    #[must_use]
    pub fn days(self) -> u32 {
        self.last_day().day()
    }

    /// First day of the period.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        self.first_day
    }

    /// Last day of the period.
    ///
    /// The final month chrono supports has no successor and ends on
    /// `NaiveDate::MAX`.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if the date falls within this period.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date >= self.first_day && date <= self.last_day()
    }

    /// The preceding month, or `None` at the start of the supported calendar.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.first_day
            .checked_sub_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// The following month, or `None` at the end of the supported calendar.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.first_day
            .checked_add_months(Months::new(1))
            .map(|first_day| Self { first_day })
    }

    /// The financial year this period belongs to.
    #[must_use]
    pub fn financial_year(self) -> FinancialYear {
        FinancialYear::containing(self.first_day)
    }

    /// Human readable label, e.g. `February 2026`.
    #[must_use]
    pub fn label(self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

impl TryFrom<PeriodParts> for Period {
    type Error = PeriodError;

    fn try_from(parts: PeriodParts) -> Result<Self, Self::Error> {
        Self::new(parts.year, parts.month)
    }
}

impl From<Period> for PeriodParts {
    fn from(period: Period) -> Self {
        Self {
            month: period.month(),
            year: period.year(),
        }
    }
}

/// File-safe key, e.g. `2026-02`.
impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl std::str::FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError::InvalidKey(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// An Australian financial year, 1 July to 30 June.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FinancialYear {
    start_year: i32,
}

impl FinancialYear {
    /// Creates the financial year starting 1 July of `start_year`.
    #[must_use]
    pub const fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    /// Returns the financial year containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() >= 7 {
            Self::new(date.year())
        } else {
            Self::new(date.year() - 1)
        }
    }

    /// Calendar year in which the financial year starts.
    #[must_use]
    pub const fn start_year(self) -> i32 {
        self.start_year
    }

    /// Returns true if the period falls within this financial year.
    #[must_use]
    pub fn contains(self, period: Period) -> bool {
        (period.year() == self.start_year && period.month() >= 7)
            || (period.year() == self.start_year + 1 && period.month() <= 6)
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{:02}",
            self.start_year,
            (self.start_year + 1).rem_euclid(100)
        )
    }
}

impl std::str::FromStr for FinancialYear {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PeriodError::InvalidKey(s.to_string());
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start_year = start.parse::<i32>().map_err(|_| invalid())?;
        let end_suffix = end.parse::<i32>().map_err(|_| invalid())?;
        if end.len() != 2 || (start_year + 1).rem_euclid(100) != end_suffix {
            return Err(invalid());
        }
        Ok(Self::new(start_year))
    }
}

impl TryFrom<String> for FinancialYear {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FinancialYear> for String {
    fn from(value: FinancialYear) -> Self {
        value.to_string()
    }
}
