//! Calendar-date value object used for due dates and day comparisons.
//!
//! Due dates carry no time-of-day semantics. Comparing two [`CalendarDate`]
//! values is plain calendar arithmetic, so daylight-saving transitions and
//! time zones never shift a task into a neighbouring day.

use super::TaskDomainError;
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A year/month/day triple without any time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month, and day numbers.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the triple does not
    /// name a real calendar day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, TaskDomainError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| TaskDomainError::InvalidDueDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Wraps an existing `chrono` date.
    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the local calendar day of the clock's current instant.
    #[must_use]
    pub fn today(clock: &impl Clock) -> Self {
        Self(clock.local().date_naive())
    }

    /// Parses a wire date.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and offset-less
    /// `YYYY-MM-DDTHH:MM:SS` timestamps. Timestamps keep the calendar date as
    /// written; no offset conversion is applied.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] for any other input.
    pub fn parse(raw: &str) -> Result<Self, TaskDomainError> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
            return Ok(Self(date));
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(stamp.date_naive()));
        }
        NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT)
            .map(|stamp| Self(stamp.date()))
            .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month number (1-based).
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month (1-based).
    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Returns the day of the week.
    #[must_use]
    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the number of whole days from `self` to `other`.
    ///
    /// Negative when `other` lies before `self`.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Returns the date `days` days later, or `None` past the supported range.
    #[must_use]
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0.checked_add_days(Days::new(days)).map(Self)
    }

    /// Returns the date `days` days earlier, or `None` past the supported range.
    #[must_use]
    pub fn checked_sub_days(self, days: u64) -> Option<Self> {
        self.0.checked_sub_days(Days::new(days)).map(Self)
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Formats the date as `YYYY-MM-DD`.
    #[must_use]
    pub fn iso(self) -> String {
        self.0.format(ISO_DATE_FORMAT).to_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for CalendarDate {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        value.iso()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}
