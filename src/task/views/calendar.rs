//! Month calendar grid with tasks attached to their due dates.

use crate::task::domain::{CalendarDate, Task, TaskDomainError};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::fmt;

use super::WeekStart;

/// Number of cells in every calendar grid (six weeks of seven days).
pub const CALENDAR_CELLS: usize = 42;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;

// Widest leading pad, and the last cell's distance from the first of the month.
const MAX_LEADING_DAYS: u64 = 6;
const MAX_TRAILING_DAYS: u64 = 41;

/// Whether the whole six-week window of the month starting on `first` is
/// representable.
fn window_fits(first: NaiveDate) -> bool {
    first.checked_sub_days(Days::new(MAX_LEADING_DAYS)).is_some()
        && first.checked_add_days(Days::new(MAX_TRAILING_DAYS)).is_some()
}

/// A month shown by the calendar view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    /// Creates a month from its year and 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidMonth`] when the month is not in
    /// `1..=12`, or when its six-week grid would run past the supported date
    /// range (the first and last month `chrono` can represent).
    pub fn new(year: i32, month: u32) -> Result<Self, TaskDomainError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|first| window_fits(*first))
            .map(|first| Self { first })
            .ok_or(TaskDomainError::InvalidMonth { year, month })
    }

    /// Returns the month containing `date`.
    ///
    /// Dates in the first or last representable month map to the nearest
    /// month whose grid fits the supported range.
    #[must_use]
    pub fn containing(date: CalendarDate) -> Self {
        let first = date
            .checked_sub_days(u64::from(date.day().saturating_sub(1)))
            .unwrap_or(date)
            .as_naive();
        if window_fits(first) {
            return Self { first };
        }
        let neighbour = if first.checked_sub_days(Days::new(MAX_LEADING_DAYS)).is_none() {
            first.checked_add_months(Months::new(1))
        } else {
            first.checked_sub_months(Months::new(1))
        };
        Self {
            first: neighbour.unwrap_or(first),
        }
    }

    /// Returns the calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.first.year()
    }

    /// Returns the 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.first.month()
    }

    /// Returns the first day of the month.
    #[must_use]
    pub const fn first_day(self) -> CalendarDate {
        CalendarDate::from_naive(self.first)
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        match self.month() {
            4 | 6 | 9 | 11 => 30,
            2 if NaiveDate::from_ymd_opt(self.year(), 2, 29).is_some() => 29,
            2 => 28,
            _ => 31,
        }
    }

    /// Returns the previous month, staying put at the earliest supported month.
    #[must_use]
    pub fn prev(self) -> Self {
        self.shifted(self.first.checked_sub_months(Months::new(1)))
    }

    /// Returns the next month, staying put at the latest supported month.
    #[must_use]
    pub fn next(self) -> Self {
        self.shifted(self.first.checked_add_months(Months::new(1)))
    }

    /// Returns `true` when `date` falls in this month.
    #[must_use]
    pub fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    fn shifted(self, candidate: Option<NaiveDate>) -> Self {
        candidate
            .filter(|first| window_fits(*first))
            .map_or(self, |first| Self { first })
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%B %Y"))
    }
}

/// One day of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell<'a> {
    /// The day shown.
    pub date: CalendarDate,
    /// `false` for padding days from the adjacent months.
    pub is_current_month: bool,
    /// `true` for the local current day.
    pub is_today: bool,
    /// Tasks due on this day; always empty for padding days.
    pub tasks: Vec<&'a Task>,
}

/// A six-week month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid<'a> {
    month: CalendarMonth,
    cells: Vec<CalendarCell<'a>>,
}

impl<'a> CalendarGrid<'a> {
    /// Returns the month the grid was built for.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Returns all 42 cells, row by row.
    #[must_use]
    pub fn cells(&self) -> &[CalendarCell<'a>] {
        &self.cells
    }

    /// Iterates the six grid rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'a>]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Returns the cell showing `date`, if the grid covers it.
    #[must_use]
    pub fn cell_for(&self, date: CalendarDate) -> Option<&CalendarCell<'a>> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}

/// Builds the 42-cell grid for `month`.
///
/// The grid starts with the trailing days of the previous month so that the
/// first of `month` sits under its weekday column, then fills up with the
/// leading days of the next month. Tasks attach only to days of `month`.
/// Every [`CalendarMonth`] has a representable grid, so the result always
/// holds [`CALENDAR_CELLS`] cells.
#[must_use]
pub fn build_calendar<'a>(
    tasks: &[&'a Task],
    month: CalendarMonth,
    today: CalendarDate,
    week_start: WeekStart,
) -> CalendarGrid<'a> {
    let first = month.first_day();
    let start_pad = week_start.offset_of(first.weekday());
    let grid_start = first
        .checked_sub_days(u64::from(start_pad))
        .map_or(month.first, CalendarDate::as_naive);

    let cells = grid_start
        .iter_days()
        .take(CALENDAR_CELLS)
        .map(|day| {
            let date = CalendarDate::from_naive(day);
            let is_current_month = month.contains(date);
            let tasks = if is_current_month {
                tasks
                    .iter()
                    .copied()
                    .filter(|task| task.due_date() == Some(date))
                    .collect()
            } else {
                Vec::new()
            };
            CalendarCell {
                date,
                is_current_month,
                is_today: date == today,
                tasks,
            }
        })
        .collect();

    CalendarGrid { month, cells }
}
