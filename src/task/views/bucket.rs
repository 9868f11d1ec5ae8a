//! Time-bucket classification of due dates.

use crate::task::domain::{CalendarDate, Tone};
use serde::{Deserialize, Serialize};

use super::MyTasksConfig;

/// Due-date proximity category. Every task falls in exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    /// Due before today.
    Overdue,
    /// Due today.
    Today,
    /// Due tomorrow.
    Tomorrow,
    /// Due within the current week horizon.
    ThisWeek,
    /// Due within the following week horizon.
    NextWeek,
    /// Due further out, or undated.
    Later,
}

impl TimeBucket {
    /// Display order of the buckets.
    pub const ORDER: [Self; 6] = [
        Self::Overdue,
        Self::Today,
        Self::Tomorrow,
        Self::ThisWeek,
        Self::NextWeek,
        Self::Later,
    ];

    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this_week",
            Self::NextWeek => "next_week",
            Self::Later => "later",
        }
    }

    /// Returns the group heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This Week",
            Self::NextWeek => "Next Week",
            Self::Later => "Later",
        }
    }

    /// Returns the heading colour intent.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Overdue => Tone::Danger,
            Self::Today => Tone::Warning,
            Self::Tomorrow | Self::ThisWeek => Tone::Info,
            Self::NextWeek | Self::Later => Tone::Neutral,
        }
    }
}

/// Classifies a due date relative to `today`.
///
/// Undated tasks land in [`TimeBucket::Later`].
#[must_use]
pub fn classify(due: Option<CalendarDate>, today: CalendarDate, config: &MyTasksConfig) -> TimeBucket {
    let Some(due) = due else {
        return TimeBucket::Later;
    };
    let diff = today.days_until(due);
    let this_week = i64::from(config.this_week_until_days);
    let next_week = i64::from(config.next_week_until_days);

    match diff {
        d if d < 0 => TimeBucket::Overdue,
        0 => TimeBucket::Today,
        1 => TimeBucket::Tomorrow,
        d if d <= this_week => TimeBucket::ThisWeek,
        d if d <= next_week => TimeBucket::NextWeek,
        _ => TimeBucket::Later,
    }
}
