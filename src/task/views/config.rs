//! Configuration for the workspace view derivation.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::ViewMode;

/// First column of the month calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// Returns the weekday shown in the first column.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// Returns how many cells precede `day` in a week starting here.
    #[must_use]
    pub fn offset_of(self, day: Weekday) -> u32 {
        let start = self.weekday().num_days_from_sunday();
        let target = day.num_days_from_sunday();
        if target >= start {
            target - start
        } else {
            target + 7 - start
        }
    }
}

/// Tunables for bucketing, grouping, and the calendar.
///
/// # Examples
///
/// ```
/// use showrunner::task::views::MyTasksConfig;
///
/// let config = MyTasksConfig::default();
/// assert_eq!(config.this_week_until_days, 7);
/// assert_eq!(config.next_week_until_days, 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MyTasksConfig {
    /// Last day offset (inclusive) classified as "this week".
    pub this_week_until_days: u32,
    /// Last day offset (inclusive) classified as "next week".
    pub next_week_until_days: u32,
    /// First column of the calendar grid.
    pub week_start: WeekStart,
    /// Group name for tasks without a project.
    pub unassigned_label: String,
    /// View shown when the workspace opens.
    pub default_view: ViewMode,
}

impl Default for MyTasksConfig {
    fn default() -> Self {
        Self {
            this_week_until_days: 7,
            next_week_until_days: 14,
            week_start: WeekStart::Sunday,
            unassigned_label: "No Project".to_owned(),
            default_view: ViewMode::List,
        }
    }
}

impl MyTasksConfig {
    /// Creates a configuration with Monday-first calendar weeks.
    #[must_use]
    pub fn monday_first() -> Self {
        Self {
            week_start: WeekStart::Monday,
            ..Default::default()
        }
    }
}
