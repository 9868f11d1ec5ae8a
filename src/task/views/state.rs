//! Local UI state of one workspace instance.

use crate::task::domain::{CalendarDate, Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{CalendarMonth, MyTasksConfig, TaskQuery};

/// Active presentation of the filtered task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Tasks grouped by time bucket.
    #[default]
    List,
    /// Tasks grouped by project.
    ByProject,
    /// Month calendar.
    Calendar,
}

impl ViewMode {
    /// Returns the canonical identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::ByProject => "by_project",
            Self::Calendar => "calendar",
        }
    }
}

/// Search text, view mode, selection, and calendar cursor.
///
/// Owned by a single workspace instance and never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyTasksState {
    search: String,
    view_mode: ViewMode,
    selected: BTreeSet<TaskId>,
    month: CalendarMonth,
}

impl MyTasksState {
    /// Creates the initial state with the calendar on the month of `today`.
    #[must_use]
    pub fn new(today: CalendarDate, config: &MyTasksConfig) -> Self {
        Self {
            search: String::new(),
            view_mode: config.default_view,
            selected: BTreeSet::new(),
            month: CalendarMonth::containing(today),
        }
    }

    /// Returns the raw search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Returns the compiled search query.
    #[must_use]
    pub fn query(&self) -> TaskQuery {
        TaskQuery::new(&self.search)
    }

    /// Returns the active view mode.
    #[must_use]
    pub const fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Switches the active view mode.
    pub const fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Returns the selected task identifiers in ascending order.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<TaskId> {
        &self.selected
    }

    /// Returns `true` when the task is selected.
    #[must_use]
    pub fn is_selected(&self, id: TaskId) -> bool {
        self.selected.contains(&id)
    }

    /// Flips the selection of a task and returns whether it is now selected.
    pub fn toggle_selected(&mut self, id: TaskId) -> bool {
        if self.selected.remove(&id) {
            return false;
        }
        self.selected.insert(id);
        true
    }

    /// Selects every given task.
    pub fn select_all<'a>(&mut self, tasks: impl IntoIterator<Item = &'a Task>) {
        self.selected.extend(tasks.into_iter().map(Task::id));
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Returns the month shown by the calendar view.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Moves the calendar one month back.
    pub fn calendar_prev(&mut self) {
        self.month = self.month.prev();
    }

    /// Moves the calendar one month forward.
    pub fn calendar_next(&mut self) {
        self.month = self.month.next();
    }

    /// Moves the calendar to the month of `today`.
    pub fn calendar_today(&mut self, today: CalendarDate) {
        self.month = CalendarMonth::containing(today);
    }
}
