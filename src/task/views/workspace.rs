//! Combined view model: stats plus the active view.

use crate::task::domain::{CalendarDate, Task};

use super::{
    CalendarGrid, MyTasksConfig, MyTasksState, ProjectGroup, TaskStats, TimeGroup, ViewMode,
    build_calendar, filter_open_tasks, group_by_project, group_by_time,
};

/// Payload of the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent<'a> {
    /// Time-bucketed list.
    Timeline(Vec<TimeGroup<'a>>),
    /// Project groups.
    Projects(Vec<ProjectGroup<'a>>),
    /// Month calendar.
    Calendar(CalendarGrid<'a>),
}

/// Everything the workspace renders for one task snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyTasksView<'a> {
    /// Counters over the unfiltered snapshot.
    pub stats: TaskStats,
    /// Open tasks matching the search.
    pub visible: Vec<&'a Task>,
    /// Active view payload.
    pub content: ViewContent<'a>,
}

/// Derives the workspace view from a task snapshot and the local UI state.
///
/// Stats are computed over `tasks` as given; the active view only sees open
/// tasks matching the search text.
#[must_use]
pub fn derive_view<'a>(
    tasks: &'a [Task],
    state: &MyTasksState,
    today: CalendarDate,
    config: &MyTasksConfig,
) -> MyTasksView<'a> {
    let stats = TaskStats::compute(tasks, today);
    let visible = filter_open_tasks(tasks, &state.query());

    let content = match state.view_mode() {
        ViewMode::List => ViewContent::Timeline(group_by_time(&visible, today, config)),
        ViewMode::ByProject => ViewContent::Projects(group_by_project(&visible, config)),
        ViewMode::Calendar => ViewContent::Calendar(build_calendar(
            &visible,
            state.month(),
            today,
            config.week_start,
        )),
    };

    MyTasksView {
        stats,
        visible,
        content,
    }
}
