//! Pure derivation of the "My Tasks" views.
//!
//! Every function here is synchronous and side-effect free. The pipeline is:
//! snapshot -> stats (unfiltered) -> open/search filter -> one of time
//! buckets, project groups, or the month calendar.

mod bucket;
mod calendar;
mod config;
mod filter;
mod grouping;
mod state;
mod stats;
mod workspace;

pub use bucket::{TimeBucket, classify};
pub use calendar::{CALENDAR_CELLS, CalendarCell, CalendarGrid, CalendarMonth, DAYS_PER_WEEK, build_calendar};
pub use config::{MyTasksConfig, WeekStart};
pub use filter::{TaskQuery, filter_open_tasks};
pub use grouping::{ProjectGroup, ProjectKey, TimeGroup, group_by_project, group_by_time};
pub use state::{MyTasksState, ViewMode};
pub use stats::{TaskStats, count_due_today, count_in_progress, count_open, count_overdue};
pub use workspace::{MyTasksView, ViewContent, derive_view};
