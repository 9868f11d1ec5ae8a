//! Summary counters over the unfiltered task list.

use crate::task::domain::{CalendarDate, Task, TaskStatus};
use serde::Serialize;

/// Headline counts shown above the workspace views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    /// Not done and due before today.
    pub overdue: usize,
    /// Not done and due today.
    pub due_today: usize,
    /// Currently in progress.
    pub in_progress: usize,
    /// Neither done nor cancelled.
    pub total: usize,
}

impl TaskStats {
    /// Computes all four counters.
    #[must_use]
    pub fn compute(tasks: &[Task], today: CalendarDate) -> Self {
        Self {
            overdue: count_overdue(tasks, today),
            due_today: count_due_today(tasks, today),
            in_progress: count_in_progress(tasks),
            total: count_open(tasks),
        }
    }
}

/// Counts tasks not done whose due date lies before `today`.
#[must_use]
pub fn count_overdue(tasks: &[Task], today: CalendarDate) -> usize {
    tasks
        .iter()
        .filter(|task| task.status() != TaskStatus::Done)
        .filter(|task| task.due_date().is_some_and(|due| due < today))
        .count()
}

/// Counts tasks not done that are due on `today`.
#[must_use]
pub fn count_due_today(tasks: &[Task], today: CalendarDate) -> usize {
    tasks
        .iter()
        .filter(|task| task.status() != TaskStatus::Done)
        .filter(|task| task.due_date() == Some(today))
        .count()
}

/// Counts tasks in progress.
#[must_use]
pub fn count_in_progress(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter(|task| task.status() == TaskStatus::InProgress)
        .count()
}

/// Counts tasks that are neither done nor cancelled.
#[must_use]
pub fn count_open(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| task.is_open()).count()
}
