//! Open-task filter and free-text search.

use crate::task::domain::Task;

/// Case-insensitive search over task titles and project names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    needle: Option<String>,
}

impl TaskQuery {
    /// Builds a query from raw search text. Empty text matches everything.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let needle = (!raw.is_empty()).then(|| raw.to_lowercase());
        Self { needle }
    }

    /// Returns `true` when the query matches every task.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Tests a task against the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        task.title().to_lowercase().contains(needle)
            || task
                .project()
                .is_some_and(|project| project.name().to_lowercase().contains(needle))
    }
}

/// Keeps open tasks matching `query`, preserving input order.
#[must_use]
pub fn filter_open_tasks<'a>(tasks: &'a [Task], query: &TaskQuery) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.is_open())
        .filter(|task| query.matches(task))
        .collect()
}
