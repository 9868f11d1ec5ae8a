//! In-memory task source for tests and embedding.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId, TaskRecord},
    ports::{TaskSource, TaskSourceError, TaskSourceResult},
};

/// Thread-safe in-memory stand-in for the task API.
///
/// Tasks are served in insertion order. An outage can be switched on to make
/// every call fail with [`TaskSourceError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskSource {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    outage: Option<String>,
    completion_calls: Vec<TaskId>,
}

fn lock_error(err: &impl ToString) -> TaskSourceError {
    TaskSourceError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryTaskSource {
    /// Creates an empty task source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a task source serving `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = InMemoryTaskState {
            tasks: tasks.into_iter().collect(),
            ..InMemoryTaskState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Creates a task source from a JSON array of API task records.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the payload is not valid
    /// JSON for task records, or [`TaskSourceError::MalformedRecord`] when a
    /// record fails validation.
    pub fn from_json(payload: &str) -> TaskSourceResult<Self> {
        let records: Vec<TaskRecord> =
            serde_json::from_str(payload).map_err(TaskSourceError::transport)?;
        let tasks = records
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::with_tasks(tasks))
    }

    /// Adds a task, replacing any task with the same identifier in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the state lock is poisoned.
    pub fn insert(&self, task: Task) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        match state.tasks.iter_mut().find(|existing| existing.id() == task.id()) {
            Some(existing) => *existing = task,
            None => state.tasks.push(task),
        }
        Ok(())
    }

    /// Makes every subsequent call fail until [`Self::restore`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the state lock is poisoned.
    pub fn fail_with(&self, message: impl Into<String>) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.outage = Some(message.into());
        Ok(())
    }

    /// Ends a simulated outage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the state lock is poisoned.
    pub fn restore(&self) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.outage = None;
        Ok(())
    }

    /// Returns every task identifier passed to `complete_task`, in call order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the state lock is poisoned.
    pub fn completion_calls(&self) -> TaskSourceResult<Vec<TaskId>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.completion_calls.clone())
    }

    /// Returns a copy of the stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::Transport`] when the state lock is poisoned.
    pub fn snapshot(&self) -> TaskSourceResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.clone())
    }
}

#[async_trait]
impl TaskSource for InMemoryTaskSource {
    async fn list_my_tasks(&self) -> TaskSourceResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        if let Some(message) = &state.outage {
            return Err(TaskSourceError::Unavailable(message.clone()));
        }
        Ok(state.tasks.clone())
    }

    async fn complete_task(&self, id: TaskId) -> TaskSourceResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.completion_calls.push(id);
        if let Some(message) = &state.outage {
            return Err(TaskSourceError::Unavailable(message.clone()));
        }
        let task = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(TaskSourceError::NotFound(id))?;
        task.complete();
        Ok(())
    }
}
