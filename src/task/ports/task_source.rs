//! Port for the external task API: reading the user's tasks and completing them.

use crate::task::domain::{Task, TaskDomainError, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task source operations.
pub type TaskSourceResult<T> = Result<T, TaskSourceError>;

/// Read and complete contract of the external task API.
#[async_trait]
pub trait TaskSource: Send + Sync {
    /// Returns the signed-in user's tasks in API order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError`] when the fetch fails.
    async fn list_my_tasks(&self) -> TaskSourceResult<Vec<Task>>;

    /// Sets the status of one task to done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSourceError::NotFound`] when the task does not exist, or
    /// another variant when the API call fails.
    async fn complete_task(&self, id: TaskId) -> TaskSourceResult<()>;
}

/// Errors returned by task source implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskSourceError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The API returned a record that does not fit the task model.
    #[error("malformed task record: {0}")]
    MalformedRecord(#[from] TaskDomainError),

    /// The API refused or could not serve the request.
    #[error("task service unavailable: {0}")]
    Unavailable(String),

    /// Transport-layer failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
