//! Service layer for the "My Tasks" workspace.

use crate::task::{
    domain::{CalendarDate, Task, TaskId},
    ports::{Navigator, Route, RouteConfig, TaskSource, TaskSourceError},
    views::{MyTasksConfig, MyTasksState, MyTasksView, derive_view},
};
use mockable::Clock;
use std::{collections::HashMap, sync::Arc};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, warn};

/// Service-level errors for workspace operations.
#[derive(Debug, Error)]
pub enum MyTasksError {
    /// The task API rejected or failed the call.
    #[error(transparent)]
    Source(#[from] TaskSourceError),
}

/// Result type for workspace service operations.
pub type MyTasksResult<T> = Result<T, MyTasksError>;

/// Fetch state of the task snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListState {
    /// A fetch is in flight.
    Loading,
    /// The fetch failed; the whole view shows this message and a retry.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
    /// The snapshot is available.
    Loaded(Vec<Task>),
}

impl TaskListState {
    /// Returns the snapshot when loaded.
    #[must_use]
    pub fn tasks(&self) -> Option<&[Task]> {
        match self {
            Self::Loaded(tasks) => Some(tasks),
            Self::Loading | Self::Failed { .. } => None,
        }
    }

    /// Returns the failure message when the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            Self::Loading | Self::Loaded(_) => None,
        }
    }

    /// Returns `true` while a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Outcome of a bulk completion.
#[derive(Debug, Clone, Default)]
pub struct BulkCompletion {
    /// Tasks the API confirmed as completed.
    pub completed: Vec<TaskId>,
    /// Tasks whose completion call failed.
    pub failed: Vec<(TaskId, TaskSourceError)>,
    /// Tasks whose completion call panicked or was cancelled before it
    /// reported an outcome.
    pub aborted: Vec<TaskId>,
}

impl BulkCompletion {
    /// Returns the number of completion calls issued.
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.completed.len() + self.failed.len() + self.aborted.len()
    }
}

/// "My Tasks" workspace orchestration service.
pub struct MyTasksService<S, N, C>
where
    S: TaskSource + 'static,
    N: Navigator,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    navigator: Arc<N>,
    clock: Arc<C>,
    config: MyTasksConfig,
    routes: RouteConfig,
}

impl<S, N, C> Clone for MyTasksService<S, N, C>
where
    S: TaskSource + 'static,
    N: Navigator,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            navigator: Arc::clone(&self.navigator),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
            routes: self.routes.clone(),
        }
    }
}

impl<S, N, C> MyTasksService<S, N, C>
where
    S: TaskSource + 'static,
    N: Navigator,
    C: Clock + Send + Sync,
{
    /// Creates a workspace service with default configuration.
    #[must_use]
    pub fn new(source: Arc<S>, navigator: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            source,
            navigator,
            clock,
            config: MyTasksConfig::default(),
            routes: RouteConfig::default(),
        }
    }

    /// Replaces the view configuration.
    #[must_use]
    pub fn with_config(mut self, config: MyTasksConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the route layout.
    #[must_use]
    pub fn with_routes(mut self, routes: RouteConfig) -> Self {
        self.routes = routes;
        self
    }

    /// Returns the view configuration.
    #[must_use]
    pub const fn config(&self) -> &MyTasksConfig {
        &self.config
    }

    /// Returns the local calendar day.
    #[must_use]
    pub fn today(&self) -> CalendarDate {
        CalendarDate::today(&*self.clock)
    }

    /// Returns fresh UI state for a new workspace instance.
    #[must_use]
    pub fn initial_state(&self) -> MyTasksState {
        MyTasksState::new(self.today(), &self.config)
    }

    /// Fetches the task snapshot.
    ///
    /// Fetch failures are returned as [`TaskListState::Failed`] so the caller
    /// can render the error panel and offer [`Self::retry`].
    pub async fn load(&self) -> TaskListState {
        match self.source.list_my_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded task snapshot");
                TaskListState::Loaded(tasks)
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks");
                TaskListState::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    /// Fetches the snapshot again after a failure.
    pub async fn retry(&self) -> TaskListState {
        self.load().await
    }

    /// Derives the workspace view for `tasks` under `state`.
    #[must_use]
    pub fn view<'a>(&self, tasks: &'a [Task], state: &MyTasksState) -> MyTasksView<'a> {
        derive_view(tasks, state, self.today(), &self.config)
    }

    /// Marks one task as done.
    ///
    /// # Errors
    ///
    /// Returns [`MyTasksError::Source`] when the task API call fails.
    pub async fn complete(&self, id: TaskId) -> MyTasksResult<()> {
        debug!(task_id = %id, "completing task");
        self.source.complete_task(id).await?;
        Ok(())
    }

    /// Marks every selected task as done, then clears the selection.
    ///
    /// Issues one independent completion call per selected task. Calls run
    /// concurrently with no ordering or atomicity across the batch; the
    /// selection is cleared whatever their outcome. Must be called from
    /// within a Tokio runtime.
    pub async fn complete_selected(&self, state: &mut MyTasksState) -> BulkCompletion {
        let mut dispatches = JoinSet::new();
        let mut in_flight = HashMap::new();
        for &id in state.selected() {
            let source = Arc::clone(&self.source);
            debug!(task_id = %id, "dispatching bulk completion");
            let handle = dispatches.spawn(async move { source.complete_task(id).await });
            in_flight.insert(handle.id(), id);
        }

        let mut report = BulkCompletion::default();
        while let Some(joined) = dispatches.join_next_with_id().await {
            match joined {
                Ok((join_id, outcome)) => {
                    let Some(id) = in_flight.remove(&join_id) else {
                        continue;
                    };
                    match outcome {
                        Ok(()) => report.completed.push(id),
                        Err(err) => {
                            warn!(task_id = %id, error = %err, "bulk completion call failed");
                            report.failed.push((id, err));
                        }
                    }
                }
                Err(err) => {
                    let Some(id) = in_flight.remove(&err.id()) else {
                        continue;
                    };
                    warn!(task_id = %id, error = %err, "bulk completion call aborted");
                    report.aborted.push(id);
                }
            }
        }

        state.clear_selection();
        report
    }

    /// Opens the detail page of a task.
    pub fn open_task(&self, id: TaskId) {
        self.go(Route::TaskDetail(id));
    }

    /// Opens the task creation form.
    pub fn new_task(&self) {
        self.go(Route::NewTask);
    }

    /// Opens the user's timesheet.
    pub fn open_timesheet(&self) {
        self.go(Route::MyTimesheet);
    }

    fn go(&self, route: Route) {
        let path = route.path(&self.routes);
        debug!(%path, "navigating");
        self.navigator.navigate(route, &path);
    }
}
