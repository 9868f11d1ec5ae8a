//! Shared world state for "My Tasks" workspace BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use showrunner::task::{
    adapters::memory::{FixedClock, InMemoryTaskSource, RecordingNavigator},
    domain::{CalendarDate, Task},
    services::{BulkCompletion, MyTasksService, TaskListState},
    views::{MyTasksState, MyTasksView},
};

/// Service type used by the BDD world.
pub type TestWorkspaceService = MyTasksService<InMemoryTaskSource, RecordingNavigator, FixedClock>;

/// Scenario world for workspace behaviour tests.
pub struct MyTasksWorld {
    pub source: InMemoryTaskSource,
    pub today: Option<CalendarDate>,
    pub service: Option<TestWorkspaceService>,
    pub ui_state: Option<MyTasksState>,
    pub snapshot: Option<TaskListState>,
    pub last_bulk_completion: Option<BulkCompletion>,
}

impl MyTasksWorld {
    /// Creates a world with an empty task source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: InMemoryTaskSource::new(),
            today: None,
            service: None,
            ui_state: None,
            snapshot: None,
            last_bulk_completion: None,
        }
    }

    /// Returns the loaded service, UI state, and snapshot tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace has not loaded successfully.
    pub fn loaded(&self) -> Result<(&TestWorkspaceService, &MyTasksState, &[Task]), eyre::Report> {
        let service = self
            .service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("workspace has not been loaded"))?;
        let ui_state = self
            .ui_state
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing UI state in scenario world"))?;
        let tasks = self
            .snapshot
            .as_ref()
            .and_then(TaskListState::tasks)
            .ok_or_else(|| eyre::eyre!("task snapshot is not loaded"))?;
        Ok((service, ui_state, tasks))
    }

    /// Derives the current workspace view.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace has not loaded successfully.
    pub fn view(&self) -> Result<MyTasksView<'_>, eyre::Report> {
        let (service, ui_state, tasks) = self.loaded()?;
        Ok(service.view(tasks, ui_state))
    }
}

impl Default for MyTasksWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> MyTasksWorld {
    MyTasksWorld::default()
}

/// Builds a workspace service pinned to `today`.
///
/// # Errors
///
/// Returns an error if local noon does not exist on `today`.
pub fn service_for(
    source: &InMemoryTaskSource,
    today: CalendarDate,
) -> Result<TestWorkspaceService, eyre::Report> {
    let clock = FixedClock::at_noon(today)
        .ok_or_else(|| eyre::eyre!("local noon does not exist on {today}"))?;
    Ok(MyTasksService::new(
        Arc::new(source.clone()),
        Arc::new(RecordingNavigator::new()),
        Arc::new(clock),
    ))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
