//! Application services for the task workspace.

mod my_tasks;

pub use my_tasks::{BulkCompletion, MyTasksError, MyTasksResult, MyTasksService, TaskListState};
