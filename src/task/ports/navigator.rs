//! Port for the host router.

use crate::task::domain::TaskId;
use serde::{Deserialize, Serialize};

/// Destinations the workspace can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Detail page of one task.
    TaskDetail(TaskId),
    /// Task creation form.
    NewTask,
    /// The user's own timesheet.
    MyTimesheet,
}

impl Route {
    /// Renders the route as a path under `config`.
    #[must_use]
    pub fn path(&self, config: &RouteConfig) -> String {
        match self {
            Self::TaskDetail(id) => format!("{}/{id}", config.task_detail_base.trim_end_matches('/')),
            Self::NewTask => config.new_task.clone(),
            Self::MyTimesheet => config.my_timesheet.clone(),
        }
    }
}

/// Path layout of the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Prefix of task detail pages; the task ID is appended.
    pub task_detail_base: String,
    /// Path of the task creation form.
    pub new_task: String,
    /// Path of the user's timesheet.
    pub my_timesheet: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            task_detail_base: "/tasks".to_owned(),
            new_task: "/tasks/new".to_owned(),
            my_timesheet: "/timesheets/me".to_owned(),
        }
    }
}

/// Client-side navigation delegated to the host router.
pub trait Navigator: Send + Sync {
    /// Requests navigation to `path`, the rendering of `route`.
    fn navigate(&self, route: Route, path: &str);
}
